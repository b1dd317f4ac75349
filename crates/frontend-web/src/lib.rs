pub mod app;
pub mod pages;

pub use app::{App, Route};
