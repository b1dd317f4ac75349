mod tokens;
mod types;
