use edunexus_frontend_common::AuthConfig;
use edunexus_frontend_web::App;
use edunexus_http::client::expiry;
use std::rc::Rc;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // Irrecoverable token renewal failures clear storage inside the
    // client; the app's part is sending the user back to the login
    // entry point.
    expiry::on_session_expired(Rc::new(|| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(AuthConfig::LOGIN_ROUTE);
        }
    }));

    yew::Renderer::<App>::new().render();
}
