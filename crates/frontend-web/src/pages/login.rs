//! Login page

use crate::app::Route;
use edunexus_frontend_common::auth::flows;
use edunexus_frontend_common::{api_client, use_is_authenticated, use_session, SessionAction};
use edunexus_http::types::LoginRequest;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let authenticated = use_is_authenticated();
    let navigator = use_navigator().expect("navigator available in router context");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    if authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let credentials = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => flows::login(&client, &credentials).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok((user, roles)) => {
                        session.dispatch(SessionAction::Authenticated { user, roles });
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="bg-white p-8 rounded-lg shadow w-full max-w-md">
                <h1 class="text-2xl font-bold text-gray-900 mb-2">{"EduNexus LMS"}</h1>
                <p class="text-gray-600 mb-6">{"Sign in to your account"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="bg-red-50 text-red-700 p-3 rounded-md mb-4">{message}</div>
                }

                <form onsubmit={on_submit}>
                    <label class="block text-sm text-gray-700 mb-1" for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        class="w-full border rounded-md px-3 py-2 mb-4"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        required=true
                    />

                    <label class="block text-sm text-gray-700 mb-1" for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        class="w-full border rounded-md px-3 py-2 mb-6"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        required=true
                    />

                    <button
                        type="submit"
                        class="w-full bg-indigo-600 hover:bg-indigo-700 text-white py-2 rounded-md"
                        disabled={*submitting}
                    >
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="text-sm text-gray-600 mt-4">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-indigo-600">
                        {"Register"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
