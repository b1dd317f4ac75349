//! Registration page

use crate::app::Route;
use edunexus_frontend_common::auth::flows;
use edunexus_frontend_common::{api_client, use_is_authenticated, use_session, SessionAction};
use edunexus_http::types::RegisterRequest;
use yew::prelude::*;
use yew_router::prelude::*;

fn bind_input(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let authenticated = use_is_authenticated();
    let navigator = use_navigator().expect("navigator available in router context");

    let username = use_state(String::new);
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let phone = use_state(String::new);
    let password = use_state(String::new);
    let password_confirm = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    if authenticated {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let username = username.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let phone = phone.clone();
        let password = password.clone();
        let password_confirm = password_confirm.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = RegisterRequest {
                username: (*username).clone(),
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                password: (*password).clone(),
                password_confirm: (*password_confirm).clone(),
                phone: Some((*phone).clone()).filter(|p| !p.is_empty()),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => flows::register(&client, &data).await,
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

    let field = |label: &str, id: &str, kind: &str, state: &UseStateHandle<String>, required: bool| {
        html! {
            <>
                <label class="block text-sm text-gray-700 mb-1" for={id.to_string()}>{label}</label>
                <input
                    id={id.to_string()}
                    type={kind.to_string()}
                    class="w-full border rounded-md px-3 py-2 mb-4"
                    value={(**state).clone()}
                    oninput={bind_input(state.clone())}
                    required={required}
                />
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center py-8">
            <div class="bg-white p-8 rounded-lg shadow w-full max-w-md">
                <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Create your account"}</h1>
                <p class="text-gray-600 mb-6">{"Join EduNexus LMS"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="bg-red-50 text-red-700 p-3 rounded-md mb-4">{message}</div>
                }

                <form onsubmit={on_submit}>
                    { field("Username", "username", "text", &username, true) }
                    { field("Email", "email", "email", &email, true) }
                    { field("First name", "first_name", "text", &first_name, true) }
                    { field("Last name", "last_name", "text", &last_name, true) }
                    { field("Phone (optional)", "phone", "tel", &phone, false) }
                    { field("Password", "password", "password", &password, true) }
                    { field("Confirm password", "password_confirm", "password", &password_confirm, true) }

                    <button
                        type="submit"
                        class="w-full bg-indigo-600 hover:bg-indigo-700 text-white py-2 rounded-md"
                        disabled={*submitting}
                    >
                        { if *submitting { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <p class="text-sm text-gray-600 mt-4">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-indigo-600">
                        {"Sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
