//! Dashboard shell
//!
//! Read-only consumer of the session: renders the current user and role
//! list and offers logout. The course/attendance/grade panels are
//! placeholders until those modules land.

use crate::app::Route;
use edunexus_core::TokenStore;
use edunexus_frontend_common::auth::flows;
use edunexus_frontend_common::{
    api_client, use_is_authenticated, use_session, BrowserTokenStore, SessionAction,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let authenticated = use_is_authenticated();
    let navigator = use_navigator().expect("navigator available in router context");

    if session.is_loading {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <p class="text-gray-600">{"Loading..."}</p>
            </div>
        };
    }

    if !authenticated {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                session.dispatch(SessionAction::SetLoading(true));
                match api_client() {
                    Ok(client) => flows::logout(&client).await,
                    Err(err) => {
                        // Local state is cleared regardless.
                        tracing::error!(error = %err, "failed to build API client");
                        BrowserTokenStore::new().clear();
                    }
                }
                session.dispatch(SessionAction::ClearSession);
                navigator.push(&Route::Login);
            });
        })
    };

    let user = session.user.clone();
    let roles = if session.roles.is_empty() {
        "No roles assigned".to_string()
    } else {
        session.roles.join(", ")
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="bg-white shadow">
                <div class="max-w-7xl mx-auto px-4 h-16 flex justify-between items-center">
                    <h1 class="text-xl font-semibold text-gray-900">{"EduNexus LMS"}</h1>
                    <div class="flex items-center space-x-4">
                        if let Some(user) = &user {
                            <span class="text-sm text-gray-700">
                                { format!("Welcome, {}", user.full_name()) }
                            </span>
                        }
                        <button
                            onclick={on_logout}
                            class="bg-indigo-600 hover:bg-indigo-700 text-white px-3 py-2 rounded-md text-sm"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto py-6 px-4">
                <div class="bg-white p-6 rounded-lg shadow mb-6">
                    <h3 class="text-lg font-semibold mb-4">{"User Information"}</h3>
                    if let Some(user) = &user {
                        <div class="space-y-2 text-gray-700">
                            <p><strong>{"Name: "}</strong>{ user.full_name() }</p>
                            <p><strong>{"Email: "}</strong>{ user.email.clone() }</p>
                            <p><strong>{"Username: "}</strong>{ user.username.clone() }</p>
                            if let Some(phone) = &user.phone {
                                <p><strong>{"Phone: "}</strong>{ phone.clone() }</p>
                            }
                            <p><strong>{"Roles: "}</strong>{ roles }</p>
                        </div>
                    }
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="bg-white p-6 rounded-lg shadow">
                        <h4 class="text-lg font-semibold mb-2">{"Courses"}</h4>
                        <p class="text-gray-600">{"Manage your courses and assignments"}</p>
                    </div>
                    <div class="bg-white p-6 rounded-lg shadow">
                        <h4 class="text-lg font-semibold mb-2">{"Attendance"}</h4>
                        <p class="text-gray-600">{"Track and manage attendance"}</p>
                    </div>
                    <div class="bg-white p-6 rounded-lg shadow">
                        <h4 class="text-lg font-semibold mb-2">{"Grades"}</h4>
                        <p class="text-gray-600">{"View grades and academic progress"}</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
