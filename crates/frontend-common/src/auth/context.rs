//! Global session context and provider

use crate::auth::flows;
use crate::client::api_client;
use crate::storage::BrowserTokenStore;
use edunexus_core::{TokenStore, User};
use std::rc::Rc;
use yew::prelude::*;

/// In-memory session state: the current user, their role names, and a
/// loading flag covering startup hydration and in-flight transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionData {
    pub user: Option<User>,
    pub roles: Vec<String>,
    pub is_loading: bool,
}

impl Default for SessionData {
    fn default() -> Self {
        // Start loading: stored tokens may still hydrate this session.
        Self {
            user: None,
            roles: Vec::new(),
            is_loading: true,
        }
    }
}

impl SessionData {
    /// Authenticated means a user is present in memory and an access
    /// token is present in durable storage.
    pub fn is_authenticated(&self, tokens: &dyn TokenStore) -> bool {
        self.user.is_some() && tokens.access_token().is_some()
    }
}

/// Session state transitions
pub enum SessionAction {
    /// A login/register/hydration flow completed.
    Authenticated { user: User, roles: Vec<String> },
    /// Drop the in-memory session (logout or expiry).
    ClearSession,
    SetLoading(bool),
}

/// Session context handle
pub type SessionContext = UseReducerHandle<SessionData>;

impl Reducible for SessionData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Authenticated { user, roles } => Rc::new(Self {
                user: Some(user),
                roles,
                is_loading: false,
            }),
            SessionAction::ClearSession => Rc::new(Self {
                user: None,
                roles: Vec::new(),
                is_loading: false,
            }),
            SessionAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the session state and hydrates it from durable storage on mount.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionData::default);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client() {
                    Ok(client) => match flows::initialize(&client).await {
                        Some((user, roles)) => {
                            session.dispatch(SessionAction::Authenticated { user, roles });
                        }
                        None => session.dispatch(SessionAction::SetLoading(false)),
                    },
                    Err(err) => {
                        tracing::error!(error = %err, "failed to build API client");
                        session.dispatch(SessionAction::SetLoading(false));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the component tree in SessionProvider")
}

/// Hook to get the current user, if any
#[hook]
pub fn use_session_user() -> Option<User> {
    let session = use_session();
    session.user.clone()
}

/// Hook to check if the session is authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated(&BrowserTokenStore::new())
}
