//! Process-wide auth state shared through Leptos context. The only state is
//! the username of the most recent login attempt, held to personalize the
//! welcome dialog and the home view. Most-recent-attempt wins; nothing else
//! is derived from it.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth context shared through Leptos.
pub struct AuthContext {
    pub username: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Builds a context around the provided username signal.
    fn new(username: RwSignal<Option<String>>) -> Self {
        Self { username }
    }

    /// Records the username of the current login attempt.
    pub fn set_username(&self, username: String) {
        self.username.set(Some(username));
    }
}

/// Provides auth context for the route tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let username = RwSignal::new(None);
    provide_context(AuthContext::new(username));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
