mod home;
mod login;
mod not_found;
mod signup;

pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignUpPage;

use crate::components::DialogKind;
use crate::features::auth::feedback::FeedbackKind;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by navigation and links.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
}

/// Maps feedback styles onto the dialog component's styles.
pub(crate) fn dialog_kind(kind: FeedbackKind) -> DialogKind {
    match kind {
        FeedbackKind::Success => DialogKind::Success,
        FeedbackKind::Error => DialogKind::Error,
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
