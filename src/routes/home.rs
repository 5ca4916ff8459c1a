//! Home route reached after a successful login. It is intentionally minimal
//! and does not expose sensitive data; the access token stays in session
//! storage for authenticated features outside this page.

use crate::components::AppShell;
use crate::features::auth::session;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the home page shell with a signed-in hint.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AppShell>
            <div class="max-w-5xl mx-auto px-6 py-16">
                <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">"Home"</h1>
                {move || match auth.username.get() {
                    Some(name) => view! {
                        <p class="mt-4 text-gray-500 dark:text-gray-400">
                            {format!("Signed in as {name}.")}
                        </p>
                    }
                    .into_any(),
                    None if session::access_token().is_some() => view! {
                        <p class="mt-4 text-gray-500 dark:text-gray-400">
                            "Signed in."
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <p class="mt-4 text-gray-500 dark:text-gray-400">
                            "No active session. "
                            <A
                                href={paths::LOGIN}
                                {..}
                                class="text-blue-700 hover:underline dark:text-blue-500"
                            >
                                "Log in"
                            </A>
                        </p>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
