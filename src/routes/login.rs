//! Login route. Submitting the form posts the login record, and the outcome
//! is reported through an overlay dialog: a recognized failure tag selects a
//! canned error dialog, success stores the access token for the tab and
//! routes the user home after a fixed delay. Unrecognized failures show
//! nothing, matching current service behavior.

use crate::components::{AppShell, Button, Spinner, StatusDialog};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::auth::{client, feedback, session};
use crate::routes::{dialog_kind, paths};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Welcome dialog lifetime (milliseconds).
const WELCOME_DISMISS_MS: u32 = 1_500;
/// Delay (milliseconds) before routing a signed-in user home.
const REDIRECT_DELAY_MS: u32 = 3_000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (dialog, set_dialog) = signal::<Option<feedback::Feedback>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(token) => {
                    session::store_access_token(&token.access_token);
                    let attempted = auth.username.get_untracked().unwrap_or_default();
                    set_dialog.set(Some(feedback::login_welcome(&attempted)));
                    Timeout::new(WELCOME_DISMISS_MS, move || set_dialog.set(None)).forget();

                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(paths::HOME, Default::default());
                    })
                    .forget();
                }
                Err(err) => set_dialog.set(feedback::login_feedback(&err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_dialog.set(None);

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        auth.set_username(request.username.clone());
        login_action.dispatch(request);

        set_username.set(String::new());
        set_password.set(String::new());
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto mt-16" on:submit=on_submit>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="username"
                    >
                        "Your username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="username"
                        on:input=move |event| set_username.set(event_target_value(&event))
                        value=move || username.get()
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="current-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                        value=move || password.get()
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Log in"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
            {move || {
                dialog
                    .get()
                    .map(|feedback| {
                        view! {
                            <StatusDialog
                                kind=dialog_kind(feedback.kind)
                                title=feedback.title
                                text=feedback.text
                                on_close=Callback::new(move |()| set_dialog.set(None))
                            />
                        }
                    })
            }}
        </AppShell>
    }
}
