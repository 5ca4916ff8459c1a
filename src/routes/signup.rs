//! Signup route. Submitting the form captures the registration record, asks
//! the user to confirm, and clears every input field right away; the cleared
//! fields never come back regardless of what the server answers. A confirmed
//! record is posted once, success routes the user to the login page after a
//! fixed delay, and recognized failure tags select a canned error dialog.

use crate::components::{AppShell, Button, ConfirmDialog, Spinner, StatusDialog};
use crate::features::auth::types::RegistrationRequest;
use crate::features::auth::{client, feedback};
use crate::routes::{dialog_kind, paths};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Delay (milliseconds) before routing a registered user to the login page.
const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal::<Option<RegistrationRequest>>(None);
    let (dialog, set_dialog) = signal::<Option<feedback::Feedback>>(None);

    let signup_action = Action::new_local(move |request: &RegistrationRequest| {
        let request = request.clone();
        async move { client::signup(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(()) => {
                    set_dialog.set(Some(feedback::signup_success()));
                    let navigate = navigate.clone();
                    Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(paths::LOGIN, Default::default());
                    })
                    .forget();
                }
                Err(err) => set_dialog.set(feedback::signup_feedback(&err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_dialog.set(None);

        let request = RegistrationRequest {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            date_of_birth: date_of_birth.get_untracked(),
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        set_pending.set(Some(request));

        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_date_of_birth.set(String::new());
        set_email.set(String::new());
        set_username.set(String::new());
        set_password.set(String::new());
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto mt-16" on:submit=on_submit>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="first_name"
                    >
                        "First name"
                    </label>
                    <input
                        id="first_name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="given-name"
                        on:input=move |event| set_first_name.set(event_target_value(&event))
                        value=move || first_name.get()
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="last_name"
                    >
                        "Last name"
                    </label>
                    <input
                        id="last_name"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="family-name"
                        on:input=move |event| set_last_name.set(event_target_value(&event))
                        value=move || last_name.get()
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="date_of_birth"
                    >
                        "Date of birth"
                    </label>
                    <input
                        id="date_of_birth"
                        type="date"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="bday"
                        on:input=move |event| set_date_of_birth.set(event_target_value(&event))
                        value=move || date_of_birth.get()
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500"
                        autocomplete="email"
                        placeholder="name@inbox.im"
                        on:input=move |event| set_email.set(event_target_value(&event))
                        value=move || email.get()
                    />
                </div>
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
                        autocomplete="new-password"
                        on:input=move |event| set_password.set(event_target_value(&event))
                        value=move || password.get()
                    />
                </div>
                <Button button_type="submit" disabled=signup_action.pending()>
                    "Sign up"
                </Button>
                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
            {move || {
                pending
                    .get()
                    .map(|request| {
                        view! {
                            <ConfirmDialog
                                title="Save this account?"
                                text="Confirm registration to create the account.".to_string()
                                confirm_label="Register"
                                on_confirm=Callback::new(move |()| {
                                    signup_action.dispatch(request.clone());
                                    set_pending.set(None);
                                })
                                on_cancel=Callback::new(move |()| set_pending.set(None))
                            />
                        }
                    })
            }}
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
