//! Overlay dialogs for submit outcomes and confirmation prompts. Messages must
//! be safe to render and should never include credentials or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
/// Supported status dialog styles.
pub enum DialogKind {
    Success,
    Error,
}

/// Renders an overlay card reporting the outcome of a submit action. Error
/// dialogs offer a close button; success dialogs stay up until the caller
/// dismisses them or navigates away.
#[component]
pub fn StatusDialog(
    kind: DialogKind,
    title: &'static str,
    text: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (icon, icon_class) = match kind {
        DialogKind::Success => ("check_circle", "material-symbols-outlined text-6xl text-emerald-600 mb-4"),
        DialogKind::Error => ("error", "material-symbols-outlined text-6xl text-red-600 mb-4"),
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
            <div
                class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md p-8 text-center animate-in fade-in zoom-in duration-200"
                role="alertdialog"
                aria-label=title
            >
                <span class=icon_class>{icon}</span>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{title}</h2>
                <p class="text-gray-500 dark:text-gray-400 text-sm">{text}</p>
                {matches!(kind, DialogKind::Error)
                    .then_some(view! {
                        <button
                            on:click=move |_| on_close.run(())
                            class="mt-6 px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                        >
                            "Close"
                        </button>
                    })}
            </div>
        </div>
    }
}

/// Renders a warning prompt with confirm and cancel actions.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    text: String,
    confirm_label: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
            <div
                class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md p-8 text-center animate-in fade-in zoom-in duration-200"
                role="alertdialog"
                aria-label=title
            >
                <span class="material-symbols-outlined text-6xl text-amber-500 mb-4">"warning"</span>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{title}</h2>
                <p class="text-gray-500 dark:text-gray-400 text-sm">{text}</p>
                <div class="mt-6 flex flex-col-reverse sm:flex-row gap-3 sm:justify-center">
                    <button
                        on:click=move |_| on_cancel.run(())
                        class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=move |_| on_confirm.run(())
                        class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
