//! Minimal page shell with the product header and build footer. The shell
//! carries no session-dependent chrome; routes decide what to render inside.

use crate::app_lib::build_info::git_commit_hash;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-between">
                    <A
                        href={paths::HOME}
                        {..}
                        class="text-lg font-semibold text-gray-900 dark:text-white"
                    >
                        "Soldi"
                    </A>
                    <nav class="flex items-center gap-4 text-sm text-gray-500 dark:text-gray-400">
                        <A
                            href={paths::LOGIN}
                            {..}
                            class="hover:text-gray-900 dark:hover:text-white"
                        >
                            "Log in"
                        </A>
                        <A
                            href={paths::SIGNUP}
                            {..}
                            class="hover:text-gray-900 dark:hover:text-white"
                        >
                            "Sign up"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1">{children()}</main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-600">
                {format!("build {}", git_commit_hash())}
            </footer>
        </div>
    }
}
