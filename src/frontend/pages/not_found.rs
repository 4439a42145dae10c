//! 404 Not Found page

use leptos::prelude::*;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-[var(--page-background)]">
            <div class="text-center text-[var(--text-color)]">
                <h1 class="text-8xl font-bold mb-4">"404"</h1>
                <p class="text-2xl font-semibold mb-2">"Page not found"</p>
                <p class="opacity-70 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a href="/login" class="inline-block py-2.5 px-4 rounded-lg font-medium text-white bg-sky-700 hover:bg-sky-800">
                    "Go to sign in"
                </a>
            </div>
        </div>
    }
}
