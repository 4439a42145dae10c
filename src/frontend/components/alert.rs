use leptos::prelude::*;

/// Error banner above the login form. The message is shown exactly as given.
#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="mb-4 p-3 rounded-lg text-sm border bg-red-600/10 text-red-600 border-red-600/30">
            {message}
        </div>
    }
}
