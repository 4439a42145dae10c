//! Login page: mounts the dialog and wires it to the `login` server function

use leptos::prelude::*;

use crate::api::Login;
use crate::common::server_error_message;
use crate::frontend::components::{Button, ButtonVariant, LoginModal};
use crate::types::{LoginCredentials, SignedInUser};

#[component]
pub fn LoginPage() -> impl IntoView {
    let login_action = ServerAction::<Login>::new();
    let pending = login_action.pending();
    let result = login_action.value();

    let error_message = Signal::derive(move || {
        result
            .get()
            .and_then(|r| r.err().map(|e| server_error_message(&e)))
    });

    let signed_in = Signal::derive(move || result.get().and_then(Result::ok));

    let on_login = move |credentials: LoginCredentials| {
        login_action.dispatch(Login {
            username: credentials.username,
            password: credentials.password,
            remember_me: credentials.remember_me,
        });
    };

    let sign_out = move |_: ()| {
        result.set(None);
    };

    view! {
        <div class="min-h-screen bg-[var(--page-background)]">
            <Show
                when=move || signed_in.with(Option::is_some)
                fallback=move || view! {
                    <LoginModal on_login=on_login error=error_message is_loading=pending />
                }
            >
                <div class="min-h-screen flex items-center justify-center px-6">
                    <div class="w-full max-w-md">
                        <div role="status" class="p-6 rounded-lg border shadow-xl border-[var(--border-color)]
                                                  bg-[var(--card-background)] text-[var(--text-color)]">
                            <p class="mb-4 text-sm">{signed_in_message(signed_in.get_untracked())}</p>
                            <Button
                                variant=ButtonVariant::Ghost
                                button_type="button"
                                disabled=false
                                loading=false
                                on_click=sign_out
                            >
                                "Sign out"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn signed_in_message(user: Option<SignedInUser>) -> String {
    match user {
        Some(user) if user.remember_me => {
            format!("Signed in as {} (remembered for 7 days)", user.username)
        }
        Some(user) => format!("Signed in as {}", user.username),
        None => String::new(),
    }
}
