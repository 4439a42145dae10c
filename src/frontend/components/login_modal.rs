use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;

use super::{Button, ButtonVariant, Checkbox, ErrorAlert, PasswordInput, TextInput};
use crate::frontend::forms::{error_banner, LoginDraft};
use crate::types::LoginCredentials;

/// Hands the draft's credentials to `on_login`, or drops the submission.
///
/// Returns whether `on_login` ran. It runs at most once per call.
pub fn submit_login(
    draft: &LoginDraft,
    is_loading: bool,
    on_login: Callback<LoginCredentials>,
) -> bool {
    match draft.submit(is_loading) {
        Some(credentials) => {
            log::debug!(
                "Submitting login for {:?} (remember_me={})",
                credentials.username,
                credentials.remember_me
            );
            on_login.run(credentials);
            true
        }
        None => {
            log::trace!("Dropped login submission (incomplete form or busy)");
            false
        }
    }
}

/// Modal login dialog.
///
/// Collects a username, password and remember-me flag and hands them to
/// `on_login` when the form is submitted with a non-blank username and a
/// non-empty password. Submissions that fail that check, or that arrive
/// while `is_loading` is set, are dropped without feedback.
///
/// `error` is shown verbatim above the form. The parent opens and closes the
/// dialog by mounting and unmounting it; the drafts live only as long as the
/// component does.
#[component]
pub fn LoginModal(
    #[prop(into)] on_login: Callback<LoginCredentials>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(LoginDraft::default());
    let username_ref = NodeRef::<Input>::new();

    // Focus the username field once, as soon as it is attached.
    Effect::new(move |focused: Option<bool>| {
        if focused == Some(true) {
            return true;
        }
        match username_ref.get() {
            Some(input) => {
                let _ = input.focus();
                true
            }
            None => false,
        }
    });

    let username = Signal::derive(move || draft.with(|d| d.username().to_string()));
    let password = Signal::derive(move || draft.with(|d| d.password().to_string()));
    let password_visible = Signal::derive(move || draft.with(LoginDraft::password_visible));
    let remember_me = Signal::derive(move || draft.with(LoginDraft::remember_me));
    let submit_disabled = Signal::derive(move || {
        let loading = is_loading.get();
        !draft.with(|d| d.can_submit(loading))
    });

    let banner = move || {
        let error = error.get();
        error_banner(error.as_deref()).map(|message| {
            view! { <ErrorAlert message=message.to_string() /> }
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let loading = is_loading.get_untracked();
        draft.with_untracked(|d| submit_login(d, loading, on_login));
    };

    view! {
        <div
            class="fixed inset-0 z-50 m-0 flex items-center justify-center backdrop-blur-sm bg-black/50"
            role="dialog"
            aria-modal="true"
            aria-label="Sign in"
        >
            <div class="rounded-lg shadow-2xl p-8 w-full max-w-md mx-4 border border-[var(--border-color)]
                        bg-[var(--card-background)] text-[var(--text-color)]">
                <div class="text-center mb-6">
                    <img src="/logo.svg" alt="Logo" class="mx-auto mb-6 w-16 h-16"/>
                </div>

                {banner}

                <form on:submit=on_submit autocomplete="on">
                    <TextInput
                        label="Username"
                        name="username"
                        autocomplete="username"
                        input_type="text"
                        value=username
                        on_input=move |value: String| draft.update(|d| d.set_username(value))
                        disabled=is_loading
                        node_ref=username_ref
                        autofocus=true
                    />
                    <PasswordInput
                        label="Password"
                        value=password
                        on_input=move |value: String| draft.update(|d| d.set_password(value))
                        visible=password_visible
                        input_type=Signal::derive(move || draft.with(LoginDraft::password_input_type))
                        toggle_label=Signal::derive(move || draft.with(LoginDraft::visibility_label))
                        on_toggle=move |_: ()| {
                            let loading = is_loading.get_untracked();
                            draft.update(|d| {
                                d.toggle_password_visibility(loading);
                            });
                        }
                        disabled=is_loading
                    />
                    <Checkbox
                        id="remember-me"
                        label="Remember me for 7 days"
                        checked=remember_me
                        on_change=move |checked: bool| {
                            let loading = is_loading.get_untracked();
                            draft.update(|d| {
                                d.set_remember_me(checked, loading);
                            });
                        }
                        disabled=is_loading
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        disabled=submit_disabled
                        loading=is_loading
                        loading_text="Signing in..."
                    >
                        "Sign In"
                    </Button>
                </form>
            </div>
        </div>
    }
}
