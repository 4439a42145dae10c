use leptos::html::Input;
use leptos::prelude::*;

use super::icons::{EyeIcon, EyeSlashIcon};

const INPUT_CLASSES: &str = "w-full px-4 py-2.5 rounded-lg border bg-[var(--input-background)]
                             border-[var(--border-color)] text-[var(--text-color)]
                             focus:outline-none focus:ring-2 focus:ring-sky-500
                             disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] autocomplete: String,
    #[prop(into)] input_type: Signal<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] node_ref: NodeRef<Input>,
    #[prop(optional)] autofocus: bool,
    /// Rendered inside the input's positioning box, e.g. a trailing icon button.
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let has_adornment = children.is_some();
    let classes = if has_adornment {
        format!("{} pr-10", INPUT_CLASSES)
    } else {
        INPUT_CLASSES.to_string()
    };

    view! {
        <div class="mb-4">
            <label for=name.clone() class="block text-sm font-medium mb-2 text-[var(--text-color)]">
                {label}
            </label>
            <div class="relative">
                <input
                    node_ref=node_ref
                    type=move || input_type.get()
                    id=name.clone()
                    name=name
                    autocomplete=autocomplete
                    required=true
                    autofocus=autofocus
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    class=classes
                />
                {children.map(|c| c())}
            </div>
        </div>
    }
}

/// Password field with a masked/plain toggle. Toggling never touches the value.
#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] visible: Signal<bool>,
    /// `"password"` while masked, `"text"` while shown.
    #[prop(into)] input_type: Signal<&'static str>,
    #[prop(into)] toggle_label: Signal<&'static str>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            autocomplete="current-password"
            input_type=input_type
            value=value
            on_input=on_input
            disabled=disabled
        >
            <button
                type="button"
                aria-label=move || toggle_label.get()
                disabled=move || disabled.get()
                on:click=move |_| on_toggle.run(())
                class="absolute right-2 top-1/2 -translate-y-1/2 p-1.5 rounded-full text-[var(--text-color)]
                       hover:bg-gray-100 dark:hover:bg-gray-700
                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
            >
                {move || if visible.get() {
                    view! { <EyeSlashIcon/> }.into_any()
                } else {
                    view! { <EyeIcon/> }.into_any()
                }}
            </button>
        </TextInput>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex items-center">
            <input
                type="checkbox"
                id=id.clone()
                name=id.clone()
                checked=move || checked.get()
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                class="w-4 h-4 rounded accent-sky-900 focus:ring-2 focus:ring-sky-500
                       disabled:opacity-50 disabled:cursor-not-allowed"
            />
            <label for=id class="ml-2 text-sm text-[var(--text-color)]">
                {label}
            </label>
        </div>
    }
}
