use leptos::prelude::*;

use super::icons::Spinner;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

#[component]
pub fn Button(
    children: ChildrenFn,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let base_classes = "w-full py-2.5 px-4 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-sky-500";

    let variant_classes = match variant {
        ButtonVariant::Primary => "text-white bg-sky-700 hover:bg-sky-800 disabled:hover:bg-sky-700",
        ButtonVariant::Ghost => "border border-[var(--border-color)] text-[var(--text-color)] hover:bg-gray-100 dark:hover:bg-gray-700",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {move || if loading.get() {
                view! {
                    <span class="flex items-center justify-center">
                        <Spinner/>
                        {loading_text_display.clone()}
                    </span>
                }
                .into_any()
            } else {
                children().into_any()
            }}
        </button>
    }
}
