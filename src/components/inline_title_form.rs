//! Inline Title Form Component
//!
//! Single-line entry used for new columns, new tasks and renames.
//! Enter submits, Escape cancels, blank titles are rejected.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Inline title entry with submit/cancel buttons
#[component]
pub fn InlineTitleForm(
    #[prop(into)] placeholder: String,
    #[prop(into)] submit_label: String,
    #[prop(into, optional)] initial: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(initial);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus once the input is in the DOM
    Effect::new(move |_| {
        Timeout::new(0, move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        })
        .forget();
    });

    let submit = move || {
        let title = text.get_untracked().trim().to_string();
        if title.is_empty() {
            return;
        }
        on_submit.run(title);
        set_text.set(String::new());
    };

    let cancel = move || {
        set_text.set(String::new());
        on_cancel.run(());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "Escape" => {
            ev.prevent_default();
            cancel();
        }
        _ => {}
    };

    view! {
        <div class="inline-title-form" on:mousedown=|ev| ev.stop_propagation()>
            <input
                type="text"
                node_ref=input_ref
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <div class="inline-title-actions">
                <button type="button" class="ghost-btn" on:click=move |_| cancel()>"Cancel"</button>
                <button type="button" class="primary-btn" on:click=move |_| submit()>{submit_label}</button>
            </div>
        </div>
    }
}
