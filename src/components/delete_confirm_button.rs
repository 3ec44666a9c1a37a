//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms, the second confirms.
//! Clicks never bubble, so the card or column underneath does not react.

use leptos::prelude::*;

/// × button that asks "Delete?" before running `on_confirm`
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, optional)] prompt: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = prompt.unwrap_or_else(|| "Delete?".to_string());

    let stop = |ev: web_sys::MouseEvent| ev.stop_propagation();

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:click=stop on:mousedown=stop>
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        title="Keep"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title="Delete"
                    on:mousedown=stop
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
