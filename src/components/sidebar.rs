//! Sidebar Component
//!
//! Board summary and members. Slides in over the board on narrow screens.

use leptos::prelude::*;
use taskflow_core::display::{overflow, MAX_VISIBLE_MEMBERS};

use crate::components::Avatar;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_app_store();

    let title = move || state.board().with(|b| b.title.clone());
    let description = move || state.board().with(|b| b.description.clone());
    let updated = move || {
        state
            .board()
            .with(|b| b.updated_at.with_timezone(&chrono::Local).format("%b %-d, %H:%M").to_string())
    };

    let members = move || {
        state.board().with(|b| {
            let (shown, more) = overflow(&b.members, MAX_VISIBLE_MEMBERS);
            view! {
                {shown
                    .iter()
                    .cloned()
                    .map(|user| view! { <Avatar user=user class="avatar-md" /> })
                    .collect_view()}
                {more.map(|n| view! { <span class="avatar avatar-md avatar-more">{format!("+{}", n)}</span> })}
            }
        })
    };

    let sidebar_class = move || {
        if state.sidebar_open().get() { "sidebar open" } else { "sidebar" }
    };

    view! {
        <Show when=move || state.sidebar_open().get()>
            <div class="sidebar-backdrop" on:click=move |_| state.sidebar_open().set(false)></div>
        </Show>
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <h2 class="sidebar-title">{title}</h2>
                <button
                    class="icon-btn sidebar-close"
                    title="Close"
                    on:click=move |_| state.sidebar_open().set(false)
                >
                    "×"
                </button>
            </div>
            <p class="sidebar-description">{description}</p>

            <section class="sidebar-section">
                <h4>"Members"</h4>
                <div class="member-stack">{members}</div>
            </section>

            <p class="sidebar-updated">"Updated " {updated}</p>
        </aside>
    }
}
