//! Header Component
//!
//! Board title, member count, search box and the sidebar toggle.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_store();

    let title = move || state.board().with(|b| b.title.clone());
    let members = move || {
        let count = state.board().with(|b| b.members.len());
        if count == 1 { "1 Member".to_string() } else { format!("{} Members", count) }
    };

    view! {
        <header class="app-header">
            <button
                class="icon-btn sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| state.sidebar_open().update(|open| *open = !*open)
            >
                "☰"
            </button>
            <h1 class="board-title">{title}</h1>
            <span class="member-badge">{members}</span>
            <div class="header-search">
                <input
                    type="search"
                    placeholder="Search tasks..."
                    prop:value=move || state.search_query().get()
                    on:input=move |ev| state.search_query().set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            state.search_query().set(String::new());
                        }
                    }
                />
            </div>
        </header>
    }
}
