//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `board` mirrors the latest value published by the board store;
//! everything else here is view state.

use leptos::prelude::*;
use reactive_stores::Store;
use taskflow_core::{Board, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Latest published board value
    pub board: Board,
    /// Task shown in the floating drag preview
    pub active_task: Option<Task>,
    /// Task open in the editor panel
    pub editing_task: Option<String>,
    /// Search box contents
    pub search_query: String,
    /// Sidebar visibility on narrow screens
    pub sidebar_open: bool,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            active_task: None,
            editing_task: None,
            search_query: String::new(),
            sidebar_open: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
