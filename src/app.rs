//! TaskFlow App
//!
//! Header on top, sidebar and board below, task editor on the right.

use leptos::prelude::*;
use reactive_stores::Store;
use taskflow_core::seed::seed_board;
use taskflow_core::{AppConfig, BoardStore, SystemClock};

use crate::components::{DraggableBoard, Header, Sidebar, TaskEditor};
use crate::context::BoardContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let board = seed_board(chrono::Utc::now());
    log::info!(
        "[APP] Loaded board '{}' with {} columns, {} tasks",
        board.title,
        board.columns.len(),
        board.task_count()
    );

    let app_store = Store::new(AppState::new(board.clone()));
    let board_store = BoardStore::new(board, config.status_policy.clone(), SystemClock);

    // Provide context to all children
    provide_context(app_store);
    provide_context(BoardContext::new(board_store, app_store, &config));

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="main-content">
                    <DraggableBoard />
                </main>
                <TaskEditor />
            </div>
        </div>
    }
}
