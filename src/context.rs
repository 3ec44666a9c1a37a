//! Board Context
//!
//! The board store provided via Leptos Context API. Components call the
//! operations here; the store publishes each new board into the reactive
//! `AppStore`, which is what the views read.

use leptos::prelude::*;
use leptos_dragdrop::ActivationConstraint;
use taskflow_core::drag::resolve_drop;
use taskflow_core::{AppConfig, BoardStore, TaskDraft, TaskPatch};

use crate::store::{AppStore, AppStateStoreFields};

/// Board operations shared by every component
#[derive(Clone, Copy)]
pub struct BoardContext {
    store: StoredValue<BoardStore>,
    /// Press-and-move rule for starting drags
    pub activation: ActivationConstraint,
}

impl BoardContext {
    pub fn new(mut board_store: BoardStore, app_store: AppStore, config: &AppConfig) -> Self {
        board_store.subscribe(move |board| {
            app_store.board().set((**board).clone());
        });
        Self {
            store: StoredValue::new(board_store),
            activation: ActivationConstraint::new(config.drag.delay_ms, config.drag.tolerance_px),
        }
    }

    pub fn add_column(&self, title: &str) -> Option<String> {
        self.store.try_update_value(|s| s.add_column(title)).flatten()
    }

    pub fn update_column(&self, column_id: &str, title: &str) -> bool {
        self.mutate(|s| s.update_column(column_id, title))
    }

    pub fn delete_column(&self, column_id: &str) -> bool {
        self.mutate(|s| s.delete_column(column_id))
    }

    pub fn toggle_collapse_column(&self, column_id: &str) -> bool {
        self.mutate(|s| s.toggle_collapse_column(column_id))
    }

    pub fn add_task(&self, column_id: &str, draft: TaskDraft) -> Option<String> {
        self.store.try_update_value(|s| s.add_task(column_id, draft)).flatten()
    }

    pub fn update_task(&self, task_id: &str, patch: TaskPatch) -> bool {
        self.mutate(|s| s.update_task(task_id, patch))
    }

    pub fn delete_task(&self, task_id: &str) -> bool {
        self.mutate(|s| s.delete_task(task_id))
    }

    pub fn move_task(
        &self,
        task_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        new_index: Option<usize>,
    ) -> bool {
        self.mutate(|s| s.move_task(task_id, source_column_id, destination_column_id, new_index))
    }

    /// Finish a drag: resolve the drop against the current board and move
    pub fn drop_task(&self, dragged_id: &str, dropped_on: Option<&str>) -> bool {
        let request = self
            .store
            .with_value(|s| resolve_drop(s.board(), dragged_id, dropped_on));
        match request {
            Some(request) => {
                log::info!(
                    "[DND] Drop {} -> {} at {:?}",
                    request.task_id,
                    request.destination_column_id,
                    request.new_index
                );
                self.mutate(|s| s.apply_move(&request))
            }
            None => {
                log::debug!("[DND] Drop of {} on {:?} ignored", dragged_id, dropped_on);
                false
            }
        }
    }

    fn mutate(&self, op: impl FnOnce(&mut BoardStore) -> bool) -> bool {
        self.store.try_update_value(op).unwrap_or(false)
    }
}

/// Board context for the current component tree.
///
/// Panics when called outside the provider: that is a wiring bug, not
/// something to recover from.
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
