//! Task Operations

use super::BoardStore;
use crate::domain::{Task, TaskDraft, TaskPatch};
use crate::ids::TASK_PREFIX;

impl BoardStore {
    /// Append a new task to the end of a column
    pub fn add_task(&mut self, column_id: &str, draft: TaskDraft) -> Option<String> {
        let Some(index) = self.board.column_index(column_id) else {
            Self::ignore("add_task", "unknown column");
            return None;
        };
        if self.board.columns[index].is_at_capacity() {
            log::warn!("[STORE] add_task into '{}' which is at its WIP limit", column_id);
        }

        let board = &self.board;
        let id = self.ids.next(TASK_PREFIX, |id| board.contains_id(id));
        let task = Task::from_draft(id.clone(), draft, self.clock.now());

        let mut next = self.draft();
        next.columns[index].tasks.push(task);
        self.install("add_task", next, true);
        Some(id)
    }

    /// Merge `patch` into the first task with this id
    pub fn update_task(&mut self, task_id: &str, mut patch: TaskPatch) -> bool {
        let Some((ci, ti)) = self.board.locate_task(task_id) else {
            Self::ignore("update_task", "unknown task");
            return false;
        };
        if let Some(title) = patch.title.as_mut() {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                Self::ignore("update_task", "blank title");
                return false;
            }
            *title = trimmed.to_string();
        }

        let mut next = self.draft();
        next.columns[ci].tasks[ti].apply(patch);
        self.install("update_task", next, true);
        true
    }

    /// Remove a task from whichever column holds it
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        if self.board.locate_task(task_id).is_none() {
            Self::ignore("delete_task", "unknown task");
            return false;
        }

        let mut next = self.draft();
        for column in &mut next.columns {
            column.tasks.retain(|task| task.id != task_id);
        }
        self.install("delete_task", next, true);
        true
    }
}
