//! Task Positioning
//!
//! Moving tasks between and within columns.

use super::BoardStore;

impl BoardStore {
    /// Move a task out of `source_column_id` into `destination_column_id`.
    ///
    /// With `new_index` in range (`<=` the destination length once the task
    /// has been taken out) the task is inserted there, otherwise appended.
    /// For a reorder inside one column the task therefore ends up exactly at
    /// `new_index`, which is what an index read off the list before the move
    /// expects.
    ///
    /// Crossing columns re-derives the status through the store's
    /// [`StatusPolicy`](super::StatusPolicy); reordering never does.
    pub fn move_task(
        &mut self,
        task_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        new_index: Option<usize>,
    ) -> bool {
        let Some(source) = self.board.column_index(source_column_id) else {
            Self::ignore("move_task", "unknown source column");
            return false;
        };
        let Some(from) = self.board.columns[source].task_position(task_id) else {
            Self::ignore("move_task", "source column does not hold the task");
            return false;
        };
        let Some(destination) = self.board.column_index(destination_column_id) else {
            Self::ignore("move_task", "unknown destination column");
            return false;
        };

        let mut next = self.draft();
        let mut task = next.columns[source].tasks.remove(from);

        if source != destination {
            if let Some(status) = self.policy.status_for(&next.columns[destination]) {
                task.status = status;
            }
        }

        let tasks = &mut next.columns[destination].tasks;
        match new_index {
            Some(index) if index <= tasks.len() => tasks.insert(index, task),
            _ => tasks.push(task),
        }

        self.install("move_task", next, true);
        true
    }
}
