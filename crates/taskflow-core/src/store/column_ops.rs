//! Column Operations

use super::BoardStore;
use crate::domain::Column;
use crate::ids::COLUMN_PREFIX;

impl BoardStore {
    /// Append an empty column. Blank titles are ignored.
    pub fn add_column(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            Self::ignore("add_column", "blank title");
            return None;
        }

        let board = &self.board;
        let id = self.ids.next(COLUMN_PREFIX, |id| board.contains_id(id));

        let mut next = self.draft();
        next.columns.push(Column::new(id.clone(), title));
        self.install("add_column", next, true);
        Some(id)
    }

    /// Rename a column
    pub fn update_column(&mut self, column_id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            Self::ignore("update_column", "blank title");
            return false;
        }
        let Some(index) = self.board.column_index(column_id) else {
            Self::ignore("update_column", "unknown column");
            return false;
        };

        let mut next = self.draft();
        next.columns[index].title = title.to_string();
        self.install("update_column", next, true);
        true
    }

    /// Remove a column together with its tasks
    pub fn delete_column(&mut self, column_id: &str) -> bool {
        let Some(index) = self.board.column_index(column_id) else {
            Self::ignore("delete_column", "unknown column");
            return false;
        };

        let mut next = self.draft();
        let removed = next.columns.remove(index);
        log::debug!("[STORE] delete_column drops {} tasks", removed.tasks.len());
        self.install("delete_column", next, true);
        true
    }

    /// Flip the collapsed flag. View state only, so `updated_at` stays put.
    pub fn toggle_collapse_column(&mut self, column_id: &str) -> bool {
        let Some(index) = self.board.column_index(column_id) else {
            Self::ignore("toggle_collapse_column", "unknown column");
            return false;
        };

        let mut next = self.draft();
        let column = &mut next.columns[index];
        column.collapsed = !column.collapsed;
        self.install("toggle_collapse_column", next, false);
        true
    }
}
