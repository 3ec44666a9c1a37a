//! Board Entity
//!
//! Top-level container: ordered columns, metadata, members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::column::Column;
use super::entity::{find_by_id, position_of, DomainError, DomainResult, Entity};
use super::task::Task;
use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub description: String,
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub members: Vec<User>,
}

impl Board {
    pub fn new(id: impl Into<String>, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            columns: Vec::new(),
            created_at: now,
            updated_at: now,
            members: Vec::new(),
        }
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        find_by_id(&self.columns, column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        position_of(&self.columns, column_id)
    }

    /// Locate a task: (column index, task index), first match in column order
    pub fn locate_task(&self, task_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, column)| column.task_position(task_id).map(|ti| (ci, ti)))
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.locate_task(task_id)
            .map(|(ci, ti)| &self.columns[ci].tasks[ti])
    }

    /// The column currently holding a task
    pub fn column_of_task(&self, task_id: &str) -> Option<&Column> {
        self.locate_task(task_id).map(|(ci, _)| &self.columns[ci])
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.column(id).is_some() || self.locate_task(id).is_some()
    }

    /// Advance `updated_at` to `now`, never backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Check the uniqueness invariants: column ids are unique and every
    /// task id appears in exactly one place on the board.
    pub fn validate(&self) -> DomainResult<()> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id()) {
                return Err(DomainError::Conflict(format!("duplicate column id '{}'", column.id)));
            }
            for task in &column.tasks {
                if !task_ids.insert(task.id()) {
                    return Err(DomainError::Conflict(format!("duplicate task id '{}'", task.id)));
                }
            }
        }
        Ok(())
    }
}

impl Entity for Board {
    fn id(&self) -> &str {
        &self.id
    }
}
