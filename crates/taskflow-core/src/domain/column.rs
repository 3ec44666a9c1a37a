//! Column Entity
//!
//! An ordered bucket of tasks. Task order is display order.

use serde::{Deserialize, Serialize};

use super::entity::{position_of, Entity};
use super::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// CSS color for the header dot
    pub color: Option<String>,
    /// Work-in-progress limit
    pub limit: Option<usize>,
    #[serde(default)]
    pub collapsed: bool,
}

impl Column {
    /// Create an empty column with no limit
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
            color: None,
            limit: None,
            collapsed: false,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn task_position(&self, task_id: &str) -> Option<usize> {
        position_of(&self.tasks, task_id)
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task_position(task_id).is_some()
    }

    /// At or above the WIP limit. Columns without a limit never are.
    pub fn is_at_capacity(&self) -> bool {
        matches!(self.limit, Some(limit) if self.tasks.len() >= limit)
    }
}

impl Entity for Column {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;
    use chrono::Utc;

    fn task(id: &str) -> Task {
        Task::from_draft(id.to_string(), TaskDraft::titled(id), Utc::now())
    }

    #[test]
    fn test_capacity() {
        let column = Column::new("c", "Doing").with_tasks(vec![task("t1"), task("t2")]);
        assert!(!column.is_at_capacity());
        assert!(!column.clone().with_limit(3).is_at_capacity());
        assert!(column.clone().with_limit(2).is_at_capacity());
        assert!(column.with_limit(1).is_at_capacity());
    }

    #[test]
    fn test_task_position() {
        let column = Column::new("c", "Todo").with_tasks(vec![task("t1"), task("t2")]);
        assert_eq!(column.task_position("t2"), Some(1));
        assert!(!column.contains_task("t3"));
    }
}
