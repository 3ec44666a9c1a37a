//! Status-on-Move Policy
//!
//! Decides what status a task takes when it lands in another column.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Column, TaskStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Column id -> status. Unmapped columns leave the status alone.
    ColumnMapping {
        #[serde(default = "crate::seed::column_statuses")]
        statuses: BTreeMap<String, TaskStatus>,
    },
    /// Copy the status of the destination's first task, `todo` when empty.
    /// Kept for parity with boards that relied on it; it ignores which column
    /// the task actually lands in.
    FirstTaskInDestination,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        StatusPolicy::ColumnMapping {
            statuses: crate::seed::column_statuses(),
        }
    }
}

impl StatusPolicy {
    /// Status for a task entering `destination` (checked before insertion).
    /// `None` means keep the current status.
    pub fn status_for(&self, destination: &Column) -> Option<TaskStatus> {
        match self {
            StatusPolicy::ColumnMapping { statuses } => statuses.get(&destination.id).copied(),
            StatusPolicy::FirstTaskInDestination => Some(
                destination
                    .tasks
                    .first()
                    .map(|task| task.status)
                    .unwrap_or(TaskStatus::Todo),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskDraft};
    use chrono::Utc;

    fn column_with(id: &str, statuses: &[TaskStatus]) -> Column {
        let tasks = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let draft = TaskDraft {
                    status: Some(*status),
                    ..Default::default()
                };
                Task::from_draft(format!("{}-t{}", id, i), draft, Utc::now())
            })
            .collect();
        Column::new(id, id).with_tasks(tasks)
    }

    #[test]
    fn test_column_mapping() {
        let policy = StatusPolicy::default();
        assert_eq!(policy.status_for(&column_with("column-3", &[])), Some(TaskStatus::Review));
        assert_eq!(policy.status_for(&column_with("column-99", &[TaskStatus::Done])), None);
    }

    #[test]
    fn test_first_task_in_destination() {
        let policy = StatusPolicy::FirstTaskInDestination;
        assert_eq!(
            policy.status_for(&column_with("x", &[TaskStatus::Review, TaskStatus::Done])),
            Some(TaskStatus::Review)
        );
        assert_eq!(policy.status_for(&column_with("x", &[])), Some(TaskStatus::Todo));
    }

    #[test]
    fn test_policy_deserializes() {
        let policy: StatusPolicy = serde_json::from_str(
            r#"{"kind":"column_mapping","statuses":{"backlog":"todo","qa":"review"}}"#,
        )
        .unwrap();
        assert_eq!(policy.status_for(&Column::new("qa", "QA")), Some(TaskStatus::Review));

        let parity: StatusPolicy = serde_json::from_str(r#"{"kind":"first_task_in_destination"}"#).unwrap();
        assert_eq!(parity, StatusPolicy::FirstTaskInDestination);
    }

    #[test]
    fn test_column_mapping_without_statuses_uses_board_columns() {
        let policy: StatusPolicy = serde_json::from_str(r#"{"kind":"column_mapping"}"#).unwrap();
        assert_eq!(policy, StatusPolicy::default());
        assert_eq!(policy.status_for(&Column::new("column-4", "Done")), Some(TaskStatus::Done));
    }
}
