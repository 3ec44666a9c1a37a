//! Drag Resolution
//!
//! Turns a finished drag (dragged id + whatever it was dropped on) into a
//! single move for the store. Gesture capture lives in the UI; this part
//! only looks at the board.

use crate::domain::{Board, Task};
use crate::store::BoardStore;

/// Arguments for [`BoardStore::move_task`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: String,
    pub source_column_id: String,
    pub destination_column_id: String,
    pub new_index: Option<usize>,
}

/// Task shown in the floating preview while dragging
pub fn find_task<'a>(board: &'a Board, dragged_id: &str) -> Option<&'a Task> {
    board.task(dragged_id)
}

/// Work out where a dropped task should go.
///
/// Dropping on a task targets that task's column at that task's position;
/// dropping on a column appends to it. Anything else, including dropping a
/// task onto itself, resolves to nothing.
pub fn resolve_drop(board: &Board, dragged_id: &str, dropped_on: Option<&str>) -> Option<MoveRequest> {
    let target = dropped_on?;
    if target == dragged_id {
        return None;
    }

    let source = board.column_of_task(dragged_id)?;

    let (destination, new_index) = match board.locate_task(target) {
        Some((ci, ti)) => (&board.columns[ci], Some(ti)),
        None => (board.column(target)?, None),
    };

    Some(MoveRequest {
        task_id: dragged_id.to_string(),
        source_column_id: source.id.clone(),
        destination_column_id: destination.id.clone(),
        new_index,
    })
}

impl BoardStore {
    pub fn apply_move(&mut self, request: &MoveRequest) -> bool {
        self.move_task(
            &request.task_id,
            &request.source_column_id,
            &request.destination_column_id,
            request.new_index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_board;
    use crate::store::StatusPolicy;
    use chrono::Utc;

    #[test]
    fn test_find_task() {
        let board = seed_board(Utc::now());
        assert_eq!(find_task(&board, "task-5").map(|t| t.title.as_str()), Some("Create onboarding flow"));
        assert!(find_task(&board, "column-1").is_none());
    }

    #[test]
    fn test_drop_on_task_uses_its_position() {
        let board = seed_board(Utc::now());
        let request = resolve_drop(&board, "task-1", Some("task-7")).unwrap();
        assert_eq!(
            request,
            MoveRequest {
                task_id: "task-1".to_string(),
                source_column_id: "column-1".to_string(),
                destination_column_id: "column-3".to_string(),
                new_index: Some(1),
            }
        );
    }

    #[test]
    fn test_drop_on_column_appends() {
        let board = seed_board(Utc::now());
        let request = resolve_drop(&board, "task-1", Some("column-4")).unwrap();
        assert_eq!(request.destination_column_id, "column-4");
        assert_eq!(request.new_index, None);
    }

    #[test]
    fn test_invalid_drops() {
        let board = seed_board(Utc::now());
        assert!(resolve_drop(&board, "task-1", None).is_none());
        assert!(resolve_drop(&board, "task-1", Some("task-1")).is_none());
        assert!(resolve_drop(&board, "task-404", Some("column-2")).is_none());
        assert!(resolve_drop(&board, "task-1", Some("nowhere")).is_none());
    }

    #[test]
    fn test_resolved_move_applies() {
        let board = seed_board(Utc::now());
        let request = resolve_drop(&board, "task-3", Some("task-1")).unwrap();
        let mut store = BoardStore::with_system_clock(board, StatusPolicy::default());
        assert!(store.apply_move(&request));
        let ids: Vec<_> = store.board().columns[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["task-3", "task-1", "task-2"]);
    }
}
