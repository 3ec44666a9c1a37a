//! Board Store Tests
//!
//! Operation sequences against the seed board with a manual clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{BoardStore, StatusPolicy};
use crate::clock::ManualClock;
use crate::domain::{Board, Priority, TaskDraft, TaskPatch, TaskStatus};
use crate::seed::seed_board;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn setup_store(policy: StatusPolicy) -> (BoardStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start()));
    let store = BoardStore::new(seed_board(start()), policy, Arc::clone(&clock));
    (store, clock)
}

fn setup() -> (BoardStore, Arc<ManualClock>) {
    setup_store(StatusPolicy::default())
}

fn task_ids(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(column_id)
        .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
        .unwrap_or_default()
}

fn assert_unique_tasks(board: &Board) {
    let mut seen = HashSet::new();
    for column in &board.columns {
        for task in &column.tasks {
            assert!(seen.insert(task.id.clone()), "task {} appears twice", task.id);
        }
    }
}

#[test]
fn test_add_column() {
    let (mut store, _) = setup();
    let before = store.board().columns.len();

    let id = store.add_column("Backlog").expect("column added");

    let board = store.board();
    assert_eq!(board.columns.len(), before + 1);
    let column = board.columns.last().unwrap();
    assert_eq!(column.id, id);
    assert_eq!(column.title, "Backlog");
    assert!(column.tasks.is_empty());
    assert!(!column.collapsed);
    assert_eq!(column.limit, None);
}

#[test]
fn test_add_column_blank_title_is_noop() {
    let (mut store, _) = setup();
    let before = store.snapshot();

    assert_eq!(store.add_column(""), None);
    assert_eq!(store.add_column("   \t"), None);

    assert_eq!(store.board(), &*before);
    assert_eq!(store.version(), 0);
}

#[test]
fn test_add_column_ids_are_unique() {
    let (mut store, _) = setup();
    let a = store.add_column("A").unwrap();
    let b = store.add_column("B").unwrap();
    assert_ne!(a, b);
    assert!(!["column-1", "column-2", "column-3", "column-4"].contains(&a.as_str()));
}

#[test]
fn test_update_column() {
    let (mut store, _) = setup();
    assert!(store.update_column("column-3", "QA"));
    assert_eq!(store.board().column("column-3").unwrap().title, "QA");

    assert!(!store.update_column("column-42", "Nope"));
    assert!(!store.update_column("column-3", "  "));
    assert_eq!(store.board().column("column-3").unwrap().title, "QA");
}

#[test]
fn test_delete_column_is_idempotent() {
    let (mut store, _) = setup();
    let total = store.board().task_count();
    let in_review = task_ids(store.board(), "column-3").len();

    assert!(store.delete_column("column-3"));
    assert!(store.board().column("column-3").is_none());
    assert_eq!(store.board().task_count(), total - in_review);

    let after_first = store.snapshot();
    assert!(!store.delete_column("column-3"));
    assert_eq!(store.board(), &*after_first);
}

#[test]
fn test_toggle_collapse_does_not_touch_updated_at() {
    let (mut store, clock) = setup();
    let updated_at = store.board().updated_at;
    clock.advance(Duration::minutes(1));

    assert!(store.toggle_collapse_column("column-1"));
    assert!(store.board().column("column-1").unwrap().collapsed);
    assert_eq!(store.board().updated_at, updated_at);

    assert!(store.toggle_collapse_column("column-1"));
    assert!(!store.board().column("column-1").unwrap().collapsed);
}

#[test]
fn test_add_task_defaults() {
    let (mut store, clock) = setup();
    clock.advance(Duration::seconds(30));
    let before = task_ids(store.board(), "column-1").len();

    let id = store.add_task("column-1", TaskDraft::titled("T")).expect("task added");

    let column = store.board().column("column-1").unwrap();
    assert_eq!(column.tasks.len(), before + 1);
    let task = column.tasks.last().unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.title, "T");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert!(task.tags.is_empty());
    assert_eq!(task.created_at, start() + Duration::seconds(30));
}

#[test]
fn test_add_task_unknown_column_is_noop() {
    let (mut store, _) = setup();
    let before = store.snapshot();
    assert_eq!(store.add_task("column-404", TaskDraft::titled("T")), None);
    assert_eq!(store.board(), &*before);
}

#[test]
fn test_update_task_merges_given_fields() {
    let (mut store, _) = setup();
    let original = store.board().task("task-2").unwrap().clone();

    assert!(store.update_task(
        "task-2",
        TaskPatch {
            priority: Some(Priority::Urgent),
            ..Default::default()
        }
    ));

    let updated = store.board().task("task-2").unwrap();
    assert_eq!(updated.priority, Priority::Urgent);
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.tags, original.tags);
    assert_eq!(updated.assignee, original.assignee);
}

#[test]
fn test_update_task_unknown_id_is_noop() {
    let (mut store, _) = setup();
    let before = store.snapshot();
    assert!(!store.update_task("task-999", TaskPatch { title: Some("x".into()), ..Default::default() }));
    assert_eq!(store.board(), &*before);
}

#[test]
fn test_update_task_title_is_trimmed_and_blank_rejected() {
    let (mut store, _) = setup();
    let version = store.version();

    assert!(!store.update_task("task-2", TaskPatch { title: Some("   ".into()), ..Default::default() }));
    assert_eq!(store.version(), version);

    assert!(store.update_task("task-2", TaskPatch { title: Some("  Ship it  ".into()), ..Default::default() }));
    assert_eq!(store.board().task("task-2").unwrap().title, "Ship it");
}

#[test]
fn test_delete_task() {
    let (mut store, _) = setup();
    assert!(store.delete_task("task-6"));
    assert!(store.board().task("task-6").is_none());
    assert!(!store.delete_task("task-6"));
}

#[test]
fn test_move_task_across_columns_to_front() {
    let (mut store, _) = setup();
    let combined = task_ids(store.board(), "column-1").len() + task_ids(store.board(), "column-3").len();

    assert!(store.move_task("task-2", "column-1", "column-3", Some(0)));

    let board = store.board();
    assert!(!task_ids(board, "column-1").contains(&"task-2".to_string()));
    assert_eq!(task_ids(board, "column-3")[0], "task-2");
    assert_eq!(task_ids(board, "column-1").len() + task_ids(board, "column-3").len(), combined);
    assert_eq!(board.task("task-2").unwrap().status, TaskStatus::Review);
    assert_unique_tasks(board);
}

#[test]
fn test_move_task_out_of_range_index_appends() {
    let (mut store, _) = setup();
    assert!(store.move_task("task-1", "column-1", "column-4", Some(99)));
    assert_eq!(task_ids(store.board(), "column-4").last().unwrap(), "task-1");

    assert!(store.move_task("task-3", "column-1", "column-4", None));
    assert_eq!(task_ids(store.board(), "column-4").last().unwrap(), "task-3");
}

#[test]
fn test_move_task_wrong_source_is_noop() {
    let (mut store, _) = setup();
    let before = store.snapshot();

    assert!(!store.move_task("task-1", "column-2", "column-3", Some(0)));
    assert!(!store.move_task("task-1", "column-9", "column-3", None));
    assert!(!store.move_task("task-1", "column-1", "column-9", None));

    assert_eq!(store.board(), &*before);
}

#[test]
fn test_reorder_within_column() {
    let (mut store, _) = setup();
    // [task-1, task-2, task-3]: drop task-1 onto task-3
    assert!(store.move_task("task-1", "column-1", "column-1", Some(2)));
    assert_eq!(task_ids(store.board(), "column-1"), vec!["task-2", "task-3", "task-1"]);

    // and back to the front
    assert!(store.move_task("task-1", "column-1", "column-1", Some(0)));
    assert_eq!(task_ids(store.board(), "column-1"), vec!["task-1", "task-2", "task-3"]);
}

#[test]
fn test_reorder_keeps_status() {
    let (mut store, _) = setup_store(StatusPolicy::FirstTaskInDestination);
    store.update_task("task-3", TaskPatch { status: Some(TaskStatus::Done), ..Default::default() });

    assert!(store.move_task("task-3", "column-1", "column-1", Some(0)));
    assert_eq!(store.board().task("task-3").unwrap().status, TaskStatus::Done);
}

#[test]
fn test_first_task_policy_copies_destination_head() {
    let (mut store, _) = setup_store(StatusPolicy::FirstTaskInDestination);
    store.update_task("task-6", TaskPatch { status: Some(TaskStatus::Done), ..Default::default() });

    assert!(store.move_task("task-1", "column-1", "column-3", None));
    assert_eq!(store.board().task("task-1").unwrap().status, TaskStatus::Done);

    let empty = store.add_column("Empty").unwrap();
    assert!(store.move_task("task-1", "column-3", &empty, None));
    assert_eq!(store.board().task("task-1").unwrap().status, TaskStatus::Todo);
}

#[test]
fn test_mapping_policy_keeps_status_in_unmapped_column() {
    let (mut store, _) = setup();
    let extra = store.add_column("Parking lot").unwrap();
    assert!(store.move_task("task-6", "column-3", &extra, None));
    assert_eq!(store.board().task("task-6").unwrap().status, TaskStatus::Review);
}

#[test]
fn test_updated_at_never_decreases() {
    let (mut store, clock) = setup();
    let mut last = store.board().updated_at;

    let check = |store: &BoardStore, last: &mut DateTime<Utc>| {
        assert!(store.board().updated_at >= *last);
        *last = store.board().updated_at;
    };

    clock.advance(Duration::seconds(1));
    let col = store.add_column("X").unwrap();
    check(&store, &mut last);
    assert_eq!(last, start() + Duration::seconds(1));

    clock.advance(Duration::seconds(1));
    let task = store.add_task(&col, TaskDraft::titled("T")).unwrap();
    check(&store, &mut last);

    // a clock that jumps back must not rewind the board
    clock.set(start() - Duration::days(1));
    store.update_task(&task, TaskPatch { title: Some("U".into()), ..Default::default() });
    check(&store, &mut last);
    assert_eq!(last, start() + Duration::seconds(2));

    clock.set(start() + Duration::seconds(10));
    store.move_task(&task, &col, "column-1", Some(0));
    check(&store, &mut last);
    store.update_column(&col, "Y");
    check(&store, &mut last);
    store.delete_task(&task);
    check(&store, &mut last);
    store.delete_column(&col);
    check(&store, &mut last);
}

#[test]
fn test_uniqueness_survives_operation_sequence() {
    let (mut store, _) = setup();
    let extra = store.add_column("Extra").unwrap();
    let t = store.add_task(&extra, TaskDraft::titled("one")).unwrap();
    store.add_task("column-2", TaskDraft::titled("two"));
    store.move_task(&t, &extra, "column-2", Some(1));
    store.move_task("task-4", "column-2", "column-2", Some(5));
    store.move_task("task-5", "column-2", &extra, Some(0));
    store.delete_task("task-1");
    store.move_task("task-2", "column-1", "column-4", Some(2));
    store.delete_column("column-3");
    store.add_task("column-1", TaskDraft::default());

    assert_unique_tasks(store.board());
    assert!(store.board().validate().is_ok());
}

#[test]
fn test_subscribers_receive_each_new_value() {
    let (mut store, _) = setup();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |board| {
        sink.lock().unwrap().push(board.columns.len());
    });

    store.add_column("A");
    store.add_column("");
    store.toggle_collapse_column("column-1");
    store.delete_column("column-404");

    assert_eq!(*seen.lock().unwrap(), vec![5, 5]);
    assert_eq!(store.version(), 2);

    assert!(store.unsubscribe(sub));
    store.add_column("B");
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert!(!store.unsubscribe(sub));
}

#[test]
fn test_snapshots_are_copy_on_write() {
    let (mut store, _) = setup();
    let old = store.snapshot();
    store.delete_task("task-1");
    assert!(old.task("task-1").is_some());
    assert!(store.board().task("task-1").is_none());
}
