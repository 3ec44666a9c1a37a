//! Id Generation
//!
//! Monotonic `prefix-N` ids. A counter per prefix starts past the highest
//! suffix already on the board, and ids that are somehow taken are skipped.

use std::collections::HashMap;

use crate::domain::Board;

pub const COLUMN_PREFIX: &str = "column";
pub const TASK_PREFIX: &str = "task";

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    counters: HashMap<String, u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counters after every `column-N` / `task-N` id already in `board`
    pub fn seeded_from(board: &Board) -> Self {
        let mut ids = Self::new();
        for column in &board.columns {
            ids.observe(&column.id);
            for task in &column.tasks {
                ids.observe(&task.id);
            }
        }
        ids
    }

    /// Record an existing id so it is never produced again
    pub fn observe(&mut self, id: &str) {
        let Some((prefix, suffix)) = id.rsplit_once('-') else {
            return;
        };
        let Ok(n) = suffix.parse::<u64>() else {
            return;
        };
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        if n > *counter {
            *counter = n;
        }
    }

    /// Next id for `prefix` for which `taken` is false
    pub fn next(&mut self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let id = format!("{}-{}", prefix, counter);
            if !taken(&id) {
                return id;
            }
        }
    }
}
