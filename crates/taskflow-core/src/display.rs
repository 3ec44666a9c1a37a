//! Display Policy
//!
//! Presentation rules the components apply to cards and columns.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Column, Priority, Task};

/// Tags shown on a card before the "+N" badge
pub const MAX_VISIBLE_TAGS: usize = 2;
/// Member avatars shown in the sidebar before the "+N" bubble
pub const MAX_VISIBLE_MEMBERS: usize = 4;

/// "urgent" -> "Urgent"
pub fn priority_label(priority: Priority) -> String {
    let raw = priority.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "priority-urgent",
        Priority::High => "priority-high",
        Priority::Medium => "priority-medium",
        Priority::Low => "priority-low",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    /// Rounded, 0 when there are no items
    pub percentage: u32,
}

/// Completion across all of a task's checklists; `None` without checklists
pub fn checklist_progress(task: &Task) -> Option<ChecklistProgress> {
    if task.checklists.is_empty() {
        return None;
    }
    let items = task.checklists.iter().flat_map(|list| list.items.iter());
    let (completed, total) = items.fold((0, 0), |(done, total), item| {
        (done + usize::from(item.completed), total + 1)
    });
    Some(ChecklistProgress {
        completed,
        total,
        percentage: percent(completed, total).unwrap_or(0),
    })
}

/// First `max` entries plus how many were left out
pub fn overflow<T>(items: &[T], max: usize) -> (&[T], Option<usize>) {
    if items.len() > max {
        (&items[..max], Some(items.len() - max))
    } else {
        (items, None)
    }
}

pub fn visible_tags(tags: &[String]) -> (&[String], Option<usize>) {
    overflow(tags, MAX_VISIBLE_TAGS)
}

pub fn is_overdue(due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due < now
}

/// Short due date, e.g. "May 4"
pub fn format_due_date<Tz: TimeZone>(due: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    due.format("%b %-d").to_string()
}

/// "Alex Johnson" -> "AJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

fn percent(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some((part as f64 / whole as f64 * 100.0).round() as u32)
}

/// How full a column is relative to its WIP limit
pub fn capacity_percent(column: &Column) -> Option<u32> {
    column.limit.and_then(|limit| percent(column.tasks.len(), limit))
}

/// "3" or "3/5" when the column has a limit
pub fn count_badge(column: &Column) -> String {
    match column.limit {
        Some(limit) => format!("{}/{}", column.tasks.len(), limit),
        None => column.tasks.len().to_string(),
    }
}

/// Case-insensitive search over title, description and tags
pub fn matches_query(task: &Task, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(&query)
        || task.description.to_lowercase().contains(&query)
        || task.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Checklist, ChecklistItem, TaskDraft};
    use chrono::{Duration, FixedOffset};

    fn task() -> Task {
        let draft = TaskDraft {
            description: Some("Wire up OAuth".to_string()),
            tags: Some(vec!["Security".to_string(), "backend".to_string(), "q3".to_string()]),
            ..TaskDraft::titled("Login flow")
        };
        Task::from_draft("task-1".to_string(), draft, Utc::now())
    }

    fn items(states: &[bool]) -> Checklist {
        Checklist {
            id: "cl".to_string(),
            title: "Steps".to_string(),
            items: states
                .iter()
                .enumerate()
                .map(|(i, done)| ChecklistItem {
                    id: format!("i{}", i),
                    text: format!("step {}", i),
                    completed: *done,
                })
                .collect(),
        }
    }

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(Priority::Urgent), "Urgent");
        assert_eq!(priority_label(Priority::Low), "Low");
    }

    #[test]
    fn test_checklist_progress() {
        let mut t = task();
        assert_eq!(checklist_progress(&t), None);

        t.checklists = vec![items(&[true, true, false]), items(&[false, false, false])];
        assert_eq!(
            checklist_progress(&t),
            Some(ChecklistProgress { completed: 2, total: 6, percentage: 33 })
        );

        t.checklists = vec![items(&[])];
        assert_eq!(
            checklist_progress(&t),
            Some(ChecklistProgress { completed: 0, total: 0, percentage: 0 })
        );
    }

    #[test]
    fn test_tag_overflow() {
        let t = task();
        let (shown, more) = visible_tags(&t.tags);
        assert_eq!(shown, &["Security".to_string(), "backend".to_string()]);
        assert_eq!(more, Some(1));

        let (shown, more) = visible_tags(&t.tags[..2]);
        assert_eq!(shown.len(), 2);
        assert_eq!(more, None);
    }

    #[test]
    fn test_due_dates() {
        let now = Utc::now();
        assert!(is_overdue(now - Duration::hours(1), now));
        assert!(!is_overdue(now + Duration::hours(1), now));

        let due = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
        assert_eq!(format_due_date(&due), "May 4");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Johnson"), "AJ");
        assert_eq!(initials("  Marcus   Lee "), "ML");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_column_capacity() {
        let mut column = Column::new("c", "Doing");
        column.tasks = vec![task(), task(), task()];
        assert_eq!(capacity_percent(&column), None);
        assert_eq!(count_badge(&column), "3");

        column.limit = Some(5);
        assert_eq!(capacity_percent(&column), Some(60));
        assert_eq!(count_badge(&column), "3/5");

        column.limit = Some(0);
        assert_eq!(capacity_percent(&column), None);
        assert!(column.is_at_capacity());
    }

    #[test]
    fn test_matches_query() {
        let t = task();
        assert!(matches_query(&t, ""));
        assert!(matches_query(&t, "LOGIN"));
        assert!(matches_query(&t, "oauth"));
        assert!(matches_query(&t, "security"));
        assert!(!matches_query(&t, "pricing"));
    }
}
