//! Seed Data
//!
//! The board every session starts from. Dates are relative to `now` so the
//! overdue/upcoming mix looks the same whenever the app is opened.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

use crate::domain::{
    Board, Checklist, ChecklistItem, Column, Comment, Priority, Role, Task, TaskStatus, User,
};

pub const BOARD_ID: &str = "board-1";

const AVATAR_QUERY: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=120&q=80";

fn avatar(photo: &str) -> Option<String> {
    Some(format!("https://images.unsplash.com/{}{}", photo, AVATAR_QUERY))
}

pub fn seed_users() -> Vec<User> {
    let people = [
        ("user-1", "Alex Johnson", "alex@example.com", "photo-1633332755192-727a05c4013d", Role::Admin),
        ("user-2", "Taylor Swift", "taylor@example.com", "photo-1494790108377-be9c29b29330", Role::Member),
        ("user-3", "Marcus Lee", "marcus@example.com", "photo-1535713875002-d1d0cf377fde", Role::Member),
        ("user-4", "Sophia Chen", "sophia@example.com", "photo-1580489944761-15a19d654956", Role::Viewer),
    ];
    people
        .into_iter()
        .map(|(id, name, email, photo, role)| User {
            avatar_url: avatar(photo),
            ..User::new(id, name, email, role)
        })
        .collect()
}

/// Status each seed column stands for
pub fn column_statuses() -> BTreeMap<String, TaskStatus> {
    [
        ("column-1", TaskStatus::Todo),
        ("column-2", TaskStatus::InProgress),
        ("column-3", TaskStatus::Review),
        ("column-4", TaskStatus::Done),
    ]
    .into_iter()
    .map(|(id, status)| (id.to_string(), status))
    .collect()
}

struct SeedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    created_days_ago: i64,
    due_in_days: i64,
    assignee: usize,
    tags: [&'static str; 2],
}

impl SeedTask {
    fn build(self, status: TaskStatus, users: &[User], now: DateTime<Utc>) -> Task {
        Task {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status,
            priority: self.priority,
            created_at: now - Duration::days(self.created_days_ago),
            due_date: Some(now + Duration::days(self.due_in_days)),
            assignee: users.get(self.assignee).cloned(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            attachments: Vec::new(),
            checklists: Vec::new(),
            comments: Vec::new(),
        }
    }
}

fn checklist(id: &str, title: &str, items: &[(&str, &str, bool)]) -> Checklist {
    Checklist {
        id: id.to_string(),
        title: title.to_string(),
        items: items
            .iter()
            .map(|(id, text, completed)| ChecklistItem {
                id: id.to_string(),
                text: text.to_string(),
                completed: *completed,
            })
            .collect(),
    }
}

pub fn seed_board(now: DateTime<Utc>) -> Board {
    let users = seed_users();
    let day = |n: i64| now - Duration::days(n);

    let mut design = SeedTask {
        id: "task-1",
        title: "Design new dashboard layout",
        description: "Create a modern, clean dashboard with clear data visualization.",
        priority: Priority::High,
        created_days_ago: 7,
        due_in_days: 3,
        assignee: 0,
        tags: ["design", "ui/ux"],
    }
    .build(TaskStatus::Todo, &users, now);
    design.checklists.push(checklist(
        "checklist-1",
        "Design Requirements",
        &[
            ("item-1", "Wireframes", true),
            ("item-2", "Color palette", true),
            ("item-3", "Typography", false),
            ("item-4", "Component library", false),
        ],
    ));

    let todo = vec![
        design,
        SeedTask {
            id: "task-2",
            title: "Research competitor features",
            description: "Analyze top 5 competitors and list their unique selling points.",
            priority: Priority::Medium,
            created_days_ago: 3,
            due_in_days: 2,
            assignee: 1,
            tags: ["research", "marketing"],
        }
        .build(TaskStatus::Todo, &users, now),
        SeedTask {
            id: "task-3",
            title: "Set up analytics tracking",
            description: "Implement Google Analytics and set up custom event tracking.",
            priority: Priority::Low,
            created_days_ago: 2,
            due_in_days: 7,
            assignee: 2,
            tags: ["development", "analytics"],
        }
        .build(TaskStatus::Todo, &users, now),
    ];

    let mut auth = SeedTask {
        id: "task-4",
        title: "Develop authentication system",
        description: "Implement secure login, registration, and password reset flows.",
        priority: Priority::High,
        created_days_ago: 10,
        due_in_days: 1,
        assignee: 2,
        tags: ["development", "security"],
    }
    .build(TaskStatus::InProgress, &users, now);
    auth.checklists.push(checklist(
        "checklist-2",
        "Authentication Features",
        &[
            ("item-5", "Login form", true),
            ("item-6", "Registration form", true),
            ("item-7", "Password reset", false),
            ("item-8", "Email verification", false),
            ("item-9", "OAuth integration", false),
        ],
    ));

    let in_progress = vec![
        auth,
        SeedTask {
            id: "task-5",
            title: "Create onboarding flow",
            description: "Design and implement a smooth onboarding experience for new users.",
            priority: Priority::Medium,
            created_days_ago: 5,
            due_in_days: 4,
            assignee: 0,
            tags: ["design", "user experience"],
        }
        .build(TaskStatus::InProgress, &users, now),
    ];

    let mut queries = SeedTask {
        id: "task-6",
        title: "Optimize database queries",
        description: "Review and optimize slow database queries to improve performance.",
        priority: Priority::High,
        created_days_ago: 4,
        due_in_days: 1,
        assignee: 2,
        tags: ["development", "performance"],
    }
    .build(TaskStatus::Review, &users, now);
    queries.comments = vec![
        Comment {
            id: "comment-1".to_string(),
            text: "I've identified the main bottleneck in the user search query.".to_string(),
            created_at: day(1),
            user: users[2].clone(),
            reactions: Vec::new(),
        },
        Comment {
            id: "comment-2".to_string(),
            text: "Great work! Let's add an index to improve that query.".to_string(),
            created_at: now - Duration::hours(12),
            user: users[0].clone(),
            reactions: Vec::new(),
        },
    ];

    let review = vec![
        queries,
        SeedTask {
            id: "task-7",
            title: "Finalize pricing page",
            description: "Complete the pricing page design and implement it.",
            priority: Priority::Medium,
            created_days_ago: 6,
            due_in_days: 2,
            assignee: 1,
            tags: ["design", "pricing"],
        }
        .build(TaskStatus::Review, &users, now),
    ];

    let done = vec![
        SeedTask {
            id: "task-8",
            title: "Set up CI/CD pipeline",
            description: "Configure GitHub Actions for continuous integration and deployment.",
            priority: Priority::High,
            created_days_ago: 15,
            due_in_days: -2,
            assignee: 2,
            tags: ["devops", "automation"],
        },
        SeedTask {
            id: "task-9",
            title: "Create brand guidelines",
            description: "Develop comprehensive brand guidelines for design consistency.",
            priority: Priority::Medium,
            created_days_ago: 12,
            due_in_days: -3,
            assignee: 0,
            tags: ["design", "branding"],
        },
        SeedTask {
            id: "task-10",
            title: "User feedback survey",
            description: "Create and send out a user feedback survey to gather insights.",
            priority: Priority::Low,
            created_days_ago: 20,
            due_in_days: -5,
            assignee: 3,
            tags: ["research", "user feedback"],
        },
    ]
    .into_iter()
    .map(|seed| seed.build(TaskStatus::Done, &users, now))
    .collect();

    Board {
        id: BOARD_ID.to_string(),
        title: "Product Development".to_string(),
        description: "Track all tasks related to our product development cycle".to_string(),
        columns: vec![
            Column::new("column-1", "To Do").with_color("#4A5A99").with_tasks(todo),
            Column::new("column-2", "In Progress")
                .with_color("#FF6F59")
                .with_limit(5)
                .with_tasks(in_progress),
            Column::new("column-3", "Review").with_color("#FFB259").with_tasks(review),
            Column::new("column-4", "Done").with_color("#2DAA91").with_tasks(done),
        ],
        created_at: day(30),
        updated_at: now,
        members: users,
    }
}
