//! TaskFlow Core
//!
//! Layered like the UI expects it:
//! - domain: entities and their invariants
//! - store: the single board value and every mutation on it
//! - drag: turning a finished drag gesture into a move
//! - display: presentation rules that are worth testing without a browser

pub mod clock;
pub mod config;
pub mod display;
pub mod domain;
pub mod drag;
pub mod ids;
pub mod seed;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use config::{AppConfig, DragConfig, LoggingConfig};
pub use domain::{
    Attachment, Board, Checklist, ChecklistItem, Column, Comment, DomainError, DomainResult,
    Entity, Priority, Reaction, Role, Task, TaskDraft, TaskPatch, TaskStatus, User,
};
pub use drag::MoveRequest;
pub use store::{BoardStore, StatusPolicy, SubscriptionId};
