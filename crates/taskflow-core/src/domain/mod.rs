//! Domain Layer
//!
//! Board entities and the rules that hold across them.
//! No UI or browser dependencies live here.

mod board;
mod column;
mod entity;
mod task;
mod user;

pub use board::Board;
pub use column::Column;
pub use entity::{find_by_id, position_of, DomainError, DomainResult, Entity};
pub use task::{
    Attachment, Checklist, ChecklistItem, Comment, Priority, Reaction, Task, TaskDraft, TaskPatch,
    TaskStatus,
};
pub use user::{Role, User};
