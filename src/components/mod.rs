//! UI Components
//!
//! Reusable Leptos components.

mod avatar;
mod board_column;
mod delete_confirm_button;
mod draggable_board;
mod header;
mod inline_title_form;
mod sidebar;
mod task_card;
mod task_editor;

pub use avatar::Avatar;
pub use board_column::BoardColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use draggable_board::DraggableBoard;
pub use header::Header;
pub use inline_title_form::InlineTitleForm;
pub use sidebar::Sidebar;
pub use task_card::{TaskCard, TaskCardBody};
pub use task_editor::TaskEditor;
