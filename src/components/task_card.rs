//! Task Card Component
//!
//! A draggable card. The card shell handles drag and selection; the body
//! renders one task snapshot and is reused for the floating drag preview.

use chrono::{Local, Utc};
use leptos::prelude::*;
use leptos_dragdrop::*;
use taskflow_core::display::{
    checklist_progress, format_due_date, is_overdue, matches_query, priority_class, priority_label,
    visible_tags,
};
use taskflow_core::Task;

use crate::components::{Avatar, DeleteConfirmButton};
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

/// Draggable card bound to a task id
#[component]
pub fn TaskCard(task_id: String, dnd: DndSignals) -> impl IntoView {
    let state = use_app_store();
    let id = StoredValue::new(task_id.clone());

    let task = Memo::new(move |_| state.board().with(|b| id.with_value(|id| b.task(id).cloned())));

    let on_mousedown = make_on_mousedown(dnd, task_id.clone());
    let on_mousemove = make_on_item_mousemove(dnd, task_id.clone());

    let card_class = move || {
        let mut c = String::from("task-card");
        id.with_value(|id| {
            if is_dragging(&dnd, id) { c.push_str(" dragging"); }
            if is_drop_target(&dnd, &DropTarget::Item(id.clone())) { c.push_str(" drop-target"); }
        });
        let query = state.search_query().get();
        if task.with(|t| t.as_ref().is_some_and(|t| !matches_query(t, &query))) {
            c.push_str(" dimmed");
        }
        c
    };

    let on_click = move |_: web_sys::MouseEvent| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        state.editing_task().set(Some(id.get_value()));
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:click=on_click
        >
            {move || task.get().map(|task| view! { <TaskCardBody task=task /> })}
        </div>
    }
}

/// Card contents for one task value
#[component]
pub fn TaskCardBody(task: Task, #[prop(optional)] preview: bool) -> impl IntoView {
    let ctx = use_board();
    let id = task.id.clone();

    let (tags, more_tags) = visible_tags(&task.tags);
    let tags = tags.to_vec();
    let progress = checklist_progress(&task);
    let due = task.due_date.map(|due| {
        let class = if is_overdue(due, Utc::now()) { "due-date overdue" } else { "due-date" };
        (format_due_date(&due.with_timezone(&Local)), class)
    });
    let attachments = task.attachments.len();
    let comments = task.comments.len();
    let description = (!task.description.is_empty()).then(|| task.description.clone());

    view! {
        <div class="task-card-header">
            <h3 class="task-title">{task.title.clone()}</h3>
            {(!preview).then(|| view! {
                <DeleteConfirmButton
                    button_class="task-delete-btn"
                    on_confirm=move |_: ()| { ctx.delete_task(&id); }
                />
            })}
        </div>

        <div class="task-badges">
            <span class=format!("badge {}", priority_class(task.priority))>
                {priority_label(task.priority)}
            </span>
            {tags.into_iter().map(|tag| view! { <span class="badge tag">{tag}</span> }).collect_view()}
            {more_tags.map(|n| view! { <span class="badge tag">{format!("+{}", n)}</span> })}
        </div>

        {description.map(|d| view! { <p class="task-description">{d}</p> })}

        {progress.map(|p| view! {
            <div class="checklist-progress">
                <span class="checklist-label">{format!("✓ {}/{} completed", p.completed, p.total)}</span>
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {}%;", p.percentage)></div>
                </div>
            </div>
        })}

        <div class="task-card-footer">
            <div class="task-meta">
                {due.map(|(text, class)| view! { <span class=class>"📅 " {text}</span> })}
                {(attachments > 0).then(|| view! { <span class="meta-count">"📎 " {attachments}</span> })}
                {(comments > 0).then(|| view! { <span class="meta-count">"💬 " {comments}</span> })}
            </div>
            {task.assignee.clone().map(|user| view! { <Avatar user=user class="avatar-sm" /> })}
        </div>
    }
}
