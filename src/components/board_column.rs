//! Board Column Component
//!
//! Header (color, count, collapse, actions), task list and inline forms.
//! The whole column is a drop container; cards inside are drop items.

use leptos::prelude::*;
use leptos_dragdrop::*;
use taskflow_core::display::{capacity_percent, count_badge};
use taskflow_core::TaskDraft;

use crate::components::{DeleteConfirmButton, InlineTitleForm, TaskCard};
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

const DEFAULT_COLUMN_COLOR: &str = "var(--primary)";

/// Click count from `UIEvent.detail`; later clicks of a double-click are not toggles
fn is_single_click(detail: i32) -> bool {
    detail <= 1
}

#[component]
pub fn BoardColumn(column_id: String, dnd: DndSignals) -> impl IntoView {
    let ctx = use_board();
    let state = use_app_store();
    let id = StoredValue::new(column_id.clone());

    let column = Memo::new(move |_| state.board().with(|b| id.with_value(|id| b.column(id).cloned())));
    let task_ids = Memo::new(move |_| {
        column.with(|c| {
            c.as_ref()
                .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let title = move || column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let color = move || {
        column.with(|c| {
            c.as_ref()
                .and_then(|c| c.color.clone())
                .unwrap_or_else(|| DEFAULT_COLUMN_COLOR.to_string())
        })
    };
    let collapsed = move || column.with(|c| c.as_ref().is_some_and(|c| c.collapsed));
    let at_capacity = move || column.with(|c| c.as_ref().is_some_and(|c| c.is_at_capacity()));
    let badge = move || column.with(|c| c.as_ref().map(count_badge).unwrap_or_default());

    let (adding_task, set_adding_task) = signal(false);
    let (renaming, set_renaming) = signal(false);

    let on_container_move = make_on_container_mousemove(dnd, column_id);
    let on_leave = make_on_mouseleave(dnd);

    let column_class = move || {
        let mut c = String::from("board-column");
        if collapsed() { c.push_str(" collapsed"); }
        let target = id.with_value(|id| DropTarget::Container(id.clone()));
        if is_drop_target(&dnd, &target) { c.push_str(" drop-target"); }
        c
    };

    let add_task = move |title: String| {
        id.with_value(|id| ctx.add_task(id, TaskDraft::titled(title)));
        set_adding_task.set(false);
    };

    let rename = move |title: String| {
        id.with_value(|id| ctx.update_column(id, &title));
        set_renaming.set(false);
    };

    let header = move || {
        if renaming.get() {
            view! {
                <InlineTitleForm
                    placeholder="Column title..."
                    submit_label="Save"
                    initial=title()
                    on_submit=rename
                    on_cancel=move |_: ()| set_renaming.set(false)
                />
            }
            .into_any()
        } else {
            view! {
                <div
                    class="column-header-toggle"
                    on:click=move |ev: web_sys::MouseEvent| {
                        if is_single_click(ev.detail()) {
                            id.with_value(|id| ctx.toggle_collapse_column(id));
                        }
                    }
                >
                    <span class="column-color-dot" style=move || format!("background-color: {};", color())></span>
                    <h3
                        class="column-title"
                        title="Double-click to rename"
                        on:dblclick=move |ev| {
                            ev.stop_propagation();
                            set_renaming.set(true);
                        }
                    >
                        {title}
                    </h3>
                    <span class="count-badge">{badge}</span>
                    <span class="collapse-icon">{move || if collapsed() { "▼" } else { "▲" }}</span>
                </div>
                <div class="column-actions">
                    <button
                        class="icon-btn"
                        title="Add task"
                        disabled=at_capacity
                        on:click=move |_| set_adding_task.set(true)
                    >
                        "+"
                    </button>
                    <button class="icon-btn" title="Rename column" on:click=move |_| set_renaming.set(true)>
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon-btn column-delete-btn"
                        on_confirm=move |_: ()| { id.with_value(|id| ctx.delete_column(id)); }
                    />
                </div>
            }
            .into_any()
        }
    };

    let collapsed_footer = move || {
        let count = task_ids.with(|ids| ids.len());
        let percent = column.with(|c| c.as_ref().and_then(capacity_percent));
        view! {
            <div class="column-footer">
                <span>{format!("{} tasks", count)}</span>
                {percent.map(|p| view! { <span>{format!("{}% full", p)}</span> })}
            </div>
        }
    };

    view! {
        <div class=column_class on:mousemove=on_container_move on:mouseleave=on_leave>
            <div class="column-header">{header}</div>

            <Show when=move || !collapsed() fallback=collapsed_footer>
                <div class="column-body">
                    <Show when=move || adding_task.get()>
                        <InlineTitleForm
                            placeholder="Enter task title..."
                            submit_label="Add"
                            on_submit=add_task
                            on_cancel=move |_: ()| set_adding_task.set(false)
                        />
                    </Show>

                    <For
                        each=move || task_ids.get()
                        key=|task_id| task_id.clone()
                        children=move |task_id| view! { <TaskCard task_id=task_id dnd=dnd /> }
                    />

                    <Show when=move || task_ids.with(|ids| ids.is_empty()) && !adding_task.get()>
                        <div class="column-empty">
                            <p>"No tasks yet"</p>
                            <button
                                class="ghost-btn"
                                disabled=at_capacity
                                on:click=move |_| set_adding_task.set(true)
                            >
                                "+ Add Task"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_does_not_toggle() {
        assert!(is_single_click(1));
        assert!(is_single_click(0), "synthetic clicks report 0");
        assert!(!is_single_click(2));
        assert!(!is_single_click(3));
    }
}
