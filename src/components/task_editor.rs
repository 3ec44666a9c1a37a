//! Task Editor Panel
//!
//! Side panel for the task picked on the board. Fields are edited locally
//! and written back as one patch on save.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use leptos::prelude::*;
use taskflow_core::{Priority, Task, TaskPatch, TaskStatus, User};

use crate::components::DeleteConfirmButton;
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Local calendar date shown in the date input, matching the card
fn due_date_input(due: Option<DateTime<Utc>>) -> String {
    due.map(|d| d.with_timezone(&Local).format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse an `<input type="date">` value as local midnight; empty clears the date
fn parse_due_date(value: &str) -> Result<Option<DateTime<Utc>>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT)
        .map_err(|e| format!("invalid due date '{}': {}", value, e))?;
    date.and_hms_opt(0, 0, 0)
        .and_then(|dt| Local.from_local_datetime(&dt).earliest())
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .ok_or_else(|| format!("invalid due date '{}'", value))
}

/// Due date field of the patch: `None` while the input still holds what was loaded
fn due_date_change(loaded: &str, current: &str) -> Result<Option<Option<DateTime<Utc>>>, String> {
    if loaded.trim() == current.trim() {
        return Ok(None);
    }
    parse_due_date(current).map(Some)
}

fn find_member(members: &[User], id: &str) -> Option<User> {
    members.iter().find(|u| u.id == id).cloned()
}

#[component]
pub fn TaskEditor() -> impl IntoView {
    let ctx = use_board();
    let state = use_app_store();

    let task = Memo::new(move |_| {
        let id = state.editing_task().get()?;
        state.board().with(|b| b.task(&id).cloned())
    });
    let members = Memo::new(move |_| state.board().with(|b| b.members.clone()));

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (status, set_status) = signal(TaskStatus::default());
    let (due_date, set_due_date) = signal(String::new());
    let (loaded_due_date, set_loaded_due_date) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    // Reset the form only when a different task is opened
    Effect::new(move |_| {
        let Some(id) = state.editing_task().get() else {
            return;
        };
        let Some(t) = state.board().with_untracked(|b| b.task(&id).cloned()) else {
            log::warn!("[EDITOR] Task {} not on board", id);
            return;
        };
        load_form(&t, set_title, set_description, set_priority, set_status, set_due_date, set_assignee);
        set_loaded_due_date.set(due_date_input(t.due_date));
        set_error.set(None);
    });

    let close = move || state.editing_task().set(None);

    let save = move || {
        let Some(current) = task.get_untracked() else {
            return;
        };
        let new_title = title.get_untracked().trim().to_string();
        if new_title.is_empty() {
            set_error.set(Some("Title cannot be empty".to_string()));
            return;
        }
        let loaded = loaded_due_date.get_untracked();
        let due = match due_date.with_untracked(|current| due_date_change(&loaded, current)) {
            Ok(due) => due,
            Err(e) => {
                log::warn!("[EDITOR] {}", e);
                set_error.set(Some(e));
                return;
            }
        };
        let assignee = assignee.with_untracked(|id| members.with_untracked(|m| find_member(m, id)));

        let patch = TaskPatch {
            title: Some(new_title),
            description: Some(description.get_untracked()),
            priority: Some(priority.get_untracked()),
            status: Some(status.get_untracked()),
            due_date: due,
            assignee: Some(assignee),
            ..Default::default()
        };
        if ctx.update_task(&current.id, patch) {
            set_error.set(None);
            close();
        }
    };

    let on_priority = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Priority>() {
        Ok(p) => set_priority.set(p),
        Err(e) => log::warn!("[EDITOR] {}", e),
    };
    let on_status = move |ev: web_sys::Event| match event_target_value(&ev).parse::<TaskStatus>() {
        Ok(s) => set_status.set(s),
        Err(e) => log::warn!("[EDITOR] {}", e),
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    };

    view! {
        <Show when=move || task.with(|t| t.is_some())>
            <aside class="task-editor" on:keydown=on_keydown>
                <div class="task-editor-header">
                    <h2>"Edit Task"</h2>
                    <button class="icon-btn" title="Close" on:click=move |_| close()>"×"</button>
                </div>

                <label class="field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                save();
                            }
                        }
                    />
                </label>

                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="field-row">
                    <label class="field">
                        <span>"Priority"</span>
                        <select on:change=on_priority prop:value=move || priority.get().as_str()>
                            {Priority::ALL
                                .iter()
                                .map(|p| view! { <option value=p.as_str()>{p.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="field">
                        <span>"Status"</span>
                        <select on:change=on_status prop:value=move || status.get().as_str()>
                            {TaskStatus::ALL
                                .iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                <div class="field-row">
                    <label class="field">
                        <span>"Due date"</span>
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Assignee"</span>
                        <select
                            on:change=move |ev| set_assignee.set(event_target_value(&ev))
                            prop:value=move || assignee.get()
                        >
                            <option value="">"Unassigned"</option>
                            {move || members
                                .get()
                                .into_iter()
                                .map(|u| view! { <option value=u.id.clone()>{u.name.clone()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>

                {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}

                <div class="task-editor-actions">
                    <DeleteConfirmButton
                        button_class="danger-btn"
                        on_confirm=move |_: ()| {
                            if let Some(t) = task.get_untracked() {
                                ctx.delete_task(&t.id);
                            }
                            close();
                        }
                    />
                    <button class="ghost-btn" on:click=move |_| close()>"Cancel"</button>
                    <button class="primary-btn" on:click=move |_| save()>"Save"</button>
                </div>
            </aside>
        </Show>
    }
}

fn load_form(
    task: &Task,
    set_title: WriteSignal<String>,
    set_description: WriteSignal<String>,
    set_priority: WriteSignal<Priority>,
    set_status: WriteSignal<TaskStatus>,
    set_due_date: WriteSignal<String>,
    set_assignee: WriteSignal<String>,
) {
    set_title.set(task.title.clone());
    set_description.set(task.description.clone());
    set_priority.set(task.priority);
    set_status.set(task.status);
    set_due_date.set(due_date_input(task.due_date));
    set_assignee.set(task.assignee.as_ref().map(|u| u.id.clone()).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use taskflow_core::display::is_overdue;
    use taskflow_core::{Role, TaskDraft};

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(parse_due_date("   ").unwrap(), None);

        let due = parse_due_date("2024-03-15").unwrap().unwrap().with_timezone(&Local);
        assert_eq!((due.year(), due.month(), due.day()), (2024, 3, 15));
        assert_eq!(due.hour(), 0);

        assert!(parse_due_date("15/03/2024").is_err());
        assert!(parse_due_date("2024-02-30").is_err());
    }

    #[test]
    fn test_untouched_due_date_survives_save() {
        let due = Utc.with_ymd_and_hms(2024, 5, 4, 15, 30, 0).unwrap();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut task = Task::from_draft(
            "task-1".to_string(),
            TaskDraft { due_date: Some(due), ..TaskDraft::titled("Write release notes") },
            created,
        );
        let now = Utc.with_ymd_and_hms(2024, 5, 4, 10, 0, 0).unwrap();
        assert!(!is_overdue(due, now));

        let loaded = due_date_input(task.due_date);
        let change = due_date_change(&loaded, &loaded).unwrap();
        assert_eq!(change, None);

        task.apply(TaskPatch { title: Some("Renamed".to_string()), due_date: change, ..Default::default() });
        assert_eq!(task.due_date, Some(due));
        assert!(task.due_date.is_some_and(|d| !is_overdue(d, now)));
    }

    #[test]
    fn test_due_date_input_uses_local_calendar_date() {
        let due = Utc.with_ymd_and_hms(2024, 5, 4, 23, 30, 0).unwrap();
        let text = due_date_input(Some(due));
        assert_eq!(text, due.with_timezone(&Local).format(DATE_INPUT_FORMAT).to_string());

        let parsed = parse_due_date(&text).unwrap().unwrap().with_timezone(&Local);
        assert_eq!(parsed.date_naive(), due.with_timezone(&Local).date_naive());
        assert_eq!(due_date_input(None), "");
    }

    #[test]
    fn test_due_date_change_when_edited() {
        assert_eq!(due_date_change("2024-05-04", "").unwrap(), Some(None));
        let changed = due_date_change("2024-05-04", "2024-05-09").unwrap().unwrap().unwrap();
        assert_eq!(changed.with_timezone(&Local).date_naive(), NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        assert!(due_date_change("", "not-a-date").is_err());
    }

    #[test]
    fn test_find_member() {
        let members = vec![
            User::new("user-1", "Ada", "ada@example.com", Role::Member),
            User::new("user-2", "Linus", "linus@example.com", Role::Admin),
        ];
        assert_eq!(find_member(&members, "user-2").map(|u| u.name), Some("Linus".to_string()));
        assert!(find_member(&members, "").is_none());
    }
}
