//! Draggable Board Component
//!
//! Lays out the columns side by side, owns the drag signals, and turns a
//! finished drag into a move on the board store.

use leptos::prelude::*;
use leptos_dragdrop::*;
use taskflow_core::drag::find_task;

use crate::components::{BoardColumn, InlineTitleForm, TaskCardBody};
use crate::context::use_board;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DraggableBoard() -> impl IntoView {
    let ctx = use_board();
    let state = use_app_store();

    let dnd = create_dnd_signals(ctx.activation);

    bind_global_mouseup(dnd, move |dragged_id, target| {
        ctx.drop_task(&dragged_id, target.as_ref().map(DropTarget::id));
        state.active_task().set(None);
    });

    // Snapshot the dragged task for the overlay when a drag starts
    Effect::new(move |_| {
        let active = dnd
            .dragging_id_read
            .get()
            .and_then(|id| state.board().with_untracked(|b| find_task(b, &id).cloned()));
        state.active_task().set(active);
    });

    let column_ids = Memo::new(move |_| {
        state
            .board()
            .with(|b| b.columns.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
    });

    let (adding_column, set_adding_column) = signal(false);

    let add_column = move |title: String| {
        if ctx.add_column(&title).is_some() {
            set_adding_column.set(false);
        }
    };

    let board_class = move || {
        if dnd.dragging_id_read.get().is_some() {
            "board is-dragging"
        } else {
            "board"
        }
    };

    view! {
        <div class=board_class>
            <For
                each=move || column_ids.get()
                key=|column_id| column_id.clone()
                children=move |column_id| view! { <BoardColumn column_id=column_id dnd=dnd /> }
            />

            <div class="board-add-column">
                <Show
                    when=move || adding_column.get()
                    fallback=move || view! {
                        <button class="add-column-btn" on:click=move |_| set_adding_column.set(true)>
                            "+ Add Column"
                        </button>
                    }
                >
                    <InlineTitleForm
                        placeholder="Enter column title..."
                        submit_label="Add Column"
                        on_submit=add_column
                        on_cancel=move |_: ()| set_adding_column.set(false)
                    />
                </Show>
            </div>
        </div>

        <DragOverlay dnd=dnd>
            {move || state.active_task().get().map(|task| view! { <TaskCardBody task=task preview=true /> })}
        </DragOverlay>
    }
}
