//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! A press only turns into a drag once the pointer has been held for a
//! minimum time and then moved past a distance threshold, so clicks on a
//! draggable element still behave like clicks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What the pointer is currently over while dragging
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Another draggable item (insert at its position)
    Item(String),
    /// A container such as a list or column (append)
    Container(String),
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Item(id) | DropTarget::Container(id) => id,
        }
    }
}

/// When a press becomes a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationConstraint {
    /// Minimum hold time in milliseconds
    pub delay_ms: f64,
    /// Movement in pixels (either axis) that must be exceeded
    pub tolerance_px: i32,
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self { delay_ms: 100.0, tolerance_px: 5 }
    }
}

impl ActivationConstraint {
    pub fn new(delay_ms: u32, tolerance_px: i32) -> Self {
        Self { delay_ms: f64::from(delay_ms), tolerance_px }
    }

    /// Held long enough and moved far enough
    pub fn is_satisfied(&self, elapsed_ms: f64, dx: i32, dy: i32) -> bool {
        elapsed_ms >= self.delay_ms && (dx.abs() > self.tolerance_px || dy.abs() > self.tolerance_px)
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Press position and time for activation
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    pub pressed_at_read: ReadSignal<f64>,
    pub pressed_at_write: WriteSignal<f64>,
    /// Latest pointer position while dragging (for overlays)
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    pub constraint: ActivationConstraint,
}

/// How long the trailing click after a drop is suppressed
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals(constraint: ActivationConstraint) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pressed_at_read, pressed_at_write) = signal(0f64);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pressed_at_read,
        pressed_at_write,
        pointer_read,
        pointer_write,
        constraint,
    }
}

/// Milliseconds from the page's performance clock
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// True while `id` is the element being dragged
pub fn is_dragging(dnd: &DndSignals, id: &str) -> bool {
    dnd.dragging_id_read.with(|d| d.as_deref() == Some(id))
}

/// True while `target` is where a drop would land
pub fn is_drop_target(dnd: &DndSignals, target: &DropTarget) -> bool {
    dnd.drop_target_read.with(|t| t.as_ref() == Some(target))
}

fn set_drop_target(dnd: &DndSignals, target: Option<DropTarget>) {
    if dnd.drop_target_read.with_untracked(|current| *current != target) {
        dnd.drop_target_write.set(target);
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Form controls never start a drag
fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position and time
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if ev.target().is_some_and(|target| is_form_control(&target)) {
            return;
        }
        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
        dnd.pressed_at_write.set(now_ms());
    }
}

/// Hovering an item makes it the drop target. Hovering the dragged item
/// itself clears the target. Stops propagation so the enclosing container
/// does not override it.
pub fn make_on_item_mousemove(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_id_read.get_untracked() else {
            return;
        };
        ev.stop_propagation();
        if dragging == item_id {
            set_drop_target(&dnd, None);
        } else {
            set_drop_target(&dnd, Some(DropTarget::Item(item_id.clone())));
        }
    }
}

/// Hovering a container outside any item makes the container the target
pub fn make_on_container_mousemove(dnd: DndSignals, container_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            set_drop_target(&dnd, Some(DropTarget::Container(container_id.clone())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            set_drop_target(&dnd, None);
        }
    }
}

/// `MouseEvent.buttons` bitmask has the primary button down
fn primary_button_held(buttons: u16) -> bool {
    buttons & 1 == 1
}

/// Document mousemove (capture phase): activates pending drags and tracks
/// the pointer while dragging
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());

        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_write.set((x, y));
            return;
        }

        let Some(pending) = dnd.pending_id_read.get_untracked() else {
            return;
        };
        if !primary_button_held(ev.buttons()) {
            // The press ended without a mouseup reaching the document
            dnd.pending_id_write.set(None);
            return;
        }
        let elapsed = now_ms() - dnd.pressed_at_read.get_untracked();
        let dx = x - dnd.start_x_read.get_untracked();
        let dy = y - dnd.start_y_read.get_untracked();

        if dnd.constraint.is_satisfied(elapsed, dx, dy) {
            log::debug!("[DND] Drag start: {}", pending);
            dnd.pointer_write.set((x, y));
            dnd.dragging_id_write.set(Some(pending));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback_and_bool(
            "mousemove",
            on_mousemove.as_ref().unchecked_ref(),
            true,
        );
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs once per completed drag with the dragged id and the
/// target under the pointer, if any. Plain clicks never reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, Option<DropTarget>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        if let Some(dragged) = dragging_id {
            end_drag(&dnd);
            on_drop(dragged, drop_target);
        } else {
            // Not dragging - a click will fire naturally on the element
            dnd.pending_id_write.set(None);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

/// Floating element that follows the pointer while something is dragged
#[component]
pub fn DragOverlay(dnd: DndSignals, children: ChildrenFn) -> impl IntoView {
    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("position: fixed; left: {}px; top: {}px; pointer-events: none; z-index: 1000;", x + 8, y + 8)
    };

    view! {
        <Show when=move || dnd.dragging_id_read.get().is_some()>
            <div class="drag-overlay" style=style>
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_hold_and_movement() {
        let c = ActivationConstraint::default();
        assert!(!c.is_satisfied(50.0, 20, 0), "moved but not held");
        assert!(!c.is_satisfied(150.0, 5, -5), "held but within tolerance");
        assert!(c.is_satisfied(150.0, 6, 0));
        assert!(c.is_satisfied(100.0, 0, -6));
    }

    #[test]
    fn test_pending_press_needs_primary_button() {
        assert!(primary_button_held(1));
        assert!(primary_button_held(1 | 2));
        assert!(!primary_button_held(0), "released without a mouseup");
        assert!(!primary_button_held(2), "only the secondary button");
    }

    #[test]
    fn test_custom_constraint() {
        let c = ActivationConstraint::new(0, 0);
        assert!(c.is_satisfied(0.0, 1, 0));
        assert!(!c.is_satisfied(0.0, 0, 0));
    }

    #[test]
    fn test_drop_target_id() {
        assert_eq!(DropTarget::Item("task-1".into()).id(), "task-1");
        assert_eq!(DropTarget::Container("column-2".into()).id(), "column-2");
    }
}
