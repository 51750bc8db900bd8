//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Global listeners are installed on the document by `bind_global_mouseup`
//! and removed when the returned `DndListeners` handle is dropped. A listener
//! that fires after the view's signals are disposed does nothing.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a container (append to the end of it)
    List(String),
    /// Drop on another draggable (take its place)
    Card(String),
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::List(id) | DropTarget::Card(id) => id,
        }
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
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// While locked, mousedown never arms a drag
    pub locked_read: ReadSignal<bool>,
    pub locked_write: WriteSignal<bool>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 8;

/// How long `drag_just_ended` stays set, so the trailing click can be ignored
const DRAG_END_CLICK_GUARD_MS: i32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (locked_read, locked_write) = signal(false);
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
        locked_read,
        locked_write,
    }
}

/// True once the pointer has travelled far enough from the mousedown point.
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_CLICK_GUARD_MS,
        );
        cb.forget();
    }
}

/// Whether a mousedown may arm a drag: primary button only, and never
/// while the host has locked the session.
pub fn can_start_drag(button: i16, locked: bool) -> bool {
    button == 0 && !locked
}

/// Lock or unlock the drag session (e.g. while the host awaits the server)
pub fn set_locked(dnd: &DndSignals, locked: bool) {
    dnd.locked_write.try_set(locked);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if !can_start_drag(ev.button(), dnd.locked_read.try_get_untracked().unwrap_or(true)) {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(id.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

type MouseListener = Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document-level listeners installed by `bind_global_mouseup`.
///
/// Dropping the handle removes them from the document; keep it alive for as
/// long as the view that owns the drag session.
pub struct DndListeners {
    mousemove: MouseListener,
    mouseup: MouseListener,
}

impl Drop for DndListeners {
    fn drop(&mut self) {
        if let Some(doc) = document() {
            let _ = doc.remove_event_listener_with_callback("mousemove", self.mousemove.as_ref().unchecked_ref());
            let _ = doc.remove_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref());
        }
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

fn listen(event: &str, listener: &MouseListener) {
    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn global_mousemove(dnd: DndSignals) -> MouseListener {
    Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.try_get_untracked().flatten() else { return };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_id_write.set(Some(pending));
        }
    })
}

/// Create mouseover handler for draggable elements (take their place)
///
/// Hovering the dragged element itself targets it too; the host treats a
/// drop on the source as a no-op.
pub fn make_on_card_mouseover(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        // Stop the enclosing container from claiming the drop
        ev.stop_propagation();
        if matches!(dnd.drop_target_read.get_untracked(), Some(DropTarget::Card(ref cur)) if *cur == id) {
            return;
        }
        dnd.drop_target_write.set(Some(DropTarget::Card(id.clone())));
    }
}

/// Create mouseover handler for containers (append to the end)
///
/// Fires for the container's empty area only; cards stop propagation.
pub fn make_on_list_mouseover(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        if matches!(dnd.drop_target_read.get_untracked(), Some(DropTarget::List(ref cur)) if *cur == id) {
            return;
        }
        dnd.drop_target_write.set(Some(DropTarget::List(id.clone())));
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` receives the dragged id and the target under the pointer, which
/// is `None` when the pointer was released outside every target.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F) -> DndListeners
where
    F: Fn(String, Option<DropTarget>) + Clone + 'static,
{
    let mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return };
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        match dragging_id {
            // We were actually dragging (not just clicking)
            Some(dragged) => {
                end_drag(&dnd);
                on_drop(dragged, drop_target);
            }
            // Click event will fire naturally on the element
            None => {}
        }
    });
    let mousemove = global_mousemove(dnd);

    listen("mouseup", &mouseup);
    listen("mousemove", &mousemove);
    DndListeners { mousemove, mouseup }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_jitter_is_a_click() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (108, 92)));
    }

    #[test]
    fn test_movement_past_threshold_starts_drag() {
        assert!(exceeds_threshold((100, 100), (109, 100)));
        assert!(exceeds_threshold((100, 100), (100, 91)));
    }

    #[test]
    fn test_lock_blocks_new_drags() {
        assert!(can_start_drag(0, false));
        // A move is still in flight
        assert!(!can_start_drag(0, true));
        // Secondary buttons never drag
        assert!(!can_start_drag(2, false));
        assert!(!can_start_drag(1, true));
    }

    #[test]
    fn test_drop_target_id() {
        assert_eq!(DropTarget::List("l1".into()).id(), "l1");
        assert_eq!(DropTarget::Card("c9".into()).id(), "c9");
    }
}
