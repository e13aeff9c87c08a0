//! Leptos Drag-and-Drop Utilities
//!
//! Mouse-event based drag-and-drop for board layouts (lanes and cards).
//! Uses a movement threshold to distinguish click from drag.
//!
//! The document-level listeners registered here are `forget()`-ed and so
//! outlive the view that bound them. They only touch signals through the
//! `try_*` accessors, which turn into no-ops once those signals are
//! disposed.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What kind of entity is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Lane,
    Card,
}

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Slot in the horizontal lane strip (insertion index, before removal)
    LaneSlot(usize),
    /// Slot in a lane's card list (lane id, insertion index before removal)
    CardSlot(i64, usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<(DragKind, i64)>>,
    pub dragging_write: WriteSignal<Option<(DragKind, i64)>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<(DragKind, i64)>>,
    pub pending_write: WriteSignal<Option<(DragKind, i64)>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<(DragKind, i64)>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<(DragKind, i64)>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let _ = dnd.dragging_write.try_set(None);
    let _ = dnd.drop_target_write.try_set(None);
    let _ = dnd.pending_write.try_set(None);
    let _ = dnd.drag_just_ended_write.try_set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable lanes/cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, kind: DragKind, item_id: i64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_write.set(Some((kind, item_id)));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.try_get_untracked().flatten();
        let dragging = dnd.dragging_read.try_get_untracked().flatten();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dragging.is_none() {
            let start_x = dnd.start_x_read.try_get_untracked().unwrap_or(0);
            let start_y = dnd.start_y_read.try_get_untracked().unwrap_or(0);
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                let _ = dnd.dragging_write.try_set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a slot in the lane strip
pub fn make_on_lane_slot_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some((DragKind::Lane, _)) = dnd.dragging_read.get_untracked() {
            dnd.drop_target_write.set(Some(DropTarget::LaneSlot(index)));
        }
    }
}

/// Create mouseenter handler for a slot in a lane's card list
pub fn make_on_card_slot_mouseenter(dnd: DndSignals, lane_id: i64, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some((DragKind::Card, _)) = dnd.dragging_read.get_untracked() {
            dnd.drop_target_write.set(Some(DropTarget::CardSlot(lane_id, index)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragKind, i64, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.try_get_untracked().flatten();
        let drop_target = dnd.drop_target_read.try_get_untracked().flatten();

        // Clear pending state first
        let _ = dnd.pending_write.try_set(None);

        // If we were actually dragging (not just clicking)
        if let (Some((kind, dragged)), Some(target)) = (dragging, drop_target) {
            end_drag(&dnd);
            on_drop(kind, dragged, target);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
