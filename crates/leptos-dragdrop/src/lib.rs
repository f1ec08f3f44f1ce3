//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, tracks the
//! droppable under the pointer and reports drag start / over / end to the
//! owner as item descriptors.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DEFAULT_ACTIVATION_DISTANCE_PX: i32 = 5;

/// Window after a drop during which the trailing click is suppressed
const DRAG_JUST_ENDED_MS: i32 = 100;

/// Elements that keep their own mouse behaviour and never start a drag
const NON_DRAG_SELECTOR: &str = "input, textarea, button";

/// Marks the element a draggable is measured from (`data-drag-handle`)
const DRAG_HANDLE_SELECTOR: &str = "[data-drag-handle]";

/// Descriptor carried by draggables and droppables
pub trait DragPayload: Copy + PartialEq + Send + Sync + 'static {}

impl<T> DragPayload for T where T: Copy + PartialEq + Send + Sync + 'static {}

/// Drag context tunables
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DndOptions {
    /// Pointer travel on either axis before a press becomes a drag
    pub activation_distance: i32,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE_PX,
        }
    }
}

/// The dragged item and the droppable under the pointer, if any
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent<T> {
    pub active: T,
    pub over: Option<T>,
}

/// Owner callbacks
#[derive(Clone, Copy)]
pub struct DndHandlers<T: DragPayload> {
    /// Pending press crossed the activation distance
    pub on_drag_start: Callback<T>,
    /// Pointer entered a droppable other than the active item
    pub on_drag_over: Callback<DragEvent<T>>,
    /// Mouse released while dragging; `over` is `None` outside any droppable
    pub on_drag_end: Callback<DragEvent<T>>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<T: DragPayload> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub over_read: ReadSignal<Option<T>>,
    pub over_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Latest pointer position while dragging
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    /// Pointer offset inside the grabbed element
    pub grab_offset_read: ReadSignal<(i32, i32)>,
    pub grab_offset_write: WriteSignal<(i32, i32)>,
    /// Width of the grabbed element, so the overlay keeps its size
    pub grab_width_read: ReadSignal<f64>,
    pub grab_width_write: WriteSignal<f64>,
    pub options: DndOptions,
    pub handlers: DndHandlers<T>,
}

impl<T: DragPayload> DndSignals<T> {
    /// Whether `item` is the one being dragged (tracked)
    pub fn is_dragging(&self, item: T) -> bool {
        self.dragging_read.get() == Some(item)
    }

    /// Whether `item` is the current over target (tracked)
    pub fn is_over(&self, item: T) -> bool {
        self.over_read.get() == Some(item)
    }

    /// Whether any drag is in progress (tracked)
    pub fn is_active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

pub fn create_dnd_signals<T: DragPayload>(options: DndOptions, handlers: DndHandlers<T>) -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (over_read, over_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    let (grab_offset_read, grab_offset_write) = signal((0i32, 0i32));
    let (grab_width_read, grab_width_write) = signal(0f64);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
        grab_offset_read,
        grab_offset_write,
        grab_width_read,
        grab_width_write,
        options,
        handlers,
    }
}

/// True once the pointer has travelled further than `distance` on either axis
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), distance: i32) -> bool {
    (current.0 - start.0).abs() > distance || (current.1 - start.1).abs() > distance
}

/// End drag operation
pub fn end_drag<T: DragPayload>(dnd: &DndSignals<T>) {
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_JUST_ENDED_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position and grab geometry.
/// The nearest `data-drag-handle` ancestor is the element measured.
pub fn make_on_mousedown<T: DragPayload>(
    dnd: DndSignals<T>,
    item: T,
    disabled: Signal<bool>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || disabled.get_untracked() {
            return;
        }
        let on_control = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(NON_DRAG_SELECTOR).ok().flatten())
            .is_some();
        if on_control {
            return;
        }

        let handle = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(DRAG_HANDLE_SELECTOR).ok().flatten());
        if let Some(el) = handle {
            let rect = el.get_bounding_client_rect();
            dnd.grab_offset_write.set((
                ev.client_x() - rect.left() as i32,
                ev.client_y() - rect.top() as i32,
            ));
            dnd.grab_width_write.set(rect.width());
        }
        dnd.pending_write.set(Some(item));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mouseover handler for droppables
/// Innermost droppable wins; the event stops here while dragging
pub fn make_on_droppable_mouseover<T: DragPayload>(
    dnd: DndSignals<T>,
    item: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(active) = dnd.dragging_read.get_untracked() else {
            return;
        };
        ev.stop_propagation();

        if dnd.over_read.get_untracked() == Some(item) {
            return;
        }
        dnd.over_write.set(Some(item));
        if active != item {
            dnd.handlers.on_drag_over.run(DragEvent {
                active,
                over: Some(item),
            });
        }
    }
}

/// Create mouseleave handler for droppables
/// Leaving the current target clears it; the next mouseover sets a new one
pub fn make_on_droppable_mouseleave<T: DragPayload>(
    dnd: DndSignals<T>,
    item: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() && dnd.over_read.get_untracked() == Some(item) {
            dnd.over_write.set(None);
        }
    }
}

fn add_document_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Document mousemove - starts drag if moved enough, then tracks the pointer
fn bind_global_mousemove<T: DragPayload>(dnd: DndSignals<T>) {
    add_document_listener("mousemove", move |ev: web_sys::MouseEvent| {
        let current = (ev.client_x(), ev.client_y());

        if dnd.dragging_read.get_untracked().is_some() {
            dnd.pointer_write.set(current);
            return;
        }

        if let Some(item) = dnd.pending_read.get_untracked() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, current, dnd.options.activation_distance) {
                dnd.pointer_write.set(current);
                dnd.dragging_write.set(Some(item));
                dnd.handlers.on_drag_start.run(item);
            }
        }
    });
}

/// Document mouseup - ends the drag and reports the drop
fn bind_global_mouseup<T: DragPayload>(dnd: DndSignals<T>) {
    add_document_listener("mouseup", move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let over = dnd.over_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        if let Some(active) = dragging {
            end_drag(&dnd);
            dnd.handlers.on_drag_end.run(DragEvent { active, over });
        }
        // Not dragging - click event will fire naturally on the element
    });
}

/// Bind the document-level listeners a drag context needs
pub fn bind_global_listeners<T: DragPayload>(dnd: DndSignals<T>) {
    bind_global_mouseup(dnd);
    bind_global_mousemove(dnd);
}
