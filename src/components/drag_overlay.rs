//! Drag Overlay Component
//!
//! Full rendering of the dragged item, pinned under the pointer while the
//! in-place view shows a placeholder.

use leptos::prelude::*;

use crate::components::{ColumnView, TaskView};
use crate::context::use_board_context;
use crate::drag::DragSession;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let ctx = use_board_context();
    let dnd = ctx.dnd;

    // Keep the grab point under the pointer; never intercept hover
    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        let (dx, dy) = dnd.grab_offset_read.get();
        format!(
            "position: fixed; left: {}px; top: {}px; width: {}px; pointer-events: none; z-index: 1000;",
            x - dx,
            y - dy,
            dnd.grab_width_read.get()
        )
    };

    view! {
        {move || match ctx.session.get() {
            DragSession::Idle => ().into_any(),
            DragSession::Column(id) => view! {
                <div class="drag-overlay" style=style>
                    <ColumnView column_id=id overlay=true />
                </div>
            }
            .into_any(),
            DragSession::Task(id) => view! {
                <div class="drag-overlay" style=style>
                    <TaskView task_id=id overlay=true />
                </div>
            }
            .into_any(),
        }}
    }
}
