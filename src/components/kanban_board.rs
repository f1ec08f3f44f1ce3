//! Kanban Board Component
//!
//! Top-level board: renders the columns, owns the drag session and maps
//! drag callbacks onto store operations.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_listeners, create_dnd_signals, DndHandlers, DndOptions, DragEvent};

use crate::components::{ColumnView, DragOverlay};
use crate::context::BoardContext;
use crate::drag::{drag_end_command, drag_over_command, DragSession};
use crate::models::DragItem;
use crate::store::{store_apply_drag_command, store_create_column, use_board_store, BoardStateStoreFields};

/// Pointer travel before a press on a column header or task becomes a drag
const BOARD_ACTIVATION_DISTANCE_PX: i32 = 3;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board_store();
    let (session, set_session) = signal(DragSession::Idle);

    let handlers = DndHandlers {
        on_drag_start: Callback::new(move |item: DragItem| {
            web_sys::console::log_1(&format!("[DND] Drag start: {}", item).into());
            set_session.set(DragSession::start(item));
        }),
        // Tasks are committed here, continuously, while the pointer moves
        on_drag_over: Callback::new(move |ev: DragEvent<DragItem>| {
            let Some(over) = ev.over else {
                return;
            };
            if let Some(command) = drag_over_command(ev.active, over) {
                store_apply_drag_command(&store, command);
            }
        }),
        on_drag_end: Callback::new(move |ev: DragEvent<DragItem>| {
            set_session.set(DragSession::Idle);
            web_sys::console::log_1(&format!("[DND] Drag end: active={}, over={:?}", ev.active, ev.over).into());

            let command = store.with_untracked(|state| drag_end_command(state, ev.active, ev.over));
            if let Some(command) = command {
                store_apply_drag_command(&store, command);
            }
        }),
    };

    let dnd = create_dnd_signals(
        DndOptions {
            activation_distance: BOARD_ACTIVATION_DISTANCE_PX,
        },
        handlers,
    );
    bind_global_listeners(dnd);
    provide_context(BoardContext::new(dnd, session));

    let column_ids = move || store.columns().with(|columns| columns.iter().map(|c| c.id).collect::<Vec<_>>());
    let board_class = move || {
        if !session.get().is_idle() {
            "board dragging"
        } else {
            "board"
        }
    };

    view! {
        <div class=board_class>
            <div class="board-columns">
                <For
                    each=column_ids
                    key=|id| *id
                    children=move |id| view! { <ColumnView column_id=id /> }
                />
            </div>

            <button class="add-column-btn" on:click=move |_| store_create_column(&store)>
                "+ Add Column"
            </button>

            <DragOverlay />
        </div>
    }
}
