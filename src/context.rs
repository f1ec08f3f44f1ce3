//! Board Context
//!
//! Drag state shared by the board and every column/task view.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::drag::DragSession;
use crate::models::DragItem;

/// Board-wide drag signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Pointer/target state of the drag-and-drop engine
    pub dnd: DndSignals<DragItem>,
    /// What the board is dragging - read
    pub session: ReadSignal<DragSession>,
}

impl BoardContext {
    pub fn new(dnd: DndSignals<DragItem>, session: ReadSignal<DragSession>) -> Self {
        Self { dnd, session }
    }
}

/// Get the board context; provided by `KanbanBoard`
pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
