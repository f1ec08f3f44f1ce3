//! Drag Session
//!
//! What the board is dragging, and which store operation a drag-over or
//! drag-end turns into. Drag-over may fire many times per gesture, so every
//! command is a no-op when source and target coincide.

use crate::error::BoardResult;
use crate::models::{DragItem, Id, ItemKind};
use crate::store::BoardState;

/// Transient per-gesture state owned by the board view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Column(Id),
    Task(Id),
}

impl DragSession {
    /// Session for a drag that just started on `item`
    pub fn start(item: DragItem) -> Self {
        match item.kind {
            ItemKind::Column => DragSession::Column(item.id),
            ItemKind::Task => DragSession::Task(item.id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }
}

/// Store mutation requested by the drag session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragCommand {
    ReorderColumns { from: Id, to: Id },
    MoveTask { active: Id, over: Id, over_kind: ItemKind },
}

impl DragCommand {
    pub fn apply(self, state: &mut BoardState) -> BoardResult<()> {
        match self {
            DragCommand::ReorderColumns { from, to } => state.reorder_columns(from, to),
            DragCommand::MoveTask { active, over, over_kind } => {
                state.reorder_or_reparent_task(active, over, over_kind)
            }
        }
    }
}

impl std::fmt::Display for DragCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragCommand::ReorderColumns { from, to } => write!(f, "reorder_columns({} -> {})", from, to),
            DragCommand::MoveTask { active, over, over_kind } => {
                write!(f, "move_task({} -> {}:{})", active, over_kind.as_str(), over)
            }
        }
    }
}

/// Tasks follow the pointer live; columns wait for the drop
pub fn drag_over_command(active: DragItem, over: DragItem) -> Option<DragCommand> {
    if active.id == over.id || active.kind != ItemKind::Task {
        return None;
    }
    Some(DragCommand::MoveTask {
        active: active.id,
        over: over.id,
        over_kind: over.kind,
    })
}

/// Final reorder on drop. Only columns reorder here; a column dropped on a
/// task targets the task's column.
pub fn drag_end_command(state: &BoardState, active: DragItem, over: Option<DragItem>) -> Option<DragCommand> {
    let over = over?;
    if active.id == over.id || active.kind != ItemKind::Column {
        return None;
    }
    let to = match over.kind {
        ItemKind::Column => over.id,
        ItemKind::Task => state.task(over.id)?.column_id,
    };
    if to == active.id {
        return None;
    }
    Some(DragCommand::ReorderColumns { from: active.id, to })
}
