//! Frontend Models
//!
//! Board entities and the descriptors passed through drag callbacks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque entity identifier, unique within its collection
pub type Id = Uuid;

/// Fresh identifier for a newly created entity
pub fn new_id() -> Id {
    Uuid::new_v4()
}

/// A board lane. Its tasks are those whose `column_id` matches `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

/// A work item owned by exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub content: String,
    #[serde(rename = "columnId")]
    pub column_id: Id,
}

/// Declared kind of a draggable or droppable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Column,
    Task,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Column => "column",
            ItemKind::Task => "task",
        }
    }
}

/// Drag descriptor: which item, and what kind of item it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragItem {
    pub kind: ItemKind,
    pub id: Id,
}

impl DragItem {
    pub fn column(id: Id) -> Self {
        Self { kind: ItemKind::Column, id }
    }

    pub fn task(id: Id) -> Self {
        Self { kind: ItemKind::Task, id }
    }
}

impl std::fmt::Display for DragItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}
