//! Board Errors
//!
//! Lookup misses reported by store operations. The UI treats them as no-ops.

use crate::models::Id;

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    ColumnNotFound(Id),
    TaskNotFound(Id),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ColumnNotFound(id) => write!(f, "Column not found: {}", id),
            BoardError::TaskNotFound(id) => write!(f, "Task not found: {}", id),
        }
    }
}

impl std::error::Error for BoardError {}
