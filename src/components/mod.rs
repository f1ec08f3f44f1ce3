//! UI Components
//!
//! Board, column and task views.

mod delete_button;
mod task_view;
mod column_view;
mod drag_overlay;
mod kanban_board;

pub use delete_button::DeleteButton;
pub use task_view::TaskView;
pub use column_view::ColumnView;
pub use drag_overlay::DragOverlay;
pub use kanban_board::KanbanBoard;
