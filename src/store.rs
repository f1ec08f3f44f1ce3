//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `BoardState` owns the board and every mutation is one of its methods;
//! the `store_*` helpers apply those methods to the store in context.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Serialize;

use crate::drag::DragCommand;
use crate::error::{BoardError, BoardResult};
use crate::models::{new_id, Column, Id, ItemKind, Task};

fn default_column_title(n: u32) -> String {
    format!("Column {}", n)
}

fn default_task_content(n: usize) -> String {
    format!("Task {}", n)
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns, left to right
    pub columns: Vec<Column>,
    /// Tasks of every column in one flat list, top to bottom
    pub tasks: Vec<Task>,
    /// Columns ever created (drives default titles, never decreases)
    pub counter: u32,
}

/// Move the element at `from` to `to`, shifting everything in between
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

pub fn find_column(columns: &[Column], id: Id) -> Option<&Column> {
    columns.iter().find(|c| c.id == id)
}

pub fn find_task(tasks: &[Task], id: Id) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Tasks owned by `column_id`, in board order
pub fn tasks_for_column(tasks: &[Task], column_id: Id) -> Vec<Task> {
    tasks.iter().filter(|t| t.column_id == column_id).cloned().collect()
}

pub fn count_for_column(tasks: &[Task], column_id: Id) -> usize {
    tasks.iter().filter(|t| t.column_id == column_id).count()
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        find_task(&self.tasks, id)
    }

    fn column_index(&self, id: Id) -> BoardResult<usize> {
        self.columns.iter().position(|c| c.id == id).ok_or(BoardError::ColumnNotFound(id))
    }

    fn task_index(&self, id: Id) -> BoardResult<usize> {
        self.tasks.iter().position(|t| t.id == id).ok_or(BoardError::TaskNotFound(id))
    }

    /// Append a column titled from the creation counter
    pub fn create_column(&mut self) -> Column {
        self.counter += 1;
        let column = Column {
            id: new_id(),
            title: default_column_title(self.counter),
        };
        self.columns.push(column.clone());
        column
    }

    /// Remove a column together with all of its tasks
    pub fn delete_column(&mut self, id: Id) -> BoardResult<()> {
        let index = self.column_index(id)?;
        self.columns.remove(index);
        self.tasks.retain(|t| t.column_id != id);
        Ok(())
    }

    pub fn rename_column(&mut self, id: Id, title: String) -> BoardResult<()> {
        let index = self.column_index(id)?;
        self.columns[index].title = title;
        Ok(())
    }

    /// Append a task to `column_id`. Content numbering follows the current
    /// task count, so labels can repeat after deletions.
    pub fn create_task(&mut self, column_id: Id) -> BoardResult<Task> {
        self.column_index(column_id)?;
        let task = Task {
            id: new_id(),
            content: default_task_content(self.tasks.len() + 1),
            column_id,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn delete_task(&mut self, id: Id) -> BoardResult<()> {
        let index = self.task_index(id)?;
        self.tasks.remove(index);
        Ok(())
    }

    pub fn update_task_content(&mut self, id: Id, content: String) -> BoardResult<()> {
        let index = self.task_index(id)?;
        self.tasks[index].content = content;
        Ok(())
    }

    /// Move column `from_id` into the slot held by `to_id`
    pub fn reorder_columns(&mut self, from_id: Id, to_id: Id) -> BoardResult<()> {
        if from_id == to_id {
            return Ok(());
        }
        let from = self.column_index(from_id)?;
        let to = self.column_index(to_id)?;
        move_item(&mut self.columns, from, to);
        Ok(())
    }

    /// Over a task: take its column and its slot. Over a column: take the
    /// column, keep the slot.
    pub fn reorder_or_reparent_task(&mut self, active_id: Id, over_id: Id, over_kind: ItemKind) -> BoardResult<()> {
        if active_id == over_id {
            return Ok(());
        }
        let active = self.task_index(active_id)?;

        match over_kind {
            ItemKind::Task => {
                let over = self.task_index(over_id)?;
                self.tasks[active].column_id = self.tasks[over].column_id;
                move_item(&mut self.tasks, active, over);
            }
            ItemKind::Column => {
                self.column_index(over_id)?;
                self.tasks[active].column_id = over_id;
            }
        }
        Ok(())
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

fn log_created<T: Serialize>(kind: &str, entity: &T) {
    let json = serde_json::to_string(entity).unwrap_or_default();
    web_sys::console::log_1(&format!("[STORE] Created {}: {}", kind, json).into());
}

fn report(op: &str, result: BoardResult<()>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[STORE] {} skipped: {}", op, err).into());
    }
}

pub fn store_create_column(store: &BoardStore) {
    let column = store.write().create_column();
    log_created("column", &column);
}

pub fn store_delete_column(store: &BoardStore, id: Id) {
    let result = store.write().delete_column(id);
    if result.is_ok() {
        web_sys::console::log_1(&format!("[STORE] Deleted column {} and its tasks", id).into());
    }
    report("delete_column", result);
}

pub fn store_rename_column(store: &BoardStore, id: Id, title: String) {
    let result = store.write().rename_column(id, title);
    report("rename_column", result);
}

pub fn store_create_task(store: &BoardStore, column_id: Id) {
    let result = store.write().create_task(column_id);
    match result {
        Ok(task) => log_created("task", &task),
        Err(err) => report("create_task", Err(err)),
    }
}

pub fn store_delete_task(store: &BoardStore, id: Id) {
    let result = store.write().delete_task(id);
    if result.is_ok() {
        web_sys::console::log_1(&format!("[STORE] Deleted task {}", id).into());
    }
    report("delete_task", result);
}

pub fn store_update_task_content(store: &BoardStore, id: Id, content: String) {
    let result = store.write().update_task_content(id, content);
    report("update_task_content", result);
}

/// Apply a reorder/re-parent produced by the drag session
pub fn store_apply_drag_command(store: &BoardStore, command: DragCommand) {
    let result = command.apply(&mut store.write());
    report(&command.to_string(), result);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(state: &BoardState) -> Vec<String> {
        state.columns.iter().map(|c| c.title.clone()).collect()
    }

    fn task_ids(state: &BoardState) -> Vec<Id> {
        state.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_move_item() {
        let mut v = vec![0, 1, 2, 3];
        move_item(&mut v, 0, 2);
        assert_eq!(v, vec![1, 2, 0, 3]);
        move_item(&mut v, 3, 0);
        assert_eq!(v, vec![3, 1, 2, 0]);
        move_item(&mut v, 1, 1);
        assert_eq!(v, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_column_titles_follow_counter() {
        let mut state = BoardState::new();
        for _ in 0..3 {
            state.create_column();
        }
        assert_eq!(titles(&state), vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(state.counter, 3);
    }

    #[test]
    fn test_column_titles_survive_deletions() {
        let mut state = BoardState::new();
        let first = state.create_column();
        state.create_column();
        state.delete_column(first.id).unwrap();
        let third = state.create_column();

        assert_eq!(third.title, "Column 3");
        assert_eq!(titles(&state), vec!["Column 2", "Column 3"]);
        assert_eq!(state.counter, 3);
    }

    #[test]
    fn test_column_ids_are_unique() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_delete_column_cascades_to_its_tasks_only() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        state.create_task(a.id).unwrap();
        let kept = state.create_task(b.id).unwrap();
        state.create_task(a.id).unwrap();

        state.delete_column(a.id).unwrap();

        assert_eq!(state.columns, vec![b.clone()]);
        assert_eq!(state.tasks, vec![kept]);
    }

    #[test]
    fn test_delete_missing_column_is_rejected_without_change() {
        let mut state = BoardState::new();
        let a = state.create_column();
        state.create_task(a.id).unwrap();
        let before = state.clone();

        let missing = new_id();
        assert_eq!(state.delete_column(missing), Err(BoardError::ColumnNotFound(missing)));
        assert_eq!(state.columns, before.columns);
        assert_eq!(state.tasks, before.tasks);
    }

    #[test]
    fn test_rename_column_accepts_empty_title() {
        let mut state = BoardState::new();
        let a = state.create_column();
        state.rename_column(a.id, String::new()).unwrap();
        assert_eq!(find_column(&state.columns, a.id).unwrap().title, "");

        state.rename_column(a.id, "Backlog".to_string()).unwrap();
        assert_eq!(find_column(&state.columns, a.id).unwrap().title, "Backlog");
    }

    #[test]
    fn test_rename_missing_column() {
        let mut state = BoardState::new();
        let missing = new_id();
        assert_eq!(
            state.rename_column(missing, "x".to_string()),
            Err(BoardError::ColumnNotFound(missing))
        );
    }

    #[test]
    fn test_create_task_in_missing_column() {
        let mut state = BoardState::new();
        assert!(state.create_task(new_id()).is_err());
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_task_content_follows_task_count() {
        let mut state = BoardState::new();
        let a = state.create_column();
        state.create_task(a.id).unwrap();
        let second = state.create_task(a.id).unwrap();
        state.create_task(a.id).unwrap();
        assert_eq!(second.content, "Task 2");

        // Numbering is by count, so a label repeats after a deletion
        state.delete_task(second.id).unwrap();
        let fourth = state.create_task(a.id).unwrap();
        assert_eq!(fourth.content, "Task 3");
        assert_eq!(state.tasks.iter().filter(|t| t.content == "Task 3").count(), 2);
    }

    #[test]
    fn test_update_task_content_accepts_empty() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let task = state.create_task(a.id).unwrap();
        state.update_task_content(task.id, String::new()).unwrap();
        assert_eq!(state.task(task.id).unwrap().content, "");
    }

    #[test]
    fn test_delete_task() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let t1 = state.create_task(a.id).unwrap();
        let t2 = state.create_task(a.id).unwrap();

        state.delete_task(t1.id).unwrap();
        assert_eq!(task_ids(&state), vec![t2.id]);
        assert_eq!(state.delete_task(t1.id), Err(BoardError::TaskNotFound(t1.id)));
        assert_eq!(task_ids(&state), vec![t2.id]);
    }

    #[test]
    fn test_reorder_columns() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        let c = state.create_column();

        state.reorder_columns(a.id, c.id).unwrap();
        assert_eq!(titles(&state), vec!["Column 2", "Column 3", "Column 1"]);

        state.reorder_columns(a.id, b.id).unwrap();
        assert_eq!(titles(&state), vec!["Column 1", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_reorder_columns_same_id_is_noop() {
        let mut state = BoardState::new();
        let a = state.create_column();
        state.create_column();
        let before = state.columns.clone();

        state.reorder_columns(a.id, a.id).unwrap();
        assert_eq!(state.columns, before);
    }

    #[test]
    fn test_reorder_columns_missing_target() {
        let mut state = BoardState::new();
        let a = state.create_column();
        state.create_column();
        let before = state.columns.clone();

        let missing = new_id();
        assert_eq!(state.reorder_columns(a.id, missing), Err(BoardError::ColumnNotFound(missing)));
        assert_eq!(state.columns, before);
    }

    #[test]
    fn test_task_over_column_changes_only_column_id() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        let t1 = state.create_task(a.id).unwrap();
        let t2 = state.create_task(a.id).unwrap();
        let t3 = state.create_task(b.id).unwrap();

        state.reorder_or_reparent_task(t2.id, b.id, ItemKind::Column).unwrap();

        assert_eq!(task_ids(&state), vec![t1.id, t2.id, t3.id]);
        assert_eq!(state.task(t2.id).unwrap().column_id, b.id);
        assert_eq!(state.task(t1.id).unwrap().column_id, a.id);
        assert_eq!(state.task(t3.id).unwrap().column_id, b.id);
    }

    #[test]
    fn test_task_over_task_moves_and_reparents() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        let t1 = state.create_task(a.id).unwrap();
        let t2 = state.create_task(a.id).unwrap();
        let t3 = state.create_task(b.id).unwrap();

        state.reorder_or_reparent_task(t1.id, t3.id, ItemKind::Task).unwrap();

        assert_eq!(task_ids(&state), vec![t2.id, t3.id, t1.id]);
        assert_eq!(state.task(t1.id).unwrap().column_id, b.id);
        assert_eq!(tasks_for_column(&state.tasks, a.id), vec![state.task(t2.id).unwrap().clone()]);
    }

    #[test]
    fn test_task_order_round_trip() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let t1 = state.create_task(a.id).unwrap();
        let t2 = state.create_task(a.id).unwrap();
        let t3 = state.create_task(a.id).unwrap();
        let before = state.tasks.clone();

        state.reorder_or_reparent_task(t1.id, t3.id, ItemKind::Task).unwrap();
        assert_eq!(task_ids(&state), vec![t2.id, t3.id, t1.id]);

        // Back onto the task now sitting in t1's old slot
        state.reorder_or_reparent_task(t1.id, t2.id, ItemKind::Task).unwrap();
        assert_eq!(state.tasks, before);
    }

    #[test]
    fn test_task_over_itself_is_noop() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let t1 = state.create_task(a.id).unwrap();
        state.create_task(a.id).unwrap();
        let before = state.tasks.clone();

        state.reorder_or_reparent_task(t1.id, t1.id, ItemKind::Task).unwrap();
        assert_eq!(state.tasks, before);
    }

    #[test]
    fn test_reparent_with_column_as_active_is_rejected() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        state.create_task(b.id).unwrap();
        let before = state.clone();

        assert_eq!(
            state.reorder_or_reparent_task(a.id, b.id, ItemKind::Column),
            Err(BoardError::TaskNotFound(a.id))
        );
        assert_eq!(state.tasks, before.tasks);
        assert_eq!(state.columns, before.columns);
    }

    #[test]
    fn test_reparent_onto_missing_column_leaves_task_alone() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let t1 = state.create_task(a.id).unwrap();

        assert!(state.reorder_or_reparent_task(t1.id, new_id(), ItemKind::Column).is_err());
        assert_eq!(state.task(t1.id).unwrap().column_id, a.id);
    }

    #[test]
    fn test_count_for_column() {
        let mut state = BoardState::new();
        let a = state.create_column();
        let b = state.create_column();
        state.create_task(a.id).unwrap();
        state.create_task(a.id).unwrap();
        assert_eq!(count_for_column(&state.tasks, a.id), 2);
        assert_eq!(count_for_column(&state.tasks, b.id), 0);
    }
}
