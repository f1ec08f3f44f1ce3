//! Kanban Board App
//!
//! Owns the board store and mounts the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::KanbanBoard;
use crate::store::{BoardState, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for every view below
    let store: BoardStore = Store::new(BoardState::new());
    provide_context(store);

    view! {
        <main class="app-layout">
            <KanbanBoard />
        </main>
    }
}
