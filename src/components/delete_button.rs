//! Delete Button Component
//!
//! Trash control shared by columns and tasks.

use leptos::prelude::*;

/// Deletes immediately on click; the click never reaches the parent
#[component]
pub fn DeleteButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=button_class
            title="Delete"
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "🗑"
        </button>
    }
}
