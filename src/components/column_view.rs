//! Column View Component
//!
//! One lane: draggable header with editable title and delete control, the
//! column's tasks, and an "Add task" button.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_droppable_mouseleave, make_on_droppable_mouseover, make_on_mousedown};

use crate::components::{DeleteButton, TaskView};
use crate::context::use_board_context;
use crate::models::{DragItem, Id};
use crate::store::{
    count_for_column, find_column, store_create_task, store_delete_column, store_rename_column, tasks_for_column,
    use_board_store, BoardStateStoreFields,
};

/// A single board column
///
/// With `overlay` set the column renders for the drag overlay.
#[component]
pub fn ColumnView(column_id: Id, #[prop(optional)] overlay: bool) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_board_context().dnd;
    let item = DragItem::column(column_id);

    let (edit_mode, set_edit_mode) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let title = move || {
        store
            .columns()
            .with(|columns| find_column(columns, column_id).map(|c| c.title.clone()).unwrap_or_default())
    };
    let tasks = move || store.tasks().with(|tasks| tasks_for_column(tasks, column_id));
    let task_count = move || store.tasks().with(|tasks| count_for_column(tasks, column_id));

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_mousedown = make_on_mousedown(dnd, item, edit_mode.into());
    let on_mouseover = make_on_droppable_mouseover(dnd, item);
    let on_mouseleave = make_on_droppable_mouseleave(dnd, item);
    let is_placeholder = move || !overlay && dnd.is_dragging(item);

    let column_class = move || {
        let mut c = String::from("column");
        if !overlay && dnd.is_over(item) {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        {move || {
            if is_placeholder() {
                view! { <div class="column placeholder" on:mouseover=on_mouseover on:mouseleave=on_mouseleave></div> }.into_any()
            } else {
                view! {
                    <div
                        class=column_class
                        data-drag-handle=""
                        on:mouseover=on_mouseover
                        on:mouseleave=on_mouseleave
                    >
                        <div class="column-header" on:mousedown=on_mousedown>
                            <div
                                class="column-title"
                                on:click=move |_| {
                                    if !overlay && !dnd.drag_just_ended_read.get_untracked() {
                                        set_edit_mode.set(true);
                                    }
                                }
                            >
                                <span class="task-count-badge">{task_count}</span>
                                {move || {
                                    if edit_mode.get() {
                                        view! {
                                            <input
                                                class="column-title-input"
                                                node_ref=input_ref
                                                prop:value=title
                                                on:input=move |ev| {
                                                    store_rename_column(&store, column_id, event_target_value(&ev));
                                                }
                                                on:blur=move |_| set_edit_mode.set(false)
                                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                    if ev.key() == "Enter" {
                                                        set_edit_mode.set(false);
                                                    }
                                                }
                                            />
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="column-title-text">{title}</span> }.into_any()
                                    }
                                }}
                            </div>
                            <DeleteButton
                                button_class="column-delete-btn"
                                on_delete=move |_| store_delete_column(&store, column_id)
                            />
                        </div>

                        <div class="column-tasks">
                            <For
                                each=tasks
                                key=|task| task.id
                                children=move |task| {
                                    view! { <TaskView task_id=task.id overlay=overlay /> }
                                }
                            />
                        </div>

                        <button class="add-task-btn" on:click=move |_| store_create_task(&store, column_id)>
                            "+ Add task"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
