//! Task View Component
//!
//! One task card: click to edit, hover to reveal delete, drag to move.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_droppable_mouseleave, make_on_droppable_mouseover, make_on_mousedown};

use crate::components::DeleteButton;
use crate::context::use_board_context;
use crate::models::{DragItem, Id};
use crate::store::{find_task, store_delete_task, store_update_task_content, use_board_store, BoardStateStoreFields};

/// A single task card
///
/// With `overlay` set the card renders for the drag overlay: never as a
/// placeholder and without interaction.
#[component]
pub fn TaskView(task_id: Id, #[prop(optional)] overlay: bool) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_board_context().dnd;
    let item = DragItem::task(task_id);

    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_is_over, set_mouse_is_over) = signal(false);
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let content = move || {
        store
            .tasks()
            .with(|tasks| find_task(tasks, task_id).map(|t| t.content.clone()).unwrap_or_default())
    };

    let set_editing = move |editing: bool| {
        set_edit_mode.set(editing);
        set_mouse_is_over.set(false);
    };

    // Focus the textarea as soon as edit mode mounts it
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
        }
    });

    let on_mousedown = make_on_mousedown(dnd, item, edit_mode.into());
    let on_mouseover = make_on_droppable_mouseover(dnd, item);
    let on_mouseleave = make_on_droppable_mouseleave(dnd, item);
    let is_placeholder = move || !overlay && dnd.is_dragging(item);

    view! {
        {move || {
            if is_placeholder() {
                view! { <div class="task placeholder" on:mouseover=on_mouseover on:mouseleave=on_mouseleave></div> }.into_any()
            } else if edit_mode.get() {
                view! {
                    <div class="task editing" on:mouseover=on_mouseover on:mouseleave=on_mouseleave>
                        <textarea
                            class="task-textarea"
                            node_ref=textarea_ref
                            placeholder="Task content here"
                            prop:value=content
                            on:input=move |ev| {
                                store_update_task_content(&store, task_id, event_target_value(&ev));
                            }
                            on:blur=move |_| set_editing(false)
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && ev.shift_key() {
                                    ev.prevent_default();
                                    set_editing(false);
                                }
                            }
                        ></textarea>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div
                        class="task"
                        data-drag-handle=""
                        on:mousedown=on_mousedown
                        on:mouseover=on_mouseover
                        on:mouseenter=move |_| {
                            if dnd.dragging_read.get_untracked().is_none() {
                                set_mouse_is_over.set(true);
                            }
                        }
                        on:mouseleave=move |ev| {
                            set_mouse_is_over.set(false);
                            on_mouseleave(ev);
                        }
                        on:click=move |_| {
                            // Release after a drag also fires click
                            if !overlay && !dnd.drag_just_ended_read.get_untracked() {
                                set_editing(true);
                            }
                        }
                    >
                        <p class="task-content">{content}</p>
                        <Show when=move || !overlay && mouse_is_over.get()>
                            <DeleteButton
                                button_class="task-delete-btn"
                                on_delete=move |_| store_delete_task(&store, task_id)
                            />
                        </Show>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
