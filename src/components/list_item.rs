//! List Item Component
//!
//! A draggable, editable item followed by its drop zone.
//! Double-clicking the item asks for confirmation before deleting it.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart};
use list_core::{ColumnId, Item, ItemPatch};
use web_sys::DragEvent;

use crate::components::DropZone;
use crate::context::AppContext;

/// Delete flow of one item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DeleteStep {
    #[default]
    Idle,
    Asking,
}

impl DeleteStep {
    fn ask(self) -> Self {
        DeleteStep::Asking
    }

    /// Next step, and whether the item is to be deleted
    fn answer(self, confirmed: bool) -> (Self, bool) {
        (DeleteStep::Idle, self == DeleteStep::Asking && confirmed)
    }
}

#[component]
pub fn ListItem(
    item: Item,
    column_id: ColumnId,
    /// Position of the item in its column
    index: usize,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = ctx.dnd;
    let id = item.id;

    // Last content written to storage
    let (saved, set_saved) = signal(item.content.clone());
    let input_ref = NodeRef::<html::Div>::new();

    let on_blur = move |_| {
        let Some(input) = input_ref.get() else { return };
        let content = input.text_content().unwrap_or_default().trim().to_string();
        if content == saved.get_untracked() {
            return;
        }
        set_saved.set(content.clone());
        ctx.mutate("update item", move |api| {
            api.update_item(id, ItemPatch::content(content))
        });
    };

    let start_drag = make_on_dragstart(dnd, id.get());
    let on_dragstart = move |ev: DragEvent| {
        start_drag(ev);
        ctx.begin_drag(id);
    };

    let finish_drag = make_on_dragend(dnd);
    let on_dragend = move |ev: DragEvent| {
        finish_drag(ev);
        ctx.cancel_drag();
    };

    let (delete_step, set_delete_step) = signal(DeleteStep::Idle);
    let asking = move || delete_step.get() == DeleteStep::Asking;

    let on_dblclick = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_delete_step.update(|step| *step = step.ask());
    };

    let answer = move |confirmed: bool| {
        let (next, delete) = delete_step.get_untracked().answer(confirmed);
        set_delete_step.set(next);
        if delete {
            ctx.mutate("delete item", move |api| api.delete_item(id));
        }
    };

    let zone_after = list_core::DropZone::after(column_id, index, id);

    let item_class = move || {
        if dnd.dragging_id_read.get() == Some(id.get()) {
            "list-item dragging"
        } else {
            "list-item"
        }
    };

    view! {
        <div
            class=item_class
            data-id=id.to_string()
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dblclick=on_dblclick
        >
            <div class="list-item-row">
                <div
                    class="list-item-input"
                    contenteditable="true"
                    node_ref=input_ref
                    on:blur=on_blur
                    // Dropping onto the text would paste the payload into it
                    on:drop=move |ev: DragEvent| ev.prevent_default()
                >
                    {item.content}
                </div>
                <Show when=asking>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button
                            class="confirm-btn"
                            type="button"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                answer(true);
                            }
                        >
                            "✓"
                        </button>
                        <button
                            class="cancel-btn"
                            type="button"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                answer(false);
                            }
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
            <DropZone zone=zone_after />
        </div>
    }
}
