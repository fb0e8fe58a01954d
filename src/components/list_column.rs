//! List Column Component
//!
//! Column title, its items with drop zones, and the add button.

use leptos::prelude::*;
use list_core::ColumnDef;

use crate::components::{DropZone, ListItem};
use crate::context::AppContext;
use crate::store::{store_column_items, use_board_store};

#[component]
pub fn ListColumn(column: ColumnDef) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();
    let column_id = column.id;

    let top_zone = list_core::DropZone::top(column_id);
    let items = move || store_column_items(&store, column_id);

    let on_add = move |_| {
        if let Some(item) = ctx.mutate("add item", |api| api.insert_item(column_id, "")) {
            log::debug!("added item {} to column {}", item.id, column_id);
        }
    };

    view! {
        <div class="list-column" data-id=column_id.to_string()>
            <div class="list-column-title">{column.title}</div>
            <div class="list-column-items">
                <DropZone zone=top_zone />
                <For
                    each=move || items().into_iter().enumerate()
                    // Zones are indexed by position, so a moved item re-renders
                    key=|(index, item)| (*index, item.id, item.content.clone())
                    children=move |(index, item)| {
                        view! { <ListItem item=item column_id=column_id index=index /> }
                    }
                />
            </div>
            <button class="list-add-item" type="button" on:click=on_add>"+ Add"</button>
        </div>
    }
}
