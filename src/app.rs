//! List Board Frontend App
//!
//! Fixed columns side by side, reloaded from storage after every mutation.

use leptos::prelude::*;
use list_core::{BoardConfig, Column};
use reactive_stores::Store;

use crate::components::ListColumn;
use crate::context::AppContext;
use crate::store::{store_set_columns, BoardState, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();
    let store: BoardStore = Store::new(BoardState::default());
    let ctx = AppContext::new(config.clone());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the board when the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let api = ctx.api();
        let loaded: Result<Vec<Column>, _> = ctx
            .config()
            .columns
            .iter()
            .map(|def| {
                api.get_items(def.id).map(|items| Column { id: def.id, items })
            })
            .collect();
        match loaded {
            Ok(columns) => {
                log::debug!("[APP] reload {} loaded {} columns", trigger, columns.len());
                store_set_columns(&store, columns);
            }
            Err(e) => ctx.report("load board", e.to_string()),
        }
    });

    view! {
        <div class="list">
            {config
                .columns
                .into_iter()
                .map(|column| view! { <ListColumn column=column /> })
                .collect_view()}
        </div>
        <Show when=move || ctx.last_error.get().is_some()>
            <div class="list-error" on:click=move |_| ctx.last_error.set(None)>
                {move || ctx.last_error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
