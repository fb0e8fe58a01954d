//! Drop Zone Component
//!
//! A horizontal line drop zone above the first item or after an item.

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_zone_dragleave, make_on_zone_dragover, make_on_zone_drop, ZoneKey,
};
use list_core::ItemId;
use web_sys::DragEvent;

use crate::context::AppContext;

/// Drop zone component shown between items to indicate drop position
#[component]
pub fn DropZone(
    /// Column, zone index and owning item
    zone: list_core::DropZone,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = ctx.dnd;
    let key = ZoneKey::new(zone.column_id.get(), zone.index);

    let mark_over = make_on_zone_dragover(dnd, key);
    let on_dragover = move |ev: DragEvent| {
        mark_over(ev);
        ctx.hover_zone(zone);
    };

    let unmark = make_on_zone_dragleave(dnd, key);
    let on_dragleave = move |ev: DragEvent| {
        unmark(ev);
        ctx.leave_zone(zone);
    };

    let on_drop = make_on_zone_drop(dnd, key, move |dragged, _| {
        ctx.drop_on(ItemId::new(dragged), zone);
    });

    let zone_class = move || {
        let mut c = String::from("list-dropzone");
        if dnd.is_dragging() { c.push_str(" list-dropzone--visible"); }
        if dnd.is_active(key) { c.push_str(" list-dropzone--active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        />
    }
}
