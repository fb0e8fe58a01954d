//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos lists split into drop zones.
//! The dragged id travels in the `DataTransfer` payload as plain text;
//! signals only drive the visual state (dragging item, highlighted zone).

use leptos::prelude::*;
use web_sys::DragEvent;

/// `DataTransfer` format carrying the dragged id
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// A drop zone: `index` among the zones of list `group`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZoneKey {
    pub group: u32,
    pub index: usize,
}

impl ZoneKey {
    pub fn new(group: u32, index: usize) -> Self {
        Self { group, index }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Zone currently dragged over (highlighted)
    pub active_zone_read: ReadSignal<Option<ZoneKey>>,
    pub active_zone_write: WriteSignal<Option<ZoneKey>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (active_zone_read, active_zone_write) = signal(None::<ZoneKey>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        active_zone_read,
        active_zone_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    pub fn is_active(&self, zone: ZoneKey) -> bool {
        self.active_zone_read.get() == Some(zone)
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.active_zone_write.set(None);
}

/// Parse a payload written by `make_on_dragstart`
pub fn parse_payload(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Dragged id carried by a drag event, if any
pub fn read_payload(ev: &DragEvent) -> Option<u32> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data(PAYLOAD_FORMAT).ok())
        .and_then(|text| parse_payload(&text))
}

/// Message for a payload that could not be attached; drops then rely on the signal
fn payload_warning<E: std::fmt::Debug>(item_id: u32, written: Result<(), E>) -> Option<String> {
    written
        .err()
        .map(|e| format!("drag payload for item {} not set: {:?}", item_id, e))
}

/// Create dragstart handler for draggable items
/// Writes the id into the payload and marks the item as dragging
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let written = dt.set_data(PAYLOAD_FORMAT, &item_id.to_string());
            if let Some(warning) = payload_warning(item_id, written) {
                log::warn!("{}", warning);
            }
            dt.set_effect_allowed("move");
        }
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragend handler - fires whether or not a drop happened
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// Create dragover handler for zones
/// Prevents the default so the zone accepts drops
pub fn make_on_zone_dragover(dnd: DndSignals, zone: ZoneKey) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.active_zone_read.get_untracked() != Some(zone) {
            dnd.active_zone_write.set(Some(zone));
        }
    }
}

/// Create dragleave handler for zones
pub fn make_on_zone_dragleave(dnd: DndSignals, zone: ZoneKey) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.active_zone_read.get_untracked() == Some(zone) {
            dnd.active_zone_write.set(None);
        }
    }
}

/// Create drop handler for zones
///
/// The payload id wins over the dragging signal, which may be stale when the
/// drag started in another view.
pub fn make_on_zone_drop<F>(dnd: DndSignals, zone: ZoneKey, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(u32, ZoneKey) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let dragged = read_payload(&ev).or_else(|| dnd.dragging_id_read.get_untracked());
        end_drag(&dnd);
        if let Some(id) = dragged {
            on_drop(id, zone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload("42"), Some(42));
        assert_eq!(parse_payload(" 7\n"), Some(7));
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("item-3"), None);
    }

    #[test]
    fn test_payload_warning() {
        assert_eq!(payload_warning::<&str>(42, Ok(())), None);
        let warning = payload_warning(42, Err("denied")).unwrap();
        assert!(warning.contains("item 42"));
        assert!(warning.contains("denied"));
    }

    #[test]
    fn test_zone_key_equality() {
        assert_eq!(ZoneKey::new(1, 2), ZoneKey { group: 1, index: 2 });
        assert_ne!(ZoneKey::new(1, 2), ZoneKey::new(2, 2));
    }
}
