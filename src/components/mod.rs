//! UI Components
//!
//! Reusable Leptos components.

mod drop_zone;
mod list_column;
mod list_item;

pub use drop_zone::DropZone;
pub use list_column::ListColumn;
pub use list_item::ListItem;
