//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};
use list_core::{BoardConfig, DomainResult, DropOutcome, DropZone, ItemId, ReorderSession};

use crate::storage::{board_api, BoardApi};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the board from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the board from storage - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last failed operation, shown until dismissed
    pub last_error: RwSignal<Option<String>>,
    /// Visual drag state
    pub dnd: DndSignals,
    /// Protocol drag state
    session: StoredValue<ReorderSession>,
    config: StoredValue<BoardConfig>,
}

impl AppContext {
    pub fn new(config: BoardConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            last_error: RwSignal::new(None),
            dnd: create_dnd_signals(),
            session: StoredValue::new(ReorderSession::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> BoardApi {
        board_api(self.config())
    }

    /// Trigger a reload of the board
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn report(&self, action: &str, message: String) {
        log::error!("{} failed: {}", action, message);
        self.last_error.set(Some(format!("{} failed: {}", action, message)));
    }

    /// Run one ListApi call, then reload; errors are reported, not raised
    pub fn mutate<T>(
        &self,
        action: &str,
        op: impl FnOnce(&mut BoardApi) -> DomainResult<T>,
    ) -> Option<T> {
        let mut api = self.api();
        let result = op(&mut api);
        self.reload();
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(action, e.to_string());
                None
            }
        }
    }

    pub fn begin_drag(&self, item_id: ItemId) {
        self.session.update_value(|session| session.drag_start(item_id));
    }

    pub fn hover_zone(&self, zone: DropZone) {
        self.session.update_value(|session| session.drag_over(zone));
    }

    pub fn leave_zone(&self, zone: DropZone) {
        self.session.update_value(|session| session.drag_leave(zone));
    }

    pub fn cancel_drag(&self) {
        self.session.update_value(|session| session.cancel());
    }

    /// Resolve a drop of the payload item on `zone`
    pub fn drop_on(&self, dragged: ItemId, zone: DropZone) {
        let mut api = self.api();
        let outcome = self.session.try_update_value(|session| {
            // The payload is authoritative, e.g. for drags started in another tab
            if session.dragged() != Some(dragged) {
                session.drag_start(dragged);
            }
            session.drop(zone, &mut api)
        });

        match outcome {
            Some(Ok(DropOutcome::Moved { item_id, column_id, position })) => {
                log::info!("moved item {} to column {} at {}", item_id, column_id, position);
                self.reload();
            }
            Some(Ok(DropOutcome::Ignored(reason))) => {
                log::debug!("drop of {} ignored: {:?}", dragged, reason);
            }
            Some(Err(e)) => {
                self.report("move item", e.to_string());
                self.reload();
            }
            None => {}
        }
    }
}
