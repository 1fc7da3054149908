use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{BookingRepository, EventRepository};
use crate::domain::services::inventory::InventoryService;

/// Owned by the embedding presentation layer, constructed once via
/// `infra::factory::bootstrap_state` and passed wherever the core is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub inventory: Arc<InventoryService>,
}
