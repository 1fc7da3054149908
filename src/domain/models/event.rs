use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bookable occasion. `seats_available` is the remaining inventory at this
/// moment, not the original capacity; it is debited and credited by the
/// inventory service as bookings come and go.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Free text, stored as entered.
    pub date: String,
    pub seats_available: i64,
    pub created_at: DateTime<Utc>,
}
