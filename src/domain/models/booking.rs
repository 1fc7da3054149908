use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named party's claim on a number of seats for one event. The booker name
/// is the lookup key for cancellation and is not guaranteed unique; where
/// several bookings share (event_id, name), the lowest id wins.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub seats_booked: i64,
    pub created_at: DateTime<Utc>,
}
