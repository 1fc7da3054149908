use crate::domain::models::{booking::Booking, event::Event};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, name: &str, date: &str, seats_available: i64) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn set_seats(&self, id: i64, seats_available: i64) -> Result<Event, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a booking and debits the event's availability in one
    /// transaction. Fails with `InsufficientSeats` without touching either
    /// table when the event cannot cover the request.
    async fn create_reserving_seats(
        &self,
        event_id: i64,
        name: &str,
        seats: i64,
    ) -> Result<Booking, AppError>;
    async fn find_by_event_and_name(
        &self,
        event_id: i64,
        name: &str,
    ) -> Result<Option<Booking>, AppError>;
    async fn list_by_event(&self, event_id: i64) -> Result<Vec<Booking>, AppError>;
    /// Deletes the first booking matching (event_id, name) and credits the
    /// event's availability in one transaction. Returns the removed booking.
    async fn delete_restoring_seats(&self, event_id: i64, name: &str)
    -> Result<Booking, AppError>;
}
