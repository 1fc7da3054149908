use std::sync::Arc;

use crate::domain::models::{booking::Booking, event::Event};
use crate::domain::ports::{BookingRepository, EventRepository};
use crate::error::AppError;
use tracing::{info, warn};

/// The inventory manager: the only place seat-count invariants are enforced.
/// Every mutation keeps `seats_available` equal to the event's capacity minus
/// the sum of its active bookings, and never lets it go negative.
pub struct InventoryService {
    event_repo: Arc<dyn EventRepository>,
    booking_repo: Arc<dyn BookingRepository>,
}

impl InventoryService {
    pub fn new(event_repo: Arc<dyn EventRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        Self {
            event_repo,
            booking_repo,
        }
    }

    pub async fn add_event(&self, name: &str, date: &str, seats: i64) -> Result<Event, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Event name must not be empty".into()));
        }
        if date.trim().is_empty() {
            return Err(AppError::Validation("Event date must not be empty".into()));
        }
        if seats < 0 {
            return Err(AppError::Validation(
                "Seat count must be a non-negative integer".into(),
            ));
        }

        let event = self.event_repo.create(name, date, seats).await?;
        info!("Event created: {} ({} seats)", event.id, event.seats_available);
        Ok(event)
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        self.event_repo.list().await
    }

    pub async fn get_event(&self, event_id: i64) -> Result<Event, AppError> {
        self.event_repo
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))
    }

    /// Administrative override of the remaining seat count. Not reconciled
    /// against existing bookings, so it can desynchronize availability from
    /// capacity-minus-bookings.
    pub async fn update_event_seats(&self, event_id: i64, seats: i64) -> Result<Event, AppError> {
        if seats < 0 {
            return Err(AppError::Validation(
                "Seat count must be a non-negative integer".into(),
            ));
        }

        let event = self.event_repo.set_seats(event_id, seats).await?;
        info!("Event {} seats overridden to {}", event.id, event.seats_available);
        Ok(event)
    }

    pub async fn delete_event(&self, event_id: i64) -> Result<(), AppError> {
        self.event_repo.delete(event_id).await?;
        info!("Event deleted: {}", event_id);
        Ok(())
    }

    pub async fn book_seats(
        &self,
        event_id: i64,
        booker_name: &str,
        seats: i64,
    ) -> Result<Booking, AppError> {
        self.get_event(event_id).await?;

        if booker_name.trim().is_empty() {
            return Err(AppError::Validation("Booker name must not be empty".into()));
        }
        if seats <= 0 {
            return Err(AppError::Validation(
                "Seat count must be a positive integer".into(),
            ));
        }

        let booking = match self
            .booking_repo
            .create_reserving_seats(event_id, booker_name, seats)
            .await
        {
            Ok(booking) => booking,
            Err(err @ AppError::InsufficientSeats { .. }) => {
                warn!("Booking rejected on event {}: {}", event_id, err);
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        info!(
            "Booked {} seats on event {} for {}",
            booking.seats_booked, event_id, booker_name
        );
        Ok(booking)
    }

    pub async fn cancel_booking(&self, event_id: i64, booker_name: &str) -> Result<(), AppError> {
        self.get_event(event_id).await?;

        if booker_name.trim().is_empty() {
            return Err(AppError::Validation("Booker name must not be empty".into()));
        }

        let removed = self
            .booking_repo
            .delete_restoring_seats(event_id, booker_name)
            .await?;

        info!(
            "Cancelled booking {} on event {}, {} seats restored",
            removed.id, event_id, removed.seats_booked
        );
        Ok(())
    }

    pub async fn list_bookings(&self, event_id: i64) -> Result<Vec<Booking>, AppError> {
        self.get_event(event_id).await?;
        self.booking_repo.list_by_event(event_id).await
    }
}
