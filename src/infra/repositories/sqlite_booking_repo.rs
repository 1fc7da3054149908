use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_reserving_seats(
        &self,
        event_id: i64,
        name: &str,
        seats: i64,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Guarded debit: only succeeds while the event still covers the request.
        let debited = sqlx::query(
            "UPDATE events SET seats_available = seats_available - ?
             WHERE id = ? AND seats_available >= ?",
        )
        .bind(seats)
        .bind(event_id)
        .bind(seats)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if debited.rows_affected() == 0 {
            let row = sqlx::query("SELECT seats_available FROM events WHERE id = ?")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;

            return match row {
                Some(row) => Err(AppError::InsufficientSeats {
                    requested: seats,
                    available: row.get::<i64, _>("seats_available"),
                }),
                None => Err(AppError::NotFound("Event not found".into())),
            };
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (event_id, name, seats_booked, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(event_id)
        .bind(name)
        .bind(seats)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_event_and_name(
        &self,
        event_id: i64,
        name: &str,
    ) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = ? AND name = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(event_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: i64) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE event_id = ? ORDER BY id ASC")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_restoring_seats(
        &self,
        event_id: i64,
        name: &str,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = ? AND name = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(event_id)
        .bind(name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::BookingNotFound("No booking for this event and name".into()))?;

        sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(booking.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("UPDATE events SET seats_available = seats_available + ? WHERE id = ?")
            .bind(booking.seats_booked)
            .bind(booking.event_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(booking)
    }
}
