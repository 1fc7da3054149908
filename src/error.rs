use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Booking not found: {0}")]
    BookingNotFound(String),
    #[error("Insufficient seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: i64, available: i64 },
    #[error("Invalid input: {0}")]
    Validation(String),
}
