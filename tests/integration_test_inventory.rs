mod common;

use common::TestApp;
use event_booking_core::error::AppError;

// End-to-end walk through the booking lifecycle: the remaining availability
// must track capacity minus the sum of active bookings at every step.
#[tokio::test]
async fn test_concert_booking_scenario() {
    let app = TestApp::new().await;
    let inventory = &app.state.inventory;

    let event = inventory
        .add_event("Concert", "2025-01-01", 100)
        .await
        .unwrap();

    inventory.book_seats(event.id, "Alice", 30).await.unwrap();
    let after_alice = inventory.get_event(event.id).await.unwrap();
    assert_eq!(after_alice.seats_available, 70);
    assert_eq!(inventory.list_bookings(event.id).await.unwrap().len(), 1);

    let err = inventory
        .book_seats(event.id, "Bob", 80)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InsufficientSeats { .. }));
    let after_bob = inventory.get_event(event.id).await.unwrap();
    assert_eq!(after_bob.seats_available, 70);

    inventory.cancel_booking(event.id, "Alice").await.unwrap();
    let after_cancel = inventory.get_event(event.id).await.unwrap();
    assert_eq!(after_cancel.seats_available, 100);
    assert!(inventory.list_bookings(event.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seat_invariant_across_mixed_operations() {
    let app = TestApp::new().await;
    let inventory = &app.state.inventory;

    let event = inventory
        .add_event("Workshop", "2025-06-15", 40)
        .await
        .unwrap();

    inventory.book_seats(event.id, "Alice", 5).await.unwrap();
    inventory.book_seats(event.id, "Bob", 15).await.unwrap();
    inventory.cancel_booking(event.id, "Alice").await.unwrap();
    inventory.book_seats(event.id, "Carol", 10).await.unwrap();

    let fetched = inventory.get_event(event.id).await.unwrap();
    let bookings = inventory.list_bookings(event.id).await.unwrap();
    let booked: i64 = bookings.iter().map(|b| b.seats_booked).sum();

    assert_eq!(booked, 25);
    assert_eq!(fetched.seats_available, 40 - booked);
}

#[tokio::test]
async fn test_inventory_is_per_event() {
    let app = TestApp::new().await;
    let inventory = &app.state.inventory;

    let concert = inventory
        .add_event("Concert", "2025-01-01", 100)
        .await
        .unwrap();
    let theatre = inventory
        .add_event("Theatre", "2025-02-01", 50)
        .await
        .unwrap();

    inventory.book_seats(concert.id, "Alice", 60).await.unwrap();

    let untouched = inventory.get_event(theatre.id).await.unwrap();
    assert_eq!(untouched.seats_available, 50);

    // Alice holds no booking on the theatre event.
    let err = inventory
        .cancel_booking(theatre.id, "Alice")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BookingNotFound(_)));
}

#[tokio::test]
async fn test_seat_override_is_not_reconciled_with_bookings() {
    let app = TestApp::new().await;
    let inventory = &app.state.inventory;

    let event = inventory
        .add_event("Concert", "2025-01-01", 100)
        .await
        .unwrap();
    inventory.book_seats(event.id, "Alice", 30).await.unwrap();

    // Administrative override wins over the derived value.
    inventory.update_event_seats(event.id, 5).await.unwrap();
    let fetched = inventory.get_event(event.id).await.unwrap();
    assert_eq!(fetched.seats_available, 5);

    // Subsequent bookings run against the overridden figure.
    let err = inventory
        .book_seats(event.id, "Bob", 6)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InsufficientSeats { .. }));
    inventory.book_seats(event.id, "Bob", 5).await.unwrap();
}
