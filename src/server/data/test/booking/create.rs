use super::*;

/// Tests inserting a booking.
///
/// Verifies the booking starts unconfirmed regardless of the caller.
///
/// Expected: Ok(Booking) with `booking_status == false`
#[tokio::test]
async fn creates_unconfirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Booking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let booking = repo.create(booking_param()).await?;

    assert!(!booking.booking_status);
    assert_eq!(booking.room_number, 12);
    assert_eq!(booking.hotel_name, "Hotel California");

    Ok(())
}

/// Tests that identical bookings are all stored.
///
/// Expected: two rows with distinct ids
#[tokio::test]
async fn stores_identical_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Booking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let first = repo.create(booking_param()).await?;
    let second = repo.create(booking_param()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
