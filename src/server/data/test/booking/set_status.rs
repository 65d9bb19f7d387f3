use super::*;

/// Tests confirming a booking.
///
/// Expected: Ok(1) and the stored flag becomes true
#[tokio::test]
async fn confirms_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Booking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::create_booking(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.set_status(booking.id, true).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(booking.id).await?.unwrap().booking_status);

    Ok(())
}

/// Tests confirming an already confirmed booking.
///
/// Expected: the flag stays true
#[tokio::test]
async fn keeps_confirmed_booking_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Booking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booking = factory::booking::BookingFactory::new(db)
        .confirmed(true)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    repo.set_status(booking.id, true).await?;

    assert!(repo.find_by_id(booking.id).await?.unwrap().booking_status);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn matches_no_rows_for_unknown_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Booking)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = BookingRepository::new(db).set_status(999, true).await?;

    assert_eq!(rows, 0);

    Ok(())
}
