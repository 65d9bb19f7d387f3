use super::*;
use crate::server::util::db::is_unique_violation;

/// Tests inserting a hotel.
///
/// Expected: Ok(Hotel) with every field persisted
#[tokio::test]
async fn creates_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let created = repo.create(hotel_param("Hotel California")).await?;

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored, created);
    assert_eq!(stored.name, "Hotel California");
    assert_eq!(stored.number_of_rooms, 120);
    assert_eq!(stored.number_of_available_rooms, 45);
    assert_eq!(stored.rating, 4.5);

    Ok(())
}

/// Tests that hotel names are unique at the storage level.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    repo.create(hotel_param("Hotel California")).await?;

    let result = repo.create(hotel_param("Hotel California")).await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
