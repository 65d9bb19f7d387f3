use super::*;

/// Tests overwriting a subset of hotel fields.
///
/// Verifies that only the provided fields change and the rest are kept.
///
/// Expected: Ok(Some(Hotel)) with the new values applied
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Hotel California")
        .city("Los Angeles")
        .rating(4.0)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let updated = repo
        .update(
            hotel.id,
            UpdateHotelParam {
                rating: Some(4.8),
                number_of_available_rooms: Some(3),
                ..Default::default()
            },
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.rating, 4.8);
    assert_eq!(updated.number_of_available_rooms, 3);
    assert_eq!(updated.name, "Hotel California");
    assert_eq!(updated.city, "Los Angeles");

    let stored = repo.find_by_id(hotel.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating with no fields.
///
/// Expected: Ok(Some(Hotel)) identical to the stored hotel
#[tokio::test]
async fn returns_hotel_unchanged_for_empty_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    let updated = repo.update(hotel.id, UpdateHotelParam::default()).await?;

    assert_eq!(updated.map(|h| h.name), Some(hotel.name));

    Ok(())
}

/// Tests updating a hotel that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db)
        .update(
            999,
            UpdateHotelParam {
                name: Some("Nowhere Inn".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests deleting a hotel after an update.
///
/// Expected: the hotel is gone from the list
#[tokio::test]
async fn deletes_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let other = factory::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    repo.delete(hotel.id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}
