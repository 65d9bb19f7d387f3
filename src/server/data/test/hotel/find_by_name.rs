use super::*;

/// Tests finding a hotel by its exact name.
///
/// Expected: Ok(Some(Hotel)) for the stored name, Ok(None) otherwise
#[tokio::test]
async fn finds_hotel_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Grand Budapest")
        .build()
        .await?;

    let repo = HotelRepository::new(db);

    assert_eq!(
        repo.find_by_name("Grand Budapest").await?.map(|h| h.id),
        Some(hotel.id)
    );
    assert!(repo.find_by_name("Grand Budapest Hotel").await?.is_none());

    Ok(())
}
