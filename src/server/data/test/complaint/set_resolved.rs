use super::*;

/// Tests marking a complaint as resolved.
///
/// Expected: Ok(1) and the stored flag becomes true
#[tokio::test]
async fn resolves_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Complaint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db).await?;

    let repo = ComplaintRepository::new(db);
    let rows = repo.set_resolved(complaint.id, true).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(complaint.id).await?.unwrap().resolved);

    Ok(())
}
