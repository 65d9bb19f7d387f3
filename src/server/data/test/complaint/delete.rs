use super::*;

/// Tests deleting a resolved complaint.
///
/// Expected: the complaint can no longer be found
#[tokio::test]
async fn deletes_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Complaint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::complaint::ComplaintFactory::new(db)
        .resolved(true)
        .build()
        .await?;

    let repo = ComplaintRepository::new(db);
    repo.delete(complaint.id).await?;

    assert!(repo.find_by_id(complaint.id).await?.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a complaint id that was never stored.
///
/// Expected: Ok and the existing complaint is untouched
#[tokio::test]
async fn deletes_unknown_complaint_without_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Complaint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let complaint = factory::create_complaint(db).await?;

    let repo = ComplaintRepository::new(db);
    repo.delete(complaint.id + 1).await?;

    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
