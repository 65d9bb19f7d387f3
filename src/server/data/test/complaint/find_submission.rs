use super::*;

/// Tests matching a stored submission on email, problem & description.
///
/// Expected: Ok(Vec) with the stored complaint
#[tokio::test]
async fn finds_matching_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Complaint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    let created = repo.create(complaint_param("Room service")).await?;

    let matches = repo
        .find_submission("jane@example.com", "Room service", "Breakfast arrived cold")
        .await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, created.id);
    assert!(!matches[0].resolved);

    Ok(())
}

/// Tests that a submission differing in one field does not match.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn ignores_partial_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Complaint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ComplaintRepository::new(db);
    repo.create(complaint_param("Room service")).await?;

    let matches = repo
        .find_submission("jane@example.com", "Noise", "Breakfast arrived cold")
        .await?;
    assert!(matches.is_empty());

    let matches = repo
        .find_submission("john@example.com", "Room service", "Breakfast arrived cold")
        .await?;
    assert!(matches.is_empty());

    Ok(())
}
