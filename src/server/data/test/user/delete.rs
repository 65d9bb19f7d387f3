use super::*;

/// Tests deleting a user by id.
///
/// Expected: Ok(()) and the user can no longer be found
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).delete(999).await;

    assert!(result.is_ok());

    Ok(())
}
