use super::*;
use crate::server::util::db::is_unique_violation;

/// Tests inserting a user with a database-assigned id.
///
/// Expected: Ok(User) with a positive id and the stored fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(user_param("jane@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.password, "hash");
    assert_eq!(user.first_name, "Jane");

    Ok(())
}

/// Tests inserting a user with a client-supplied id.
///
/// Expected: Ok(User) carrying the supplied id
#[tokio::test]
async fn creates_user_with_supplied_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            id: Some(42),
            ..user_param("jane@example.com")
        })
        .await?;

    assert_eq!(user.id, 42);
    assert!(repo.find_by_id(42).await?.is_some());

    Ok(())
}

/// Tests that the email column rejects a second account with the same address.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(user_param("jane@example.com")).await?;

    let result = repo.create(user_param("jane@example.com")).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
