use super::*;
use crate::server::{
    model::{credentials::CredentialsParam, user::CreateUserParam},
    service::user::{
        UserService, INCORRECT_PASSWORD, USER_CREATED, USER_DELETED, USER_EXISTS,
        USER_ID_TAKEN, USER_NOT_FOUND, USER_VERIFIED,
    },
};

fn registration(email: &str, password: &str) -> CreateUserParam {
    CreateUserParam {
        id: None,
        email: email.to_string(),
        password: password.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}

fn credentials(email: &str, password: &str) -> CredentialsParam {
    CredentialsParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests registering a new user.
///
/// Verifies the envelope carries the new id and the stored password is a hash.
///
/// Expected: status true, "User created successfully!"
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = PasswordService::insecure_for_tests();

    let service = UserService::new(db, &passwords);
    let envelope = service
        .create(registration("jane@example.com", "hunter2"))
        .await?;

    assert!(envelope.status);
    assert_eq!(envelope.message.as_deref(), Some(USER_CREATED));

    let id = envelope.id.unwrap();
    let user = service.get_by_id(id).await?.result.unwrap();
    assert_ne!(user.password, "hunter2");
    assert!(user.password.starts_with("$argon2id$"));

    Ok(())
}

/// Tests registering the same email twice.
///
/// Expected: second call returns status false, "User already exists!", one stored user
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = PasswordService::insecure_for_tests();

    let service = UserService::new(db, &passwords);
    service
        .create(registration("jane@example.com", "hunter2"))
        .await?;
    let envelope = service
        .create(registration("jane@example.com", "other"))
        .await?;

    assert!(!envelope.status);
    assert_eq!(envelope.message.as_deref(), Some(USER_EXISTS));
    assert!(envelope.id.is_none());
    assert_eq!(service.get_all().await?.result.unwrap().len(), 1);

    Ok(())
}

/// Tests the three authentication outcomes.
///
/// Expected: verified for the right password, "Incorrect Password!" for a wrong one,
/// "User not found!" for an unknown email
#[tokio::test]
async fn authenticates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = PasswordService::insecure_for_tests();

    let service = UserService::new(db, &passwords);
    service
        .create(registration("jane@example.com", "hunter2"))
        .await?;

    let ok = service
        .authenticate(credentials("jane@example.com", "hunter2"))
        .await?;
    assert!(ok.status);
    assert_eq!(ok.message.as_deref(), Some(USER_VERIFIED));

    let wrong = service
        .authenticate(credentials("jane@example.com", "hunter3"))
        .await?;
    assert!(!wrong.status);
    assert_eq!(wrong.message.as_deref(), Some(INCORRECT_PASSWORD));

    let unknown = service
        .authenticate(credentials("nobody@example.com", "hunter2"))
        .await?;
    assert!(!unknown.status);
    assert_eq!(unknown.message.as_deref(), Some(USER_NOT_FOUND));

    Ok(())
}

/// Tests looking up a deleted user.
///
/// Expected: delete succeeds, then get returns status false with "User not found!"
#[tokio::test]
async fn reports_deleted_user_as_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = PasswordService::insecure_for_tests();

    let service = UserService::new(db, &passwords);
    let id = service
        .create(registration("jane@example.com", "hunter2"))
        .await?
        .id
        .unwrap();

    let deleted = service.delete(id).await?;
    assert!(deleted.status);
    assert_eq!(deleted.message.as_deref(), Some(USER_DELETED));

    let lookup = service.get_by_id(id).await?;
    assert!(!lookup.status);
    assert!(lookup.result.is_none());
    assert_eq!(lookup.message.as_deref(), Some(USER_NOT_FOUND));

    Ok(())
}

/// Tests registering a new email under a user id that is already in use.
///
/// Expected: the supplied id is kept on first registration, the second answers
/// "User id is already taken!"
#[tokio::test]
async fn rejects_taken_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let passwords = PasswordService::insecure_for_tests();

    let service = UserService::new(db, &passwords);

    let created = service
        .create(CreateUserParam {
            id: Some(33000),
            ..registration("jane@example.com", "hunter2")
        })
        .await?;
    assert_eq!(created.id, Some(33000));

    let clash = service
        .create(CreateUserParam {
            id: Some(33000),
            ..registration("john@example.com", "hunter2")
        })
        .await?;
    assert!(!clash.status);
    assert_eq!(clash.message.as_deref(), Some(USER_ID_TAKEN));

    Ok(())
}
