use crate::server::{data::admin::AdminRepository, model::admin::CreateAdminParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn admin_param(email: &str) -> CreateAdminParam {
    CreateAdminParam {
        id: None,
        email: email.to_string(),
        password: "hash".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Admin".to_string(),
    }
}

/// Tests inserting an admin and finding it again by email.
///
/// Expected: Ok(Some(Admin)) matching the created record
#[tokio::test]
async fn creates_and_finds_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    let created = repo.create(admin_param("root@example.com")).await?;

    let found = repo.find_by_email("root@example.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.first_name, "Ada");

    Ok(())
}

/// Tests that admins and users are separate collections.
///
/// Expected: a user email is not visible through the admin repository
#[tokio::test]
async fn does_not_see_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = AdminRepository::new(db);

    assert!(repo.find_by_email("shared@example.com").await?.is_none());
    assert!(repo.create(admin_param("shared@example.com")).await.is_ok());

    Ok(())
}

/// Tests listing and deleting admins.
///
/// Expected: the deleted admin disappears from the list
#[tokio::test]
async fn lists_and_deletes_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_admin(db).await?;
    let second = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    assert_eq!(repo.get_all().await?.len(), 2);

    repo.delete(first.id).await?;

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
    assert!(repo.find_by_id(first.id).await?.is_none());

    Ok(())
}
