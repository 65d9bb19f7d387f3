//! Admin factory for creating test administrator accounts.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admins with customizable fields.
///
/// The stored password is written verbatim, pass an already hashed value when the
/// test authenticates through the service layer.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin::AdminFactory;
///
/// let admin = AdminFactory::new(&db)
///     .email("root@example.com")
///     .first_name("Jane")
///     .build()
///     .await?;
/// ```
pub struct AdminFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

impl<'a> AdminFactory<'a> {
    /// Creates a new AdminFactory with default values.
    ///
    /// Defaults:
    /// - email: `"admin{id}@example.com"` where id is auto-incremented
    /// - password: `"password-hash"`
    /// - first_name: `"Admin"`
    /// - last_name: `"{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("admin{}@example.com", id),
            password: "password-hash".to_string(),
            first_name: "Admin".to_string(),
            last_name: id.to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the admin entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin::Model)` - Created admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
///
/// Shorthand for `AdminFactory::new(db).build().await`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin::Model, DbErr> {
    AdminFactory::new(db).build().await
}
