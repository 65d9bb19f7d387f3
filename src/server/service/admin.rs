//! Admin service for business logic.
//!
//! Mirrors the user service for back-office accounts, which live in their own
//! collection.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin::AdminRepository,
    error::AppError,
    model::{
        admin::{Admin, CreateAdminParam},
        credentials::CredentialsParam,
        envelope::Envelope,
    },
    service::{password::PasswordService, user::INCORRECT_PASSWORD},
    util::db::is_unique_violation,
};

pub const ADMIN_CREATED: &str = "Admin created successfully!";
pub const ADMIN_EXISTS: &str = "Admin already exists!";
pub const ADMIN_ID_TAKEN: &str = "Admin id is already taken!";
pub const ADMIN_NOT_FOUND: &str = "Admin not found!";
pub const ADMIN_VERIFIED: &str = "Admin verified successfully!";
pub const ADMIN_DELETED: &str = "Admin deleted successfully!";

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    passwords: &'a PasswordService,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection, passwords: &'a PasswordService) -> Self {
        Self { db, passwords }
    }

    /// Registers a new admin unless the email is already taken.
    ///
    /// # Returns
    /// - `Ok(Envelope)` - `status: true` with the new id, or `status: false` when the
    ///   email is already registered
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn create(&self, mut param: CreateAdminParam) -> Result<Envelope<()>, AppError> {
        let admin_repo = AdminRepository::new(self.db);

        if admin_repo.find_by_email(&param.email).await?.is_some() {
            return Ok(Envelope::failure(ADMIN_EXISTS));
        }
        if let Some(id) = param.id {
            if admin_repo.find_by_id(id).await?.is_some() {
                return Ok(Envelope::failure(ADMIN_ID_TAKEN));
            }
        }

        param.password = self.passwords.hash(&param.password)?;

        match admin_repo.create(param).await {
            Ok(admin) => {
                tracing::info!("Registered admin {}", admin.id);
                Ok(Envelope::success(ADMIN_CREATED).with_id(admin.id))
            }
            Err(err) if is_unique_violation(&err) => Ok(Envelope::failure(ADMIN_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    /// Checks an email & password pair against the stored admin account.
    pub async fn authenticate(&self, param: CredentialsParam) -> Result<Envelope<()>, AppError> {
        let admin_repo = AdminRepository::new(self.db);

        let Some(admin) = admin_repo.find_by_email(&param.email).await? else {
            return Ok(Envelope::failure(ADMIN_NOT_FOUND));
        };

        if !self.passwords.verify(&param.password, &admin.password)? {
            return Ok(Envelope::failure(INCORRECT_PASSWORD));
        }

        Ok(Envelope::success(ADMIN_VERIFIED))
    }

    pub async fn get_all(&self) -> Result<Envelope<Vec<Admin>>, AppError> {
        let admins = AdminRepository::new(self.db).get_all().await?;

        Ok(Envelope::found(admins))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Envelope<Admin>, AppError> {
        match AdminRepository::new(self.db).find_by_id(id).await? {
            Some(admin) => Ok(Envelope::found(admin)),
            None => Ok(Envelope::failure(ADMIN_NOT_FOUND)),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<Envelope<()>, AppError> {
        AdminRepository::new(self.db).delete(id).await?;

        Ok(Envelope::success(ADMIN_DELETED))
    }
}
