//! Admin data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::admin::{Admin, CreateAdminParam};

/// Repository providing database operations for admin accounts.
pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new admin, `param.password` must already be hashed.
    pub async fn create(&self, param: CreateAdminParam) -> Result<Admin, DbErr> {
        let entity = entity::admin::ActiveModel {
            id: param.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Admin>, DbErr> {
        let entities = entity::prelude::Admin::find()
            .order_by_asc(entity::admin::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Admin::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Admin::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
