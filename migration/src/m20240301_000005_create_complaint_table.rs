use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(string(Complaint::Email))
                    .col(string(Complaint::Problem))
                    .col(text(Complaint::Description))
                    .col(string(Complaint::FirstName))
                    .col(string(Complaint::LastName))
                    .col(boolean(Complaint::Resolved).default(false))
                    .to_owned(),
            )
            .await?;

        // A submission is identified by who sent it and what it says
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_complaint_submission")
                    .table(Complaint::Table)
                    .col(Complaint::Email)
                    .col(Complaint::Problem)
                    .col(Complaint::Description)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    Email,
    Problem,
    Description,
    FirstName,
    LastName,
    Resolved,
}
