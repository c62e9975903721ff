//! Migration to create responses table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Responses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Responses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Responses::Knowledge).integer().not_null())
                    .col(ColumnDef::new(Responses::Awareness).integer().not_null())
                    .col(ColumnDef::new(Responses::Practice).integer().not_null())
                    .col(
                        ColumnDef::new(Responses::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Responses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Responses {
    Table,
    Id,
    Knowledge,
    Awareness,
    Practice,
    SubmittedAt,
}
