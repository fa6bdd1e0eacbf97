use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_laboratory_table::Laboratory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string(Equipment::Name))
                    .col(string_null(Equipment::Model))
                    .col(integer_null(Equipment::LabId))
                    .col(integer(Equipment::Category))
                    .col(integer(Equipment::Status))
                    .col(text_null(Equipment::Description))
                    .col(timestamp_null(Equipment::NextAvailableAt))
                    .col(
                        timestamp(Equipment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Equipment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_lab_id")
                            .from(Equipment::Table, Equipment::LabId)
                            .to(Laboratory::Table, Laboratory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_equipment_lab_id")
                    .table(Equipment::Table)
                    .col(Equipment::LabId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    Name,
    Model,
    LabId,
    Category,
    Status,
    Description,
    NextAvailableAt,
    CreatedAt,
    UpdatedAt,
}
