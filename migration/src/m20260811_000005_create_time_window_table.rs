use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000004_create_equipment_table::Equipment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeWindow::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeWindow::Id))
                    .col(integer(TimeWindow::EquipmentId))
                    .col(time(TimeWindow::StartOfDay))
                    .col(time(TimeWindow::EndOfDay))
                    .col(boolean(TimeWindow::Active).default(true))
                    .col(
                        timestamp(TimeWindow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_window_equipment_id")
                            .from(TimeWindow::Table, TimeWindow::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_time_window_equipment_id")
                    .table(TimeWindow::Table)
                    .col(TimeWindow::EquipmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeWindow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeWindow {
    Table,
    Id,
    EquipmentId,
    StartOfDay,
    EndOfDay,
    Active,
    CreatedAt,
}
