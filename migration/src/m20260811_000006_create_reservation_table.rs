use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{ConnectionTrait, DbBackend},
};

use super::{
    m20260810_000002_create_student_table::Student,
    m20260810_000003_create_teacher_table::Teacher,
    m20260810_000004_create_equipment_table::Equipment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::EquipmentId))
                    // Exactly one requester column is set; the expression covers
                    // both columns but is anchored here because SQLite only
                    // accepts CHECK constraints inside CREATE TABLE.
                    .col(integer_null(Reservation::StudentId).check(
                        Expr::col(Reservation::StudentId)
                            .is_not_null()
                            .and(Expr::col(Reservation::TeacherId).is_null())
                            .or(Expr::col(Reservation::StudentId)
                                .is_null()
                                .and(Expr::col(Reservation::TeacherId).is_not_null())),
                    ))
                    .col(integer_null(Reservation::TeacherId))
                    .col(integer(Reservation::Status).default(0))
                    .col(timestamp(Reservation::AppliedAt))
                    .col(integer_null(Reservation::ApproverId))
                    .col(timestamp_null(Reservation::ApprovedAt))
                    .col(timestamp_null(Reservation::StartAt))
                    .col(timestamp_null(Reservation::EndAt))
                    .col(decimal_len_null(Reservation::Price, 10, 2))
                    .col(text_null(Reservation::Description))
                    .col(string_len_null(Reservation::RejectReason, 500))
                    .col(string(Reservation::RequesterName))
                    .col(string(Reservation::EquipmentName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_equipment_id")
                            .from(Reservation::Table, Reservation::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_student_id")
                            .from(Reservation::Table, Reservation::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_teacher_id")
                            .from(Reservation::Table, Reservation::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_equipment_status")
                    .table(Reservation::Table)
                    .col(Reservation::EquipmentId)
                    .col(Reservation::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_student_id")
                    .table(Reservation::Table)
                    .col(Reservation::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_teacher_id")
                    .table(Reservation::Table)
                    .col(Reservation::TeacherId)
                    .to_owned(),
            )
            .await?;

        // Schema-level guard against double booking: concurrent inserts for
        // overlapping ranges on the same device must not both commit. SQLite
        // serializes writers on its own; Postgres needs the exclusion
        // constraint. Terminal statuses (2, 3) stay out of the constraint so
        // rejected or cancelled history never blocks a new request.
        if manager.get_database_backend() == DbBackend::Postgres {
            let db = manager.get_connection();
            db.execute_unprepared("CREATE EXTENSION IF NOT EXISTS btree_gist")
                .await?;
            db.execute_unprepared(
                "ALTER TABLE reservation ADD CONSTRAINT excl_reservation_overlap \
                 EXCLUDE USING gist (equipment_id WITH =, tsrange(start_at, end_at) WITH &&) \
                 WHERE (status IN (0, 1) AND start_at IS NOT NULL AND end_at IS NOT NULL)",
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    EquipmentId,
    StudentId,
    TeacherId,
    Status,
    AppliedAt,
    ApproverId,
    ApprovedAt,
    StartAt,
    EndAt,
    Price,
    Description,
    RejectReason,
    RequesterName,
    EquipmentName,
}
