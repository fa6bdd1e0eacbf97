pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_laboratory_table;
mod m20260810_000002_create_student_table;
mod m20260810_000003_create_teacher_table;
mod m20260810_000004_create_equipment_table;
mod m20260811_000005_create_time_window_table;
mod m20260811_000006_create_reservation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_laboratory_table::Migration),
            Box::new(m20260810_000002_create_student_table::Migration),
            Box::new(m20260810_000003_create_teacher_table::Migration),
            Box::new(m20260810_000004_create_equipment_table::Migration),
            Box::new(m20260811_000005_create_time_window_table::Migration),
            Box::new(m20260811_000006_create_reservation_table::Migration),
        ]
    }
}
