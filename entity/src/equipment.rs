use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub lab_id: Option<i32>,
    pub category: EquipmentCategory,
    pub status: EquipmentStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub next_available_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Scope of the device: owned by the whole institution or by one laboratory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum EquipmentCategory {
    #[sea_orm(num_value = 1)]
    Institution,
    #[sea_orm(num_value = 2)]
    Laboratory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum EquipmentStatus {
    #[sea_orm(num_value = 0)]
    Disabled,
    #[sea_orm(num_value = 1)]
    Available,
    #[sea_orm(num_value = 2)]
    InUse,
    #[sea_orm(num_value = 3)]
    Maintenance,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::laboratory::Entity",
        from = "Column::LabId",
        to = "super::laboratory::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Laboratory,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
    #[sea_orm(has_many = "super::time_window::Entity")]
    TimeWindow,
}

impl Related<super::laboratory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laboratory.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::time_window::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeWindow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
