//! Teacher factory for creating test teacher entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    staff_no: String,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Teacher {id}"` where id is auto-incremented
    /// - staff_no: `"T{id:06}"` (unique per factory call)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Teacher {}", id),
            staff_no: format!("T{:06}", id),
        }
    }

    /// Sets the teacher display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the staff number.
    pub fn staff_no(mut self, staff_no: impl Into<String>) -> Self {
        self.staff_no = staff_no.into();
        self
    }

    /// Builds and inserts the teacher entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        entity::teacher::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            staff_no: ActiveValue::Set(self.staff_no),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::teacher::Model)` - Created teacher entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
