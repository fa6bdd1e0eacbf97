//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    student_no: String,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - student_no: `"S{id:06}"` (unique per factory call)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            student_no: format!("S{:06}", id),
        }
    }

    /// Sets the student display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the student number.
    pub fn student_no(mut self, student_no: impl Into<String>) -> Self {
        self.student_no = student_no.into();
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            student_no: ActiveValue::Set(self.student_no),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
