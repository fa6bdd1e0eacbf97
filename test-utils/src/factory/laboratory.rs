//! Laboratory factory for creating test laboratory entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test laboratories with customizable fields.
pub struct LaboratoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    contact: Option<String>,
}

impl<'a> LaboratoryFactory<'a> {
    /// Creates a new LaboratoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lab {id}"` where id is auto-incremented
    /// - location: `Some("Science Building")`
    /// - contact: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lab {}", id),
            location: Some("Science Building".to_string()),
            contact: None,
        }
    }

    /// Sets the laboratory name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the laboratory location.
    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets the laboratory contact.
    pub fn contact(mut self, contact: Option<String>) -> Self {
        self.contact = contact;
        self
    }

    /// Builds and inserts the laboratory entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::laboratory::Model)` - Created laboratory entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::laboratory::Model, DbErr> {
        entity::laboratory::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            contact: ActiveValue::Set(self.contact),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a laboratory with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::laboratory::Model)` - Created laboratory entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_laboratory(db: &DatabaseConnection) -> Result<entity::laboratory::Model, DbErr> {
    LaboratoryFactory::new(db).build().await
}
