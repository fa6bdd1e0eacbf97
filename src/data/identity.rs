use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::model::reservation::{Requester, Role};

/// Repository resolving requesters to their display names.
///
/// Students and teachers live in separate tables; this is the single place
/// that knows which table a role maps to.
pub struct IdentityRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IdentityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a requester to the display name stored in their role's table
    ///
    /// Admins are not backed by a table here and always resolve to `None`;
    /// callers reject admin requesters before asking for a name.
    ///
    /// # Arguments
    /// - `requester`: The acting user
    ///
    /// # Returns
    /// - `Ok(Some(name))`: Display name of the requester
    /// - `Ok(None)`: No record for this requester
    /// - `Err(DbErr)`: Database error
    pub async fn resolve_name(&self, requester: Requester) -> Result<Option<String>, DbErr> {
        match requester.role {
            Role::Student => {
                let student = entity::prelude::Student::find_by_id(requester.user_id)
                    .one(self.db)
                    .await?;
                Ok(student.map(|s| s.name))
            }
            Role::Teacher => {
                let teacher = entity::prelude::Teacher::find_by_id(requester.user_id)
                    .one(self.db)
                    .await?;
                Ok(teacher.map(|t| t.name))
            }
            Role::Admin => Ok(None),
        }
    }
}
