use model::organisation::Organisation;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// Table: organisations
#[derive(Debug, Clone, FromRow)]
pub struct OrganisationRow {
    pub id: i32,
    pub name: String,
}

impl DatabaseRow for OrganisationRow {
    type Model = Organisation;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Organisation { name: self.name }
    }
}
