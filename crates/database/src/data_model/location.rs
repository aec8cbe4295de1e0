use model::location::{Location, LocationResponse};
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

/// A named point of an organisation.
/// Table: locations
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: i32,
    pub organisation_id: i32,
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl DatabaseRow for LocationRow {
    type Model = Location;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        Location {
            organisation_id: Id::new(self.organisation_id),
            location_name: self.location_name,
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}

/// The columns selected when listing the locations of an organisation.
#[derive(Debug, Clone, FromRow)]
pub struct LocationResponseRow {
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<LocationResponseRow> for LocationResponse {
    fn from(row: LocationResponseRow) -> Self {
        Self {
            location_name: row.location_name,
            longitude: row.longitude,
            latitude: row.latitude,
        }
    }
}
