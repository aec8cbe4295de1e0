use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{organisation::Organisation, ExampleData};

/// A named geographic point which belongs to exactly one organisation.
///
/// Coordinates are stored as given, they are not checked against the valid
/// longitude and latitude ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub organisation_id: Id<Organisation>,
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl HasId for Location {
    type IdType = i32;
}

impl ExampleData for Location {
    fn example_data() -> Self {
        Self {
            organisation_id: Id::new(1),
            location_name: "HQ".to_owned(),
            longitude: 10.0,
            latitude: 20.0,
        }
    }
}

/// Request body for creating a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreateLocation {
    pub organisation_id: Id<Organisation>,
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<CreateLocation> for Location {
    fn from(value: CreateLocation) -> Self {
        Self {
            organisation_id: value.organisation_id,
            location_name: value.location_name,
            longitude: value.longitude,
            latitude: value.latitude,
        }
    }
}

/// What the locations listing hands out: a location without its ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocationResponse {
    pub location_name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<Location> for LocationResponse {
    fn from(value: Location) -> Self {
        Self {
            location_name: value.location_name,
            longitude: value.longitude,
            latitude: value.latitude,
        }
    }
}

impl ExampleData for LocationResponse {
    fn example_data() -> Self {
        Location::example_data().into()
    }
}
