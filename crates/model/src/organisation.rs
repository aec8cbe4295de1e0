use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::ExampleData;

/// The top-level owning entity. Never updated or deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Organisation {
    pub name: String,
}

impl HasId for Organisation {
    type IdType = i32;
}

impl ExampleData for Organisation {
    fn example_data() -> Self {
        Self {
            name: "Acme".to_owned(),
        }
    }
}

/// Request body for creating an organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreateOrganisation {
    pub name: String,
}

impl From<CreateOrganisation> for Organisation {
    fn from(value: CreateOrganisation) -> Self {
        Self { name: value.name }
    }
}
