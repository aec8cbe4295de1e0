use schemars::JsonSchema;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

pub mod location;
pub mod organisation;

pub trait ExampleData {
    fn example_data() -> Self;
}

/// A persisted value together with the id the store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(
    serialize = "V: Serialize, V::IdType: Serialize",
    deserialize = "V: Deserialize<'de>, V::IdType: Deserialize<'de>"
))]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Debug + Clone + PartialEq,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Debug + Clone + PartialEq,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}

impl<V> ExampleData for WithId<V>
where
    V: HasId + ExampleData,
    V::IdType: Debug + Clone + PartialEq + From<i32>,
{
    fn example_data() -> Self {
        Self::new(Id::new(1.into()), V::example_data())
    }
}
