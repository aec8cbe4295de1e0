use std::{error, result};

use async_trait::async_trait;
use model::{
    location::{Location, LocationResponse},
    organisation::Organisation,
    WithId,
};
use thiserror::Error;
use utility::{geo::BoundingBox, id::Id};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("row not found")]
    NotFound,
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
    #[error(transparent)]
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

#[async_trait]
pub trait OrganisationRepo {
    async fn insert_organisation(
        &mut self,
        organisation: Organisation,
    ) -> Result<WithId<Organisation>>;

    /// Fails with [`DatabaseError::NotFound`] if there is no such organisation.
    async fn get_organisation(
        &mut self,
        id: Id<Organisation>,
    ) -> Result<WithId<Organisation>>;

    async fn get_organisations(&mut self) -> Result<Vec<WithId<Organisation>>>;
}

#[async_trait]
pub trait LocationRepo {
    /// The store rejects locations of unknown organisations with
    /// [`DatabaseError::ForeignKeyViolation`].
    async fn insert_location(&mut self, location: Location) -> Result<WithId<Location>>;

    /// All locations of the organisation, narrowed to `bounding_box` when
    /// given. Bounds are inclusive. An unknown organisation has no locations.
    async fn get_locations_of_organisation(
        &mut self,
        organisation_id: Id<Organisation>,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Vec<LocationResponse>>;
}

/// A unit of work against the store. Acquired per request and released when
/// dropped.
pub trait DatabaseSession: OrganisationRepo + LocationRepo + Send {}

impl<T> DatabaseSession for T where T: OrganisationRepo + LocationRepo + Send {}

#[async_trait]
pub trait Database: Clone + Send + Sync + 'static {
    type Session: DatabaseSession;

    async fn session(&self) -> Result<Self::Session>;
}
