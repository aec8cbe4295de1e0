use model::{
    location::{CreateLocation, Location, LocationResponse},
    organisation::{CreateOrganisation, Organisation},
    WithId,
};
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

use crate::{
    database::{Database, LocationRepo, OrganisationRepo},
    RequestResult,
};

/// Entry point for all registry operations.
///
/// Every call opens its own session and drops it before returning, whether
/// the call succeeded or not.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database,
{
    pub database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    // organisations

    pub async fn create_organisation(
        &self,
        organisation: CreateOrganisation,
    ) -> RequestResult<WithId<Organisation>> {
        let mut session = self.database.session().await?;
        let created = session
            .insert_organisation(Organisation::from(organisation))
            .await?;
        log::debug!("created organisation {}", created.id);
        Ok(created)
    }

    pub async fn get_organisations(&self) -> RequestResult<Vec<WithId<Organisation>>> {
        self.database
            .session()
            .await?
            .get_organisations()
            .await?
            .let_owned(Ok)
    }

    pub async fn get_organisation(
        &self,
        id: Id<Organisation>,
    ) -> RequestResult<WithId<Organisation>> {
        self.database
            .session()
            .await?
            .get_organisation(id)
            .await?
            .let_owned(Ok)
    }

    // locations

    pub async fn create_location(
        &self,
        location: CreateLocation,
    ) -> RequestResult<WithId<Location>> {
        let mut session = self.database.session().await?;
        let created = session.insert_location(Location::from(location)).await?;
        log::debug!(
            "created location {} for organisation {}",
            created.id,
            created.content.organisation_id
        );
        Ok(created)
    }

    pub async fn get_organisation_locations(
        &self,
        organisation_id: Id<Organisation>,
        bounding_box: Option<BoundingBox>,
    ) -> RequestResult<Vec<LocationResponse>> {
        self.database
            .session()
            .await?
            .get_locations_of_organisation(organisation_id, bounding_box)
            .await?
            .let_owned(Ok)
    }
}
