//! An in-process store with the same observable behaviour as [`crate::PgDatabase`]:
//! serial ids starting at 1, rows listed in id order, and locations rejected
//! when their organisation does not exist.

use std::sync::Arc;

use async_trait::async_trait;
use model::{
    location::{Location, LocationResponse},
    organisation::Organisation,
    WithId,
};
use registry::database::{Database, DatabaseError, LocationRepo, OrganisationRepo, Result};
use tokio::sync::Mutex;
use utility::{geo::BoundingBox, id::Id, let_also::LetAlso};

#[derive(Debug, Default)]
struct Tables {
    organisations: Vec<WithId<Organisation>>,
    locations: Vec<WithId<Location>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

pub struct MemoryDatabaseSession {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    type Session = MemoryDatabaseSession;

    async fn session(&self) -> Result<Self::Session> {
        Ok(MemoryDatabaseSession {
            tables: self.tables.clone(),
        })
    }
}

fn next_id(len: usize) -> Result<i32> {
    i32::try_from(len + 1).map_err(|why| DatabaseError::Other(Box::new(why)))
}

#[async_trait]
impl OrganisationRepo for MemoryDatabaseSession {
    async fn insert_organisation(
        &mut self,
        organisation: Organisation,
    ) -> Result<WithId<Organisation>> {
        let mut tables = self.tables.lock().await;
        let organisation = WithId::new(Id::new(next_id(tables.organisations.len())?), organisation);
        tables.organisations.push(organisation.clone());
        Ok(organisation)
    }

    async fn get_organisation(
        &mut self,
        id: Id<Organisation>,
    ) -> Result<WithId<Organisation>> {
        self.tables
            .lock()
            .await
            .organisations
            .iter()
            .find(|organisation| organisation.id == id)
            .cloned()
            .ok_or(DatabaseError::NotFound)
    }

    async fn get_organisations(&mut self) -> Result<Vec<WithId<Organisation>>> {
        Ok(self.tables.lock().await.organisations.clone())
    }
}

#[async_trait]
impl LocationRepo for MemoryDatabaseSession {
    async fn insert_location(&mut self, location: Location) -> Result<WithId<Location>> {
        let mut tables = self.tables.lock().await;
        let organisation_exists = tables
            .organisations
            .iter()
            .any(|organisation| organisation.id == location.organisation_id);
        if !organisation_exists {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "organisation {} does not exist",
                location.organisation_id
            )));
        }

        let location = WithId::new(Id::new(next_id(tables.locations.len())?), location);
        tables.locations.push(location.clone());
        Ok(location)
    }

    async fn get_locations_of_organisation(
        &mut self,
        organisation_id: Id<Organisation>,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Vec<LocationResponse>> {
        self.tables
            .lock()
            .await
            .locations
            .iter()
            .map(|location| &location.content)
            .filter(|location| location.organisation_id == organisation_id)
            .filter(|location| {
                bounding_box.map_or(true, |bounding_box| {
                    bounding_box.contains(location.longitude, location.latitude)
                })
            })
            .cloned()
            .map(LocationResponse::from)
            .collect::<Vec<_>>()
            .let_owned(Ok)
    }
}
