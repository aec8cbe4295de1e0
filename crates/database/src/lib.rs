use std::{env, error::Error};

use async_trait::async_trait;
use model::{
    location::{Location, LocationResponse},
    organisation::Organisation,
    WithId,
};
use queries::convert_error;
use registry::database::{Database, LocationRepo, OrganisationRepo, Result};
use sqlx::{pool::PoolConnection, Postgres};
use utility::{geo::BoundingBox, id::Id};

pub mod data_model;
pub mod memory;
pub mod queries;

pub use memory::MemoryDatabase;

pub struct DatabaseConnectionInfo {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConnectionInfo {
    pub fn from_env() -> Option<Self> {
        let username = env::var("DATABASE_USER").ok()?;
        let password = env::var("DATABASE_PASSWORD").ok()?;
        let hostname = env::var("DATABASE_HOST").ok()?;
        let port: u16 = env::var("DATABASE_PORT").ok()?.parse().ok()?;
        let database = env::var("DATABASE_NAME").ok()?;
        Some(Self {
            username,
            password,
            hostname,
            port,
            database,
        })
    }

    pub(self) fn postgres_url(self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.hostname, self.port, self.database
        )
    }
}

#[derive(Debug, Clone)]
pub struct PgDatabase {
    connection: sqlx::PgPool,
}

/// A pooled connection checked out for one unit of work. Goes back to the
/// pool when dropped.
pub struct PgDatabaseSession {
    connection: PoolConnection<Postgres>,
}

impl PgDatabase {
    /// Connects and brings the schema up to date.
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> std::result::Result<Self, Box<dyn Error>> {
        let url = database_connection_info.postgres_url();
        let pool = sqlx::postgres::PgPool::connect(&url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        log::info!("database schema is up to date");

        Ok(Self { connection: pool })
    }
}

#[async_trait]
impl Database for PgDatabase {
    type Session = PgDatabaseSession;

    async fn session(&self) -> Result<Self::Session> {
        let connection = self.connection.acquire().await.map_err(convert_error)?;
        Ok(PgDatabaseSession { connection })
    }
}

#[async_trait]
impl OrganisationRepo for PgDatabaseSession {
    async fn insert_organisation(
        &mut self,
        organisation: Organisation,
    ) -> Result<WithId<Organisation>> {
        queries::organisation::insert(&mut *self.connection, organisation).await
    }

    async fn get_organisation(
        &mut self,
        id: Id<Organisation>,
    ) -> Result<WithId<Organisation>> {
        queries::organisation::get(&mut *self.connection, id).await
    }

    async fn get_organisations(&mut self) -> Result<Vec<WithId<Organisation>>> {
        queries::organisation::get_all(&mut *self.connection).await
    }
}

#[async_trait]
impl LocationRepo for PgDatabaseSession {
    async fn insert_location(&mut self, location: Location) -> Result<WithId<Location>> {
        queries::location::insert(&mut *self.connection, location).await
    }

    async fn get_locations_of_organisation(
        &mut self,
        organisation_id: Id<Organisation>,
        bounding_box: Option<BoundingBox>,
    ) -> Result<Vec<LocationResponse>> {
        queries::location::get_by_organisation(
            &mut *self.connection,
            organisation_id,
            bounding_box,
        )
        .await
    }
}
