use model::{
    location::{Location, LocationResponse},
    organisation::Organisation,
    WithId,
};
use registry::database::Result;
use sqlx::{Executor, Postgres, QueryBuilder};
use utility::{geo::BoundingBox, id::Id};

use crate::data_model::{
    location::{LocationResponseRow, LocationRow},
    with_id,
};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, location: Location) -> Result<WithId<Location>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO locations(
            organisation_id,
            location_name,
            longitude,
            latitude
        )
        VALUES ($1, $2, $3, $4)
        RETURNING id, organisation_id, location_name, longitude, latitude;
        ",
    )
    .bind(location.organisation_id.raw())
    .bind(&location.location_name)
    .bind(location.longitude)
    .bind(location.latitude)
    .fetch_one(executor)
    .await
    .map(|row: LocationRow| with_id(row))
    .map_err(convert_error)
}

/// Builds the listing query. The bounding box, if any, becomes four inclusive
/// comparisons on top of the organisation filter.
pub(crate) fn by_organisation_query(
    organisation_id: Id<Organisation>,
    bounding_box: Option<BoundingBox>,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT location_name, longitude, latitude FROM locations WHERE organisation_id = ",
    );
    query.push_bind(organisation_id.raw());

    if let Some(bounding_box) = bounding_box {
        query
            .push(" AND longitude >= ")
            .push_bind(bounding_box.min_longitude)
            .push(" AND longitude <= ")
            .push_bind(bounding_box.max_longitude)
            .push(" AND latitude >= ")
            .push_bind(bounding_box.min_latitude)
            .push(" AND latitude <= ")
            .push_bind(bounding_box.max_latitude);
    }

    query.push(" ORDER BY id;");
    query
}

pub async fn get_by_organisation<'c, E>(
    executor: E,
    organisation_id: Id<Organisation>,
    bounding_box: Option<BoundingBox>,
) -> Result<Vec<LocationResponse>>
where
    E: Executor<'c, Database = Postgres>,
{
    let mut query = by_organisation_query(organisation_id, bounding_box);
    query
        .build_query_as::<LocationResponseRow>()
        .fetch_all(executor)
        .await
        .map_err(convert_error)
        .map(|rows| rows.into_iter().map(LocationResponse::from).collect())
}
