use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        OriginalUri, Path, State,
    },
    http::Method,
    routing::{get, on, post},
    Json, Router,
};
use axum_extra::extract::{Query, QueryRejection};
use model::{
    location::{CreateLocation, Location, LocationResponse},
    organisation::{CreateOrganisation, Organisation},
    WithId,
};
use registry::database::Database;
use serde::Deserialize;
use utility::{geo::BoundingBox, id::Id};

use crate::{
    common::{route_not_found, schema, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    WebState,
};

pub(crate) fn routes<D: Database>(state: WebState<D>) -> Router {
    Router::new()
        .route("/schema", get(schema::<WithId<Organisation>>))
        .route("/locations/schema", get(schema::<LocationResponse>))
        .route("/create", post(create_organisation::<D>))
        .route("/create/location", post(create_location::<D>))
        .route("/:organisation_id", get(get_organisation::<D>))
        .route("/:organisation_id/locations", get(get_organisation_locations::<D>))
        .route("/", get(get_organisations::<D>))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn create_organisation<D: Database>(
    method: Method,
    original_uri: OriginalUri,
    State(WebState { registry_client }): State<WebState<D>>,
    payload: Result<Json<CreateOrganisation>, JsonRejection>,
) -> RouteResult<Json<WithId<Organisation>>> {
    let Json(organisation) =
        payload.map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))?;
    registry_client
        .create_organisation(organisation)
        .await
        .map(Json)
        .map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))
}

async fn get_organisations<D: Database>(
    method: Method,
    original_uri: OriginalUri,
    State(WebState { registry_client }): State<WebState<D>>,
) -> RouteResult<Json<Vec<WithId<Organisation>>>> {
    registry_client
        .get_organisations()
        .await
        .map(Json)
        .map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))
}

async fn get_organisation<D: Database>(
    method: Method,
    original_uri: OriginalUri,
    State(WebState { registry_client }): State<WebState<D>>,
    id: Result<Path<i32>, PathRejection>,
) -> RouteResult<Json<WithId<Organisation>>> {
    let Path(id) = id.map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))?;
    registry_client
        .get_organisation(Id::new(id))
        .await
        .map(Json)
        .map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))
}

async fn create_location<D: Database>(
    method: Method,
    original_uri: OriginalUri,
    State(WebState { registry_client }): State<WebState<D>>,
    payload: Result<Json<CreateLocation>, JsonRejection>,
) -> RouteResult<Json<WithId<Location>>> {
    let Json(location) =
        payload.map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))?;
    registry_client
        .create_location(location)
        .await
        .map(Json)
        .map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))
}

/// `?bounding_box=<min_long>&bounding_box=<min_lat>&bounding_box=<max_long>&bounding_box=<max_lat>`
#[derive(Debug, Deserialize)]
struct LocationsQuery {
    #[serde(default)]
    bounding_box: Vec<f64>,
}

impl LocationsQuery {
    fn bounding_box(&self) -> RouteResult<Option<BoundingBox>> {
        if self.bounding_box.is_empty() {
            return Ok(None);
        }
        BoundingBox::try_from(self.bounding_box.as_slice())
            .map(Some)
            .map_err(|why| RouteErrorResponse::unprocessable(why.to_string()))
    }
}

async fn get_organisation_locations<D: Database>(
    method: Method,
    original_uri: OriginalUri,
    State(WebState { registry_client }): State<WebState<D>>,
    id: Result<Path<i32>, PathRejection>,
    params: Result<Query<LocationsQuery>, QueryRejection>,
) -> RouteResult<Json<Vec<LocationResponse>>> {
    let Path(id) = id.map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))?;
    let Query(params) =
        params.map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))?;
    let bounding_box = params
        .bounding_box()
        .map_err(|why| why.during(&method, &original_uri))?;

    registry_client
        .get_organisation_locations(Id::new(id), bounding_box)
        .await
        .map(Json)
        .map_err(|why| RouteErrorResponse::from(why).during(&method, &original_uri))
}
