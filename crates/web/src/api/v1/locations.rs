use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on},
    Json, Router,
};
use model::{location::LocationView, WithId};
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    common::{
        route_not_found, schema, RouteErrorResponse, RouteResult,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<LocationView>))
        .route("/", get(get_locations))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Serialize, JsonSchema)]
pub(crate) struct LocationsDto {
    locations: Vec<WithId<LocationView>>,
}

async fn get_locations(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client }): State<WebState>,
) -> RouteResult<Json<LocationsDto>> {
    catalog_client
        .get_all_locations()
        .await
        .map(|locations| Json(LocationsDto { locations }))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}
