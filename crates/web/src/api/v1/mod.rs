use axum::{
    routing::{get, on},
    Router,
};

mod locations;

use crate::{
    common::{route_not_found, route_not_implemented, METHOD_FILTER_ALL},
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(route_not_implemented))
        .nest_service("/locations", locations::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}
