pub use crate::common::RouteResult;

use std::env;

use axum::{extract::FromRef, Router};
use catalog::client::Client;
use database::PgDatabase;
use tokio::net::TcpListener;

pub mod api;
pub mod common;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub catalog_client: Client<PgDatabase>,
}

pub struct WebServerConfig {
    pub bind_address: String,
}

impl WebServerConfig {
    pub fn from_env() -> Self {
        let bind_address = env::var("WEB_BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
        Self { bind_address }
    }
}

pub async fn start_web_server(
    config: WebServerConfig,
    state: WebState,
) -> std::io::Result<()> {
    let routes = Router::new().nest_service("/api", api::routes(state));

    let listener = TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
