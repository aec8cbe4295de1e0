pub use crate::common::RouteResult;
pub use crate::config::WebConfig;

use axum::{routing::on, Router};
use registry::{client::Client, database::Database};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod common;
pub mod config;

use common::{route_not_found, METHOD_FILTER_ALL};

#[derive(Debug, Clone)]
pub struct WebState<D: Database> {
    pub registry_client: Client<D>,
}

impl<D: Database> WebState<D> {
    pub fn new(database: D) -> Self {
        Self {
            registry_client: Client::new(database),
        }
    }
}

pub fn router<D: Database>(state: WebState<D>) -> Router {
    Router::new()
        .nest_service("/api", api::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_web_server<D: Database>(
    state: WebState<D>,
    config: &WebConfig,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.bind_address).await?;
    serve(listener, state).await
}

/// Serves the api on an already bound listener until the process ends.
pub async fn serve<D: Database>(listener: TcpListener, state: WebState<D>) -> std::io::Result<()> {
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}
