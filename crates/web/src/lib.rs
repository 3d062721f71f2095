pub use crate::common::RouteResult;

use std::env;

use axum::{extract::FromRef, response::IntoResponse, routing::get, Router};
use climate::client::Client;
use database::SqliteDatabase;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod common;
pub mod mapper;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, FromRef)]
pub struct WebState {
    pub climate_client: Client<SqliteDatabase>,
}

pub fn bind_address_from_env() -> String {
    env::var("WEB_BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned())
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest_service("/api", api::routes(state))
        .fallback(common::route_not_found)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_web_server(state: WebState, address: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}

async fn welcome() -> impl IntoResponse {
    api::welcome_text()
}
