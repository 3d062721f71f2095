use std::error::Error;

use climate::{client::Client, config::ClimateConfig};
use database::{DatabaseConnectionInfo, SqliteDatabase};
use tracing_subscriber::EnvFilter;
use web::{bind_address_from_env, start_web_server, WebState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env()?;
    tracing::info!("opening {}", database_connection_info.url);
    let database = SqliteDatabase::connect(database_connection_info).await?;

    // climate client
    let climate_config = ClimateConfig::from_env()?;
    tracing::info!(
        "reporting window {} to {}",
        climate_config.cutoff_date(),
        climate_config.reference_date
    );
    let climate_client = Client::new(database, climate_config).await?;
    let stations = climate_client.station_inventory().await?;
    tracing::info!("serving {} stations", stations.len());

    // web server
    start_web_server(WebState { climate_client }, &bind_address_from_env()).await?;

    Ok(())
}
