use labreserve::{config::Config, error::AppError, startup};

/// Boots the storage layer: loads configuration, connects, and brings the
/// schema up to date.
///
/// The reservation core itself is a library; an embedding transport
/// constructs its services on top of the connection this entrypoint
/// verifies.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    startup::connect_to_database(&config).await?;

    tracing::info!("Database connected and schema migrated");

    Ok(())
}
