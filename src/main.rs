use holocron::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), holocron::server::error::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    let db = startup::connect_to_database(&config).await?;
    startup::create_schema(&db).await?;

    let router = router::routes().with_state(AppState::from(db));
    let listener = tokio::net::TcpListener::bind(config.address()).await?;

    tracing::info!("Listening on {}", config.address());

    axum::serve(listener, router).await?;

    Ok(())
}
