mod model;
mod server;

use tower_http::cors::CorsLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config, error::AppError, scheduler::session_cleanup, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    // Start session cleanup scheduler
    let scheduler_db = db.clone();
    let ttl_hours = config.session_ttl_hours;
    tokio::spawn(async move {
        if let Err(e) = session_cleanup::start_scheduler(scheduler_db, ttl_hours).await {
            tracing::error!("Session cleanup scheduler error: {}", e);
        }
    });

    let (router, api) = server::router::router();
    let app = router
        .with_state(AppState::new(db))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
