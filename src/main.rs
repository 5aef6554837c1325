use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prestalytics::config::Config;
use prestalytics::modules::analytics::controllers::{configure, AppState};
use prestalytics::modules::analytics::services::AnalyticsService;
use prestalytics::modules::webservice::services::{CommerceApi, WebserviceClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prestalytics=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Prestalytics sales analytics service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Webservice: {}", config.webservice.base_url);

    let client = WebserviceClient::new(&config.webservice, &config.limits)
        .expect("Failed to build webservice client");
    let api: Arc<dyn CommerceApi> = Arc::new(client);
    let analytics = AnalyticsService::new(Arc::clone(&api), &config.limits);

    let state = web::Data::new(AppState {
        analytics,
        api,
        character_limit: config.limits.character_limit,
    });

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
