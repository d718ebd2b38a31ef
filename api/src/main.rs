use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use ox_api::app::create_app;
use ox_api::routes::AppState;
use ox_core::services::verification::VerificationService;
use ox_infra::mail::SmtpMailService;
use ox_shared::config::{AuthConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize the tracing subscriber; the log-compat layer also captures
    // actix's request logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting OxMail API server");

    // Load configuration; a missing or empty shared secret must prevent the
    // server from ever binding
    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Invalid server configuration: {}", error);
            std::process::exit(1);
        }
    };
    let auth_config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Refusing to start: {}", error);
            std::process::exit(1);
        }
    };

    // SMTP credentials are read once here; their presence is only enforced
    // per request, so startup succeeds without them
    let mail_service = Arc::new(SmtpMailService::from_env());
    let verification_service = Arc::new(VerificationService::new(mail_service));
    let app_state = web::Data::new(AppState {
        verification_service,
    });

    let bind_address = server_config.bind_address();
    let api_token = auth_config.api_token;

    let server = HttpServer::new(move || create_app(app_state.clone(), api_token.clone()))
        .bind(&bind_address)?;

    tracing::info!("Oxford mail API listening on http://{}", bind_address);

    server.run().await
}
