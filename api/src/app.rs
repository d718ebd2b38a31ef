//! Application factory
//!
//! This module builds the Actix-web application: the single `/send_code`
//! route behind bearer authorization, and a catch-all 404 for everything
//! else.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ox_core::errors::DomainError;
use ox_core::services::verification::MailServiceTrait;

use crate::handlers::error::domain_error_response;
use crate::middleware::auth::BearerAuth;
use crate::routes::send_code::{send_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<M>(
    app_state: web::Data<AppState<M>>,
    api_token: String,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    M: MailServiceTrait + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        // Request logging
        .wrap(Logger::default())
        // The single endpoint; authorization runs on the route so that
        // unknown paths and methods stay 404 regardless of credentials
        .route(
            "/send_code",
            web::post()
                .to(send_code::<M>)
                .wrap(BearerAuth::new(api_token)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Catch-all handler for unknown paths and methods
async fn not_found() -> HttpResponse {
    domain_error_response(&DomainError::NotFound)
}
