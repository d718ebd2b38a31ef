use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use ox_core::errors::DomainError;
use ox_core::services::verification::{MailServiceTrait, VerificationService};
use ox_shared::utils::email::mask_email;

use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::domain_error_response;

/// Application state that holds shared services
pub struct AppState<M>
where
    M: MailServiceTrait,
{
    pub verification_service: Arc<VerificationService<M>>,
}

/// Handler for `POST /send_code`
///
/// Issues a one-time verification code to the address in the JSON body and
/// returns it once the email has been delivered.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "student@some.college.ox.ac.uk"
/// }
/// ```
///
/// # Responses
///
/// - 200 `{"code": "123456"}`: code generated and email delivered
/// - 400 `{"error": "..."}`: malformed JSON, missing email, or an address
///   outside the institutional domain
/// - 500 `{"error": "..."}`: delivery failed; the code is not returned
pub async fn send_code<M>(state: web::Data<AppState<M>>, body: web::Bytes) -> HttpResponse
where
    M: MailServiceTrait + 'static,
{
    let request_id = Uuid::new_v4();

    // The raw body is parsed here, after authorization has already passed
    let request: SendCodeRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => {
            tracing::warn!(
                %request_id,
                event = "invalid_json",
                "Request body is not a valid send_code payload"
            );
            return domain_error_response(&DomainError::InvalidJson);
        }
    };

    let email = request.email.unwrap_or_default();
    let email = email.trim();

    tracing::info!(
        %request_id,
        email = %mask_email(email),
        "Processing send_code request"
    );

    match state.verification_service.send_verification_code(email).await {
        Ok(result) => {
            tracing::info!(
                %request_id,
                email = %mask_email(email),
                "Verification code issued"
            );
            HttpResponse::Ok().json(SendCodeResponse {
                code: result.verification_code.code,
            })
        }
        Err(error) => {
            tracing::warn!(
                %request_id,
                email = %mask_email(email),
                error = %error,
                "send_code request failed"
            );
            domain_error_response(&error)
        }
    }
}
