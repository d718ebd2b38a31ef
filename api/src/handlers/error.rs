//! Domain error to HTTP response mapping
//!
//! Every failure path converges here so status codes and error bodies are
//! decided in exactly one place.

use actix_web::{http::StatusCode, HttpResponse};

use ox_core::errors::DomainError;

use crate::dto::ErrorBody;

/// HTTP status for a domain error
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidJson
        | DomainError::EmailRequired
        | DomainError::EmailOutsideDomain { .. } => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Delivery { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into its JSON error response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    HttpResponse::build(error_status(error)).json(ErrorBody::from(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(
            error_status(&DomainError::InvalidJson),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::EmailRequired),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::EmailOutsideDomain {
                root_domain: "ox.ac.uk".to_string()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(error_status(&DomainError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            error_status(&DomainError::Delivery {
                message: "relay unreachable".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
