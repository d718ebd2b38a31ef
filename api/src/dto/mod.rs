//! Request and response data transfer objects

pub mod auth;
pub mod error;

pub use auth::{SendCodeRequest, SendCodeResponse};
pub use error::ErrorBody;
