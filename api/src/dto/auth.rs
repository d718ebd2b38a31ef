use serde::{Deserialize, Serialize};

/// Body of `POST /send_code`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeRequest {
    /// Recipient email address; a missing or `null` field is treated as an
    /// empty address and rejected after trimming
    #[serde(default)]
    pub email: Option<String>,
}

/// Success body: the code that was generated and delivered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub code: String,
}
