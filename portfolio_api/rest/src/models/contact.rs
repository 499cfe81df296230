use portfolio_models::contact::ContactSubmissionId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmitted {
    pub message: &'static str,
    pub id: ContactSubmissionId,
    pub email_sent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiValidationError {
    pub message: &'static str,
    /// All violated constraints in a single human readable string.
    pub errors: String,
}
