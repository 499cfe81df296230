use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitted,
};
use portfolio_models::contact::{ContactSubmissionRequest, ValidationErrors};
use serde_json::Value;
use tracing::debug;

use super::error;
use crate::models::contact::{ApiContactSubmitted, ApiValidationError};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(body)) => ContactSubmissionRequest::validate(&body),
        Err(rejection) => Err(ValidationErrors::malformed(rejection.body_text())),
    };

    let request = match request {
        Ok(request) => request,
        Err(errors) => {
            debug!(%errors, "rejected contact submission");
            return validation_error(errors);
        }
    };

    match service.submit(request).await {
        Ok(ContactSubmitted {
            submission,
            email_sent,
        }) => (
            StatusCode::CREATED,
            Json(ApiContactSubmitted {
                message: "Contact form submitted successfully",
                id: submission.id,
                email_sent,
            }),
        )
            .into_response(),
        Err(ContactSubmitError::Storage(_)) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to submit contact form",
        ),
    }
}

fn validation_error(errors: ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiValidationError {
            message: "Validation error",
            errors: errors.to_string(),
        }),
    )
        .into_response()
}
