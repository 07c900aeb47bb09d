use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        HeaderMap, HeaderValue, StatusCode,
    },
    response::Response,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::contact::message::compose_message;
use crate::contact::validation::{validate_submission, ContactSubmission};
use crate::errors::AppError;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    if !is_json_request(&headers) {
        return Err(AppError::UnsupportedContentType);
    }

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;
    let submission = validate_submission(&value).map_err(AppError::Validation)?;

    let submission_id = Uuid::new_v4();
    info!(
        "Contact submission {submission_id} from {} re: {:?}",
        submission.email, submission.subject
    );

    deliver(&state, &submission).await?;
    info!("Contact submission {submission_id} delivered");

    Ok(Json(ContactResponse {
        success: true,
        message: Some(SUCCESS_MESSAGE),
    }))
}

/// OPTIONS /api/contact
pub async fn handle_contact_preflight() -> StatusCode {
    StatusCode::OK
}

/// Adds the contact endpoint's CORS headers to every response on the route,
/// errors included.
pub async fn with_contact_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

async fn deliver(state: &AppState, submission: &ContactSubmission) -> Result<(), AppError> {
    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::MailNotConfigured("no mail capability (MAIL_API_URL / MAIL_API_KEY unset)".into())
    })?;
    let from = state
        .config
        .from_email
        .as_deref()
        .ok_or_else(|| AppError::MailNotConfigured("FROM_EMAIL is not set".into()))?;
    let to = state
        .config
        .to_email
        .as_deref()
        .ok_or_else(|| AppError::MailNotConfigured("TO_EMAIL is not set".into()))?;

    let mail = compose_message(submission, from, to);
    mailer
        .send(&mail)
        .await
        .map_err(|e| AppError::Delivery(e.to_string()))
}

fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}
