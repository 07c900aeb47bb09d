use axum::{
    extract::State,
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE, HOST},
        HeaderMap,
    },
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;

use crate::cv::pdf::{build_pdf_payload, timestamp, CvExport, PdfDataResponse, PDF_SCRIPT_NOTICE};
use crate::data::SITE_CONFIG;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/cv-pdf
pub async fn handle_cv_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let export = CvExport {
        cv: &state.cv,
        generated_at: timestamp(Utc::now()),
        url: format!("{}/cv", request_origin(&headers)),
    };
    let body = pretty_json(&export)?;
    Ok((
        [
            (CONTENT_TYPE, "application/json"),
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}

/// GET /api/generate-cv-pdf
pub async fn handle_generate_cv_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let now = Utc::now();
    let response = PdfDataResponse {
        payload: build_pdf_payload(&state.cv, now.date_naive()),
        generated_at: timestamp(now),
        message: PDF_SCRIPT_NOTICE,
    };
    let body = pretty_json(&response)?;
    Ok((
        [
            (CONTENT_TYPE, "application/json"),
            (CACHE_CONTROL, "private, max-age=300"),
        ],
        body,
    )
        .into_response())
}

fn pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::CvData(e.to_string()))
}

/// Origin the request was addressed to, honouring a reverse proxy's
/// `X-Forwarded-Proto`. Falls back to the configured site URL without a Host.
fn request_origin(headers: &HeaderMap) -> String {
    let Some(host) = headers.get(HOST).and_then(|h| h.to_str().ok()) else {
        return SITE_CONFIG.url.to_string();
    };
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_origin_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("localhost:4321"));
        assert_eq!(request_origin(&headers), "http://localhost:4321");
    }

    #[test]
    fn test_origin_honours_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("austincole.us"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(request_origin(&headers), "https://austincole.us");
    }

    #[test]
    fn test_origin_falls_back_to_site_url() {
        assert_eq!(request_origin(&HeaderMap::new()), "https://austincole.us");
    }
}
