use axum::Json;
use serde::Serialize;

use crate::data::{PersonalInfo, SiteConfig, PERSONAL_INFO, SITE_CONFIG};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    pub site: SiteConfig,
    pub personal_info: PersonalInfo,
}

/// GET /api/site
/// The fixed site configuration and public personal details.
pub async fn site_handler() -> Json<SiteResponse> {
    Json(SiteResponse {
        site: SITE_CONFIG,
        personal_info: PERSONAL_INFO,
    })
}
