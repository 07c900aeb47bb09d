use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::navigation::{
    breadcrumb_structured_data, generate_breadcrumbs, BreadcrumbItem, BreadcrumbList,
};

#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    pub path: String,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbResponse {
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub structured_data: BreadcrumbList,
}

/// GET /api/breadcrumbs?path=/about/&title=
pub async fn handle_breadcrumbs(
    query: Result<Query<BreadcrumbQuery>, QueryRejection>,
) -> Result<Json<BreadcrumbResponse>, AppError> {
    let Query(query) = query?;
    let breadcrumbs = generate_breadcrumbs(&query.path, query.title.as_deref(), None);
    Ok(Json(BreadcrumbResponse {
        structured_data: breadcrumb_structured_data(&breadcrumbs),
        breadcrumbs,
    }))
}
