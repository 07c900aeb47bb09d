use axum::{extract::State, response::Html};
use chrono::Utc;

use crate::navigation::{generate_content_breadcrumbs, ContentType};
use crate::render::cv_page::render_cv_page;
use crate::state::AppState;

/// GET /cv-print/
pub async fn handle_cv_print(State(state): State<AppState>) -> Html<String> {
    let breadcrumbs = generate_content_breadcrumbs(ContentType::Cv, None, Some("print"));
    let page = render_cv_page(&state.cv, &breadcrumbs, Utc::now().date_naive());
    Html(page.into_string())
}
