pub mod health;
pub mod site;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::content::handlers as content;
use crate::cv::handlers as cv;
use crate::navigation::handlers as navigation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The contact route carries its own CORS headers on every response.
    let contact_routes = Router::new()
        .route(
            "/api/contact",
            post(contact::handle_contact).options(contact::handle_contact_preflight),
        )
        .layer(middleware::map_response(contact::with_contact_cors));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/site", get(site::site_handler))
        .route("/api/breadcrumbs", get(navigation::handle_breadcrumbs))
        .merge(contact_routes)
        // CV data for the offline PDF script
        .route("/api/cv-pdf", get(cv::handle_cv_pdf))
        .route("/api/generate-cv-pdf", get(cv::handle_generate_cv_pdf))
        // Content collections
        .route("/api/blog", get(content::handle_list_posts))
        // Slugs of nested posts contain `/`
        .route("/api/blog/*slug", get(content::handle_get_post))
        .route("/api/testimonials", get(content::handle_list_testimonials))
        .route("/cv-print/", get(render::handle_cv_print))
        .with_state(state)
}
