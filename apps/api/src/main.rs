mod config;
mod contact;
mod content;
mod cv;
mod data;
mod errors;
mod models;
mod navigation;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_helpers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{HttpMailSender, MailSender};
use crate::content::Collections;
use crate::cv::load_cv_data;
use crate::errors::panic_response;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // CV record: required, the CV endpoints have nothing to serve without it
    let cv = load_cv_data(&config.cv_data_path).with_context(|| {
        format!(
            "Failed to load CV data from {}",
            config.cv_data_path.display()
        )
    })?;

    // Content collections: schema failures abort startup
    let content = Collections::load(&config.content_dir).with_context(|| {
        format!(
            "Failed to load content collections from {}",
            config.content_dir.display()
        )
    })?;

    // Mail capability is optional; the contact endpoint reports its absence
    let mailer: Option<Arc<dyn MailSender>> = match HttpMailSender::from_config(&config)? {
        Some(sender) => {
            info!("Mail capability configured");
            Some(Arc::new(sender) as Arc<dyn MailSender>)
        }
        None => {
            warn!("MAIL_API_URL / MAIL_API_KEY not set; contact submissions will fail");
            None
        }
    };
    if config.from_email.is_none() || config.to_email.is_none() {
        warn!("FROM_EMAIL / TO_EMAIL not set; contact submissions will fail");
    }

    let state = AppState {
        cv: Arc::new(cv),
        content: Arc::new(content),
        mailer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
