use std::sync::Arc;

use crate::config::Config;
use crate::contact::MailSender;
use crate::content::Collections;
use crate::models::cv::CvData;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cv: Arc<CvData>,
    pub content: Arc<Collections>,
    /// Absent when no mail provider is configured; the contact endpoint then
    /// answers with a configuration error instead of dropping messages.
    pub mailer: Option<Arc<dyn MailSender>>,
}
