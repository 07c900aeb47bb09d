//! Shared fixtures and stubs for unit tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::config::Config;
use crate::contact::{MailError, MailSender, OutgoingMail};
use crate::content::schema::{BlogPostData, Entry, TestimonialCategory, TestimonialData};
use crate::content::{BlogPost, Collections, Testimonial};
use crate::cv::loader::parse_cv_data;
use crate::models::cv::CvData;
use crate::state::AppState;

pub fn test_config() -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        from_email: Some("site@example.com".to_string()),
        to_email: Some("owner@example.com".to_string()),
        mail_api_url: None,
        mail_api_key: None,
        cv_data_path: PathBuf::from("data/cv-data.json"),
        content_dir: PathBuf::from("content"),
    }
}

pub fn sample_cv() -> CvData {
    parse_cv_data(include_str!("../data/cv-data.json")).expect("bundled CV data is valid")
}

pub fn post(slug: &str, pub_date: &str, tags: &[&str], featured: bool, draft: bool) -> BlogPost {
    Entry {
        id: slug.to_string(),
        slug: slug.to_string(),
        data: BlogPostData {
            title: format!("Post {slug}"),
            description: format!("About {slug}"),
            pub_date: NaiveDate::parse_from_str(pub_date, "%Y-%m-%d").expect("fixture date"),
            updated_date: None,
            author: "Austin Cole".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            draft,
            featured,
            image: None,
        },
        body: "## Notes\n\nA short **post** body with a [link](https://example.com).\n".to_string(),
    }
}

pub fn testimonial(
    name: &str,
    category: TestimonialCategory,
    order: f64,
    featured: bool,
) -> Testimonial {
    Entry {
        id: name.to_lowercase(),
        slug: name.to_lowercase(),
        data: TestimonialData {
            name: name.to_string(),
            title: "Director".to_string(),
            company: "Example County".to_string(),
            category,
            initials: None,
            featured,
            order,
        },
        body: format!("{name} says *thanks*."),
    }
}

pub fn sample_collections() -> Collections {
    Collections::new(
        vec![
            post("field-day", "2024-06-22", &["radio"], true, false),
            post("patching", "2024-02-01", &["security"], false, false),
            post("unfinished", "2024-08-01", &["security"], false, true),
        ],
        vec![
            testimonial("Riley", TestimonialCategory::Professional, 1.0, true),
            testimonial("Casey", TestimonialCategory::Community, 0.0, false),
        ],
    )
}

pub fn test_state(mailer: Option<Arc<dyn MailSender>>) -> AppState {
    AppState {
        config: test_config(),
        cv: Arc::new(sample_cv()),
        content: Arc::new(sample_collections()),
        mailer,
    }
}

/// Keeps every message it is asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingMail>>,
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Rejects every message as a provider outage would.
pub struct FailingMailer;

#[async_trait]
impl MailSender for FailingMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<(), MailError> {
        Err(MailError::Rejected {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}
