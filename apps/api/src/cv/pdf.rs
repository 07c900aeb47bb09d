use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::cv::formatting::{duration_in_years_until, format_date_range};
use crate::models::cv::{CvData, Experience};

pub const PDF_SCRIPT_NOTICE: &str = "PDF generation via browser API is not available in this \
     environment. Use the scripts/generate-pdf.ts script locally.";

/// An experience entry with its presentation strings precomputed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedExperience<'a> {
    #[serde(flatten)]
    pub experience: &'a Experience,
    pub date_range: String,
    pub duration: f64,
}

impl<'a> FormattedExperience<'a> {
    pub fn new(experience: &'a Experience, today: NaiveDate) -> Self {
        Self {
            experience,
            date_range: format_date_range(
                experience.start_date,
                experience.end_date,
                experience.current,
            ),
            duration: duration_in_years_until(experience.start_date, experience.end_date, today),
        }
    }
}

/// The CV record plus formatted experience, as fed to the offline PDF script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfPayload<'a> {
    #[serde(flatten)]
    pub cv: &'a CvData,
    pub formatted_experience: Vec<FormattedExperience<'a>>,
}

pub fn build_pdf_payload(cv: &CvData, today: NaiveDate) -> PdfPayload<'_> {
    PdfPayload {
        cv,
        formatted_experience: cv
            .experience
            .iter()
            .map(|exp| FormattedExperience::new(exp, today))
            .collect(),
    }
}

/// `GET /api/cv-pdf` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvExport<'a> {
    #[serde(flatten)]
    pub cv: &'a CvData,
    pub generated_at: String,
    pub url: String,
}

/// `GET /api/generate-cv-pdf` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfDataResponse<'a> {
    #[serde(flatten)]
    pub payload: PdfPayload<'a>,
    pub generated_at: String,
    pub message: &'static str,
}

pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_cv;

    #[test]
    fn test_payload_formats_every_experience() {
        let cv = sample_cv();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let payload = build_pdf_payload(&cv, today);
        assert_eq!(payload.formatted_experience.len(), cv.experience.len());
        assert_eq!(
            payload.formatted_experience[0].date_range,
            "January 2020 - Present"
        );
        assert_eq!(payload.formatted_experience[0].duration, 5.0);
    }

    #[test]
    fn test_payload_flattens_cv_fields() {
        let cv = sample_cv();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let value = serde_json::to_value(build_pdf_payload(&cv, today)).unwrap();
        assert_eq!(value["personalInfo"]["name"], "Austin Cole");
        let first = &value["formattedExperience"][0];
        assert_eq!(first["id"], "latah-county-deputy-director");
        assert_eq!(first["type"], "full-time");
        assert_eq!(first["dateRange"], "January 2020 - Present");
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let now = DateTime::parse_from_rfc3339("2025-03-04T05:06:07.089Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(timestamp(now), "2025-03-04T05:06:07.089Z");
    }
}
