use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::cv::CvData;

#[derive(Debug, Error)]
pub enum CvDataError {
    #[error("Failed to read CV data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CV data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Experience '{id}' is marked current but has an end date")]
    CurrentWithEndDate { id: String },

    #[error("Experience '{id}' ends before it starts")]
    EndBeforeStart { id: String },
}

/// Reads the CV record from a JSON file and checks its invariants.
pub fn load_cv_data(path: &Path) -> Result<CvData, CvDataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CvDataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let cv = parse_cv_data(&raw)?;
    info!(
        "Loaded CV data: {} experience entries, {} certifications",
        cv.experience.len(),
        cv.certifications.len()
    );
    Ok(cv)
}

pub fn parse_cv_data(raw: &str) -> Result<CvData, CvDataError> {
    let cv: CvData = serde_json::from_str(raw)?;
    validate_cv_data(&cv)?;
    Ok(cv)
}

fn validate_cv_data(cv: &CvData) -> Result<(), CvDataError> {
    for exp in &cv.experience {
        match exp.end_date {
            Some(_) if exp.current => {
                return Err(CvDataError::CurrentWithEndDate { id: exp.id.clone() })
            }
            Some(end) if end < exp.start_date => {
                return Err(CvDataError::EndBeforeStart { id: exp.id.clone() })
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::cv::EmploymentType;

    const SAMPLE: &str = include_str!("../../data/cv-data.json");

    #[test]
    fn test_bundled_sample_parses() {
        let cv = parse_cv_data(SAMPLE).unwrap();
        assert_eq!(cv.personal_info.ham_radio, "KF7SIW");
        assert_eq!(cv.experience[0].kind, EmploymentType::FullTime);
        assert!(cv.experience[0].current);
        assert!(cv.experience[0].end_date.is_none());
        assert_eq!(cv.leadership[0].roles[1].description, None);
    }

    #[test]
    fn test_rejects_current_with_end_date() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["experience"][0]["endDate"] = "2024-01-01".into();
        let err = parse_cv_data(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CvDataError::CurrentWithEndDate { ref id } if id == "latah-county-deputy-director"
        ));
    }

    #[test]
    fn test_rejects_end_before_start() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["experience"][1]["endDate"] = "2010-01-01".into();
        let err = parse_cv_data(&value.to_string()).unwrap_err();
        assert!(matches!(err, CvDataError::EndBeforeStart { .. }));
    }

    #[test]
    fn test_rejects_unknown_employment_type() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["experience"][0]["type"] = "volunteer".into();
        assert!(matches!(
            parse_cv_data(&value.to_string()),
            Err(CvDataError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let cv = load_cv_data(file.path()).unwrap();
        assert_eq!(cv.experience.len(), 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_cv_data(Path::new("/nonexistent/cv-data.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cv-data.json"));
    }
}
