use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CvPersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub ham_radio: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    Consulting,
    PartTime,
}

/// One position held. `current == true` implies `end_date` is `None`;
/// the loader rejects records that break this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    #[serde(rename = "type")]
    pub kind: EmploymentType,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadershipRole {
    pub title: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leadership {
    pub category: String,
    pub roles: Vec<LeadershipRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competency {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    pub systems: Vec<String>,
    pub security: Vec<String>,
    pub specializations: Vec<String>,
}

/// The full CV record. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CvData {
    pub personal_info: CvPersonalInfo,
    pub experience: Vec<Experience>,
    pub leadership: Vec<Leadership>,
    pub certifications: Vec<String>,
    pub skills: Skills,
    pub competencies: Vec<Competency>,
}
