use serde::Serialize;

/// Public contact details shown across pages. A phone number is deliberately
/// absent: it is never displayed publicly.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub ham_radio: &'static str,
    pub summary: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Austin Cole",
    title: "Deputy IT Director & CISO",
    location: "Genesee, Idaho",
    linkedin: "https://www.linkedin.com/in/austintcole/",
    github: "https://github.com/ATCUSA",
    ham_radio: "KF7SIW",
    summary: "Experienced IT leader with over 20 years of experience in cybersecurity, \
              infrastructure management, and emergency preparedness. Currently serving as \
              Deputy IT Director and Chief Information Security Officer for Latah County, Idaho.",
};
