//! Printable CV page.
//!
//! A standalone HTML document built from the CV record with inline styles
//! tuned for paper, so the offline PDF script can print it directly.

use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::cv::pdf::FormattedExperience;
use crate::data::{NavLink, SITE_CONFIG};
use crate::models::cv::{CvData, EmploymentType};
use crate::navigation::{breadcrumb_structured_data, BreadcrumbItem};

const PRINT_CSS: &str = "\
body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;color:#111;line-height:1.45}\
header h1{margin-bottom:0}\
.muted{color:#64748b}\
nav.breadcrumbs ol{list-style:none;display:flex;gap:.5rem;padding:0}\
nav.breadcrumbs li+li::before{content:'\\203A';margin-right:.5rem}\
nav.site-nav a{margin-right:1rem}\
section{margin-top:1.5rem}\
.role h3{margin-bottom:.1rem}\
@media print{nav{display:none}body{margin:0}}";

pub fn render_cv_page(cv: &CvData, breadcrumbs: &[BreadcrumbItem], today: NaiveDate) -> Markup {
    let title = format!("{} - CV", cv.personal_info.name);
    let experience: Vec<FormattedExperience> = cv
        .experience
        .iter()
        .map(|exp| FormattedExperience::new(exp, today))
        .collect();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(SITE_CONFIG.description);
                title { (title) }
                style { (PreEscaped(PRINT_CSS)) }
                script type="application/ld+json" { (PreEscaped(json_ld(breadcrumbs))) }
            }
            body {
                nav.site-nav { (render_nav(SITE_CONFIG.nav)) }
                (render_breadcrumbs(breadcrumbs))
                header {
                    h1 { (cv.personal_info.name) }
                    p.muted { (cv.personal_info.title) " · " (cv.personal_info.location) }
                    p.muted {
                        a href=(cv.personal_info.linkedin) { "LinkedIn" }
                        " · "
                        a href=(cv.personal_info.github) { "GitHub" }
                        " · " (cv.personal_info.ham_radio)
                    }
                    p { (cv.personal_info.summary) }
                }
                section.experience {
                    h2 { "Experience" }
                    @for role in &experience {
                        div.role {
                            h3 { (role.experience.title) " — " (role.experience.company) }
                            p.muted {
                                (role.date_range)
                                " (" (format_years(role.duration)) ", "
                                (employment_label(role.experience.kind)) ")"
                            }
                            ul {
                                @for item in &role.experience.responsibilities {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
                @if !cv.leadership.is_empty() {
                    section.leadership {
                        h2 { "Leadership" }
                        @for group in &cv.leadership {
                            h3 { (group.category) }
                            ul {
                                @for role in &group.roles {
                                    li {
                                        strong { (role.title) } ", " (role.organization)
                                        @if let Some(description) = &role.description {
                                            " — " (description)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                @if !cv.certifications.is_empty() {
                    section.certifications {
                        h2 { "Certifications" }
                        ul { @for cert in &cv.certifications { li { (cert) } } }
                    }
                }
                section.skills {
                    h2 { "Skills" }
                    (skill_row("Systems", &cv.skills.systems))
                    (skill_row("Security", &cv.skills.security))
                    (skill_row("Specializations", &cv.skills.specializations))
                }
                @if !cv.competencies.is_empty() {
                    section.competencies {
                        h2 { "Core Competencies" }
                        @for competency in &cv.competencies {
                            h3 { (competency.title) }
                            ul { @for item in &competency.items { li { (item) } } }
                        }
                    }
                }
            }
        }
    }
}

fn render_nav(links: &[NavLink]) -> Markup {
    html! {
        @for link in links {
            a href=(link.href) { (link.name) }
        }
    }
}

fn render_breadcrumbs(crumbs: &[BreadcrumbItem]) -> Markup {
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            ol {
                @for crumb in crumbs {
                    @match (&crumb.href, crumb.is_current()) {
                        (Some(href), false) => li { a href=(href) { (crumb.label) } },
                        _ => li aria-current="page" { (crumb.label) },
                    }
                }
            }
        }
    }
}

fn skill_row(label: &str, skills: &[String]) -> Markup {
    html! {
        @if !skills.is_empty() {
            p { strong { (label) ": " } (skills.join(", ")) }
        }
    }
}

/// JSON-LD for a `<script>` body; `</` is escaped so labels cannot close
/// the element early.
fn json_ld(crumbs: &[BreadcrumbItem]) -> String {
    serde_json::to_string(&breadcrumb_structured_data(crumbs))
        .unwrap_or_default()
        .replace("</", "<\\/")
}

fn format_years(years: f64) -> String {
    if years == 1.0 {
        "1 yr".to_string()
    } else {
        format!("{years} yrs")
    }
}

fn employment_label(kind: EmploymentType) -> &'static str {
    match kind {
        EmploymentType::FullTime => "Full-time",
        EmploymentType::Consulting => "Consulting",
        EmploymentType::PartTime => "Part-time",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{generate_content_breadcrumbs, ContentType};
    use crate::test_helpers::sample_cv;

    fn page() -> String {
        let crumbs = generate_content_breadcrumbs(ContentType::Cv, None, Some("print"));
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        render_cv_page(&sample_cv(), &crumbs, today).into_string()
    }

    #[test]
    fn test_page_has_title_and_sections() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Austin Cole - CV</title>"));
        assert!(html.contains("Experience"));
        assert!(html.contains("January 2020 - Present (5 yrs, Full-time)"));
        assert!(html.contains("CISSP"));
    }

    #[test]
    fn test_breadcrumbs_and_json_ld() {
        let html = page();
        assert!(html.contains(r#"<a href="/cv/">CV</a>"#));
        assert!(html.contains(r#"<li aria-current="page">Print Version</li>"#));
        assert!(html.contains(r#""@type":"BreadcrumbList""#));
    }

    #[test]
    fn test_cv_text_is_escaped() {
        let mut cv = sample_cv();
        cv.personal_info.summary = "<script>alert(1)</script>".into();
        let crumbs = vec![BreadcrumbItem::link("</script><b>", "/cv/")];
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let html = render_cv_page(&cv, &crumbs, today).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#""name":"<\/script><b>""#));
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(1.0), "1 yr");
        assert_eq!(format_years(4.5), "4.5 yrs");
        assert_eq!(format_years(5.0), "5 yrs");
    }
}
