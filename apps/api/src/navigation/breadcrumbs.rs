//! Breadcrumb trails for every page type, plus their schema.org projection.
//!
//! Every function here is a pure mapping from route/filter state to an
//! ordered crumb list. By convention the last crumb is `current` and has no
//! link.

use serde::{Deserialize, Serialize};

/// Labels for known routes; anything else is title-cased from its segment.
const ROUTE_LABELS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about/", "About"),
    ("/cv/", "CV"),
    ("/cv-print/", "CV Print"),
    ("/contact/", "Contact"),
    ("/testimonials/", "Testimonials"),
    ("/blog/", "Blog"),
];

const BLOG_PREFIX: &str = "/blog/";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            current: None,
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            current: Some(true),
        }
    }

    pub fn is_current(&self) -> bool {
        self.current.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Testimonials,
    Cv,
}

/// Crumbs for an arbitrary route. `custom_items`, when given, are returned
/// as-is.
pub fn generate_breadcrumbs(
    current_path: &str,
    current_title: Option<&str>,
    custom_items: Option<Vec<BreadcrumbItem>>,
) -> Vec<BreadcrumbItem> {
    if let Some(items) = custom_items {
        return items;
    }

    if current_path == "/" {
        return vec![BreadcrumbItem {
            label: "Home".to_string(),
            href: Some("/".to_string()),
            current: Some(true),
        }];
    }

    if current_path.starts_with(BLOG_PREFIX) && current_path != BLOG_PREFIX {
        return vec![
            BreadcrumbItem::link("Blog", BLOG_PREFIX),
            BreadcrumbItem::current(current_title.unwrap_or("Post")),
        ];
    }

    let segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();
    let mut current_url = String::new();
    let mut crumbs = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        current_url.push('/');
        current_url.push_str(segment);
        current_url.push('/');

        let is_last = index == segments.len() - 1;
        let label = route_label(&current_url)
            .map(str::to_string)
            .unwrap_or_else(|| format_segment_label(segment));

        crumbs.push(BreadcrumbItem {
            label,
            href: (!is_last).then(|| current_url.clone()),
            current: Some(is_last),
        });
    }

    crumbs
}

/// Crumbs for the blog listing and posts reached from it, reflecting any
/// active tag or featured-only filter.
pub fn generate_blog_breadcrumbs(
    selected_tag: Option<&str>,
    show_featured_only: bool,
    post_title: Option<&str>,
) -> Vec<BreadcrumbItem> {
    let mut crumbs = vec![BreadcrumbItem::link("Blog", BLOG_PREFIX)];
    let selected_tag = selected_tag.filter(|t| !t.is_empty());

    let filter = match (selected_tag, show_featured_only) {
        (Some(tag), true) => Some((
            format!("Featured: {tag}"),
            format!("/blog/?tag={}&featured=true", urlencoding::encode(tag)),
        )),
        (Some(tag), false) => Some((
            tag.to_string(),
            format!("/blog/?tag={}", urlencoding::encode(tag)),
        )),
        (None, true) => Some(("Featured".to_string(), "/blog/?featured=true".to_string())),
        (None, false) => None,
    };

    match (filter, post_title) {
        (Some((label, _)), None) => crumbs.push(BreadcrumbItem::current(label)),
        (Some((label, href)), Some(title)) => {
            crumbs.push(BreadcrumbItem::link(label, href));
            crumbs.push(BreadcrumbItem::current(title));
        }
        (None, Some(title)) => crumbs.push(BreadcrumbItem::current(title)),
        (None, None) => crumbs[0].current = Some(true),
    }

    crumbs
}

/// Crumbs for the testimonials and CV sections. The CV `print` variant adds
/// a trailing "Print Version" crumb.
pub fn generate_content_breadcrumbs(
    content_type: ContentType,
    item_title: Option<&str>,
    variant: Option<&str>,
) -> Vec<BreadcrumbItem> {
    let (root, child) = match content_type {
        ContentType::Testimonials => (
            BreadcrumbItem::link("Testimonials", "/testimonials/"),
            item_title.map(str::to_string),
        ),
        ContentType::Cv => (
            BreadcrumbItem::link("CV", "/cv/"),
            (variant == Some("print")).then(|| "Print Version".to_string()),
        ),
    };

    let mut crumbs = vec![root];
    match child {
        Some(label) => crumbs.push(BreadcrumbItem::current(label)),
        None => crumbs[0].current = Some(true),
    }
    crumbs
}

/// schema.org `BreadcrumbList` JSON-LD.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Projects crumbs onto a `BreadcrumbList`, keeping only linked crumbs and
/// numbering them from 1.
pub fn breadcrumb_structured_data(crumbs: &[BreadcrumbItem]) -> BreadcrumbList {
    let item_list_element = crumbs
        .iter()
        .filter_map(|crumb| crumb.href.as_ref().map(|href| (crumb, href)))
        .enumerate()
        .map(|(index, (crumb, href))| ListItem {
            kind: "ListItem",
            position: index + 1,
            name: crumb.label.clone(),
            item: href.clone(),
        })
        .collect();

    BreadcrumbList {
        context: "https://schema.org",
        kind: "BreadcrumbList",
        item_list_element,
    }
}

fn route_label(url: &str) -> Option<&'static str> {
    ROUTE_LABELS
        .iter()
        .find(|(route, _)| *route == url)
        .map(|(_, label)| *label)
}

/// `incident-response` → `Incident Response`.
fn format_segment_label(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
