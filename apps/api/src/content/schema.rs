use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::frontmatter::{coerce_date, coerce_optional_date};
use crate::data::SITE_CONFIG;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostImage {
    pub src: String,
    pub alt: String,
}

/// Frontmatter of a blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostData {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "coerce_date")]
    pub pub_date: NaiveDate,
    #[serde(
        default,
        deserialize_with = "coerce_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_date: Option<NaiveDate>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PostImage>,
}

fn default_author() -> String {
    SITE_CONFIG.author.to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialCategory {
    Professional,
    Community,
    Personal,
}

/// Frontmatter of a testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestimonialData {
    pub name: String,
    pub title: String,
    pub company: String,
    pub category: TestimonialCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: f64,
}

/// One document of a collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry<T> {
    /// Path relative to the collection root, without extension.
    pub id: String,
    pub slug: String,
    pub data: T,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter::parse_frontmatter;

    #[test]
    fn test_blog_defaults() {
        let data: BlogPostData = parse_frontmatter(
            "title = \"Hello\"\ndescription = \"First post\"\npubDate = 2024-03-01\n",
        )
        .unwrap();
        assert_eq!(data.author, "Austin Cole");
        assert!(data.tags.is_empty());
        assert!(!data.draft);
        assert!(!data.featured);
        assert_eq!(data.updated_date, None);
        assert_eq!(data.image, None);
    }

    #[test]
    fn test_blog_accepts_string_dates_and_image() {
        let data: BlogPostData = parse_frontmatter(
            r#"
title = "Hello"
description = "d"
pubDate = "2024-03-01T12:00:00Z"
updatedDate = "2024-04-02"
author = "Guest"
tags = ["security", "radio"]
featured = true
image = { src = "/img/a.png", alt = "Antenna" }
"#,
        )
        .unwrap();
        assert_eq!(data.pub_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(data.updated_date, NaiveDate::from_ymd_opt(2024, 4, 2));
        assert_eq!(data.author, "Guest");
        assert!(data.featured);
        assert_eq!(data.image.unwrap().alt, "Antenna");
    }

    #[test]
    fn test_blog_requires_title() {
        let result: Result<BlogPostData, _> =
            parse_frontmatter("description = \"d\"\npubDate = 2024-03-01\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_testimonial_defaults_and_enum() {
        let data: TestimonialData = parse_frontmatter(
            "name = \"Sam\"\ntitle = \"CIO\"\ncompany = \"County\"\ncategory = \"professional\"\n",
        )
        .unwrap();
        assert_eq!(data.category, TestimonialCategory::Professional);
        assert_eq!(data.order, 0.0);
        assert!(!data.featured);

        let base = "name = \"Sam\"\ntitle = \"CIO\"\ncompany = \"County\"\n\
                    category = \"community\"\n";
        let fractional: TestimonialData =
            parse_frontmatter(&format!("{base}order = 1.5\n")).unwrap();
        assert_eq!(fractional.order, 1.5);
        let whole: TestimonialData = parse_frontmatter(&format!("{base}order = 3\n")).unwrap();
        assert_eq!(whole.order, 3.0);

        let bad: Result<TestimonialData, _> = parse_frontmatter(
            "name = \"Sam\"\ntitle = \"CIO\"\ncompany = \"County\"\ncategory = \"family\"\n",
        );
        assert!(bad.is_err());
    }
}
