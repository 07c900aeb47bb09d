// Content collections (blog posts, testimonials) and reading-time estimates.
// Collections are loaded once at startup and queried read-only.

pub mod frontmatter;
pub mod handlers;
pub mod loader;
pub mod reading_time;
pub mod schema;

use std::path::Path;

use tracing::info;

pub use loader::ContentError;
use schema::{BlogPostData, Entry, TestimonialCategory, TestimonialData};

pub type BlogPost = Entry<BlogPostData>;
pub type Testimonial = Entry<TestimonialData>;

/// Filter state of the blog listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    pub tag: Option<String>,
    pub featured_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Collections {
    /// Newest first.
    posts: Vec<BlogPost>,
    /// By `order`, then name.
    testimonials: Vec<Testimonial>,
}

impl Collections {
    pub fn new(mut posts: Vec<BlogPost>, mut testimonials: Vec<Testimonial>) -> Self {
        posts.sort_by(|a, b| {
            b.data
                .pub_date
                .cmp(&a.data.pub_date)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        testimonials.sort_by(|a, b| {
            a.data
                .order
                .total_cmp(&b.data.order)
                .then_with(|| a.data.name.cmp(&b.data.name))
        });
        Self {
            posts,
            testimonials,
        }
    }

    /// Loads `<content_dir>/blog` and `<content_dir>/testimonials`.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let posts = loader::load_collection(&content_dir.join("blog"))?;
        let testimonials = loader::load_collection(&content_dir.join("testimonials"))?;
        let collections = Self::new(posts, testimonials);
        info!(
            "Loaded {} blog posts ({} published) and {} testimonials",
            collections.posts.len(),
            collections.published_posts().count(),
            collections.testimonials.len()
        );
        Ok(collections)
    }

    pub fn published_posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.posts.iter().filter(|p| !p.data.draft)
    }

    pub fn filter_posts(&self, filter: &PostFilter) -> Vec<&BlogPost> {
        self.published_posts()
            .filter(|p| !filter.featured_only || p.data.featured)
            .filter(|p| match &filter.tag {
                Some(tag) => p.data.tags.iter().any(|t| t == tag),
                None => true,
            })
            .collect()
    }

    /// Tags across published posts, sorted and deduplicated.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .published_posts()
            .flat_map(|p| p.data.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// Looks up a published post; drafts are never served.
    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.published_posts().find(|p| p.slug == slug)
    }

    pub fn testimonials(&self, category: Option<TestimonialCategory>) -> Vec<&Testimonial> {
        self.testimonials
            .iter()
            .filter(|t| category.map_or(true, |c| t.data.category == c))
            .collect()
    }

    pub fn featured_testimonials(
        &self,
        category: Option<TestimonialCategory>,
    ) -> Vec<&Testimonial> {
        self.testimonials(category)
            .into_iter()
            .filter(|t| t.data.featured)
            .collect()
    }
}

/// One-based page of `items`, and the total page count (at least one).
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> (&[T], usize) {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return (&[], total_pages);
    }
    let end = (start + per_page).min(items.len());
    (&items[start..end], total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{post, testimonial};

    fn collections() -> Collections {
        Collections::new(
            vec![
                post("older", "2023-01-01", &["radio"], false, false),
                post("newest", "2024-06-01", &["security", "radio"], true, false),
                post("draft", "2024-07-01", &["security"], true, true),
                post("middle", "2024-01-01", &["security"], false, false),
            ],
            vec![
                testimonial("Zed", TestimonialCategory::Community, 1.0, false),
                testimonial("Amy", TestimonialCategory::Professional, 1.0, true),
                testimonial("Bob", TestimonialCategory::Professional, 0.0, false),
            ],
        )
    }

    fn slugs(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_published_posts_newest_first_without_drafts() {
        let c = collections();
        let all: Vec<_> = c.published_posts().collect();
        assert_eq!(slugs(&all), vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_filter_by_tag_and_featured() {
        let c = collections();
        let by_tag = c.filter_posts(&PostFilter {
            tag: Some("security".into()),
            featured_only: false,
        });
        assert_eq!(slugs(&by_tag), vec!["newest", "middle"]);

        let featured_radio = c.filter_posts(&PostFilter {
            tag: Some("radio".into()),
            featured_only: true,
        });
        assert_eq!(slugs(&featured_radio), vec!["newest"]);
    }

    #[test]
    fn test_tags_are_unique_and_sorted() {
        assert_eq!(collections().tags(), vec!["radio", "security"]);
    }

    #[test]
    fn test_drafts_are_not_found_by_slug() {
        let c = collections();
        assert!(c.post("draft").is_none());
        assert_eq!(c.post("middle").unwrap().data.title, "Post middle");
    }

    #[test]
    fn test_testimonials_ordered_and_filtered() {
        let c = collections();
        let names: Vec<_> = c
            .testimonials(None)
            .iter()
            .map(|t| t.data.name.clone())
            .collect();
        assert_eq!(names, vec!["Bob", "Amy", "Zed"]);

        let professional = c.testimonials(Some(TestimonialCategory::Professional));
        assert_eq!(professional.len(), 2);
        assert_eq!(c.featured_testimonials(None)[0].data.name, "Amy");
        assert!(c
            .featured_testimonials(Some(TestimonialCategory::Community))
            .is_empty());
    }

    #[test]
    fn test_fractional_order_sorts_between_whole_numbers() {
        let c = Collections::new(
            vec![],
            vec![
                testimonial("Late", TestimonialCategory::Personal, 2.0, false),
                testimonial("Half", TestimonialCategory::Personal, 1.5, false),
                testimonial("First", TestimonialCategory::Personal, 1.0, false),
            ],
        );
        let names: Vec<_> = c
            .testimonials(None)
            .iter()
            .map(|t| t.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Half", "Late"]);
    }

    #[test]
    fn test_paginate() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 1, 2), (&[1, 2][..], 3));
        assert_eq!(paginate(&items, 3, 2), (&[5][..], 3));
        assert_eq!(paginate(&items, 4, 2).0.len(), 0);
        assert_eq!(paginate::<i32>(&[], 1, 10), (&[][..], 1));
        assert_eq!(paginate(&items, 0, 2).0, &[1, 2]);
    }
}
