use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::reading_time::{
    calculate_markdown_reading_time, format_reading_time_with_context, reading_time_category,
    ReadingTime, ReadingTimeCategory,
};
use crate::content::schema::{BlogPostData, TestimonialCategory, TestimonialData};
use crate::content::{paginate, BlogPost, PostFilter};
use crate::data::SITE_CONFIG;
use crate::errors::AppError;
use crate::navigation::{
    breadcrumb_structured_data, generate_blog_breadcrumbs, generate_content_breadcrumbs,
    BreadcrumbItem, BreadcrumbList, ContentType,
};
use crate::render::markdown::render_markdown;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub tag: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub page: Option<usize>,
}

impl BlogQuery {
    fn filter(&self) -> PostFilter {
        PostFilter {
            tag: self.tag.clone().filter(|t| !t.is_empty()),
            featured_only: self.featured,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDate,
    pub tags: Vec<String>,
    pub featured: bool,
    pub reading_time: ReadingTime,
    pub reading_category: ReadingTimeCategory,
    pub reading_label: String,
}

impl From<&BlogPost> for PostSummary {
    fn from(post: &BlogPost) -> Self {
        let reading_time = calculate_markdown_reading_time(&post.body);
        Self {
            slug: post.slug.clone(),
            title: post.data.title.clone(),
            description: post.data.description.clone(),
            pub_date: post.data.pub_date,
            tags: post.data.tags.clone(),
            featured: post.data.featured,
            reading_category: reading_time_category(reading_time.minutes),
            reading_label: format_reading_time_with_context(&reading_time, false),
            reading_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    pub posts: Vec<PostSummary>,
    pub tags: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub structured_data: BreadcrumbList,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub slug: String,
    #[serde(flatten)]
    pub data: BlogPostData,
    pub reading_time: ReadingTime,
    pub reading_label: String,
    pub html: String,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub structured_data: BreadcrumbList,
}

#[derive(Debug, Deserialize)]
pub struct TestimonialQuery {
    pub category: Option<TestimonialCategory>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct TestimonialView {
    pub slug: String,
    #[serde(flatten)]
    pub data: TestimonialData,
    pub html: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsResponse {
    pub testimonials: Vec<TestimonialView>,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    pub structured_data: BreadcrumbList,
}

/// GET /api/blog
pub async fn handle_list_posts(
    State(state): State<AppState>,
    query: Result<Query<BlogQuery>, QueryRejection>,
) -> Result<Json<BlogListResponse>, AppError> {
    let Query(query) = query?;
    let filter = query.filter();
    let matching = state.content.filter_posts(&filter);
    let page = query.page.unwrap_or(1).max(1);
    let (visible, total_pages) = paginate(&matching, page, SITE_CONFIG.blog.posts_per_page);

    let breadcrumbs = generate_blog_breadcrumbs(filter.tag.as_deref(), filter.featured_only, None);
    Ok(Json(BlogListResponse {
        posts: visible.iter().map(|p| PostSummary::from(*p)).collect(),
        tags: state
            .content
            .tags()
            .into_iter()
            .map(str::to_string)
            .collect(),
        page,
        total_pages,
        structured_data: breadcrumb_structured_data(&breadcrumbs),
        breadcrumbs,
    }))
}

/// GET /api/blog/*slug
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<BlogQuery>, QueryRejection>,
) -> Result<Json<PostResponse>, AppError> {
    let Query(query) = query?;
    let post = state
        .content
        .post(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Post '{slug}' not found")))?;

    let filter = query.filter();
    let breadcrumbs = generate_blog_breadcrumbs(
        filter.tag.as_deref(),
        filter.featured_only,
        Some(&post.data.title),
    );
    let reading_time = calculate_markdown_reading_time(&post.body);

    Ok(Json(PostResponse {
        slug: post.slug.clone(),
        data: post.data.clone(),
        reading_label: format_reading_time_with_context(&reading_time, true),
        reading_time,
        html: render_markdown(&post.body),
        structured_data: breadcrumb_structured_data(&breadcrumbs),
        breadcrumbs,
    }))
}

/// GET /api/testimonials
pub async fn handle_list_testimonials(
    State(state): State<AppState>,
    query: Result<Query<TestimonialQuery>, QueryRejection>,
) -> Result<Json<TestimonialsResponse>, AppError> {
    let Query(query) = query?;
    let selected = if query.featured {
        state.content.featured_testimonials(query.category)
    } else {
        state.content.testimonials(query.category)
    };
    let testimonials = selected
        .into_iter()
        .map(|t| TestimonialView {
            slug: t.slug.clone(),
            data: t.data.clone(),
            html: render_markdown(&t.body),
        })
        .collect();

    let breadcrumbs = generate_content_breadcrumbs(ContentType::Testimonials, None, None);
    Ok(Json(TestimonialsResponse {
        testimonials,
        structured_data: breadcrumb_structured_data(&breadcrumbs),
        breadcrumbs,
    }))
}
