pub mod breadcrumbs;
pub mod handlers;

pub use breadcrumbs::{
    breadcrumb_structured_data, generate_blog_breadcrumbs, generate_breadcrumbs,
    generate_content_breadcrumbs, BreadcrumbItem, BreadcrumbList, ContentType,
};
