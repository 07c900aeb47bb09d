// Server-rendered HTML: the printable CV page and markdown bodies.

pub mod cv_page;
pub mod handlers;
pub mod markdown;
