// CV record: loading, date formatting, and the JSON payloads consumed by the
// offline PDF script. Actual PDF rendering never happens in this service.

pub mod formatting;
pub mod handlers;
pub mod loader;
pub mod pdf;

pub use loader::load_cv_data;
