// Fixed site-wide records, built at compile time and never mutated.

pub mod personal_info;
pub mod site_config;

pub use personal_info::{PersonalInfo, PERSONAL_INFO};
pub use site_config::{NavLink, SiteConfig, SITE_CONFIG};
