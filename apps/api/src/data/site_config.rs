use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Brand colors, kept in sync with the stylesheet palette.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSettings {
    pub posts_per_page: usize,
    pub show_featured_posts: bool,
    pub show_tags: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub author: &'static str,
    pub nav: &'static [NavLink],
    pub brand: BrandColors,
    pub tagline: &'static str,
    pub blog: BlogSettings,
}

pub const SITE_CONFIG: SiteConfig = SiteConfig {
    name: "Austin Cole",
    title: "Austin Cole - Deputy IT Director & CISO",
    description: "Deputy IT Director, CISO, Emergency Management Leader, Ham Radio Operator, \
                  and ITDRC Volunteer from Genesee, Idaho",
    url: "https://austincole.us",
    author: "Austin Cole",
    nav: &[
        NavLink {
            name: "Home",
            href: "/",
        },
        NavLink {
            name: "About",
            href: "/about/",
        },
        NavLink {
            name: "CV",
            href: "/cv/",
        },
        NavLink {
            name: "Blog",
            href: "/blog/",
        },
        NavLink {
            name: "Testimonials",
            href: "/testimonials/",
        },
        NavLink {
            name: "Contact",
            href: "/contact/",
        },
    ],
    brand: BrandColors {
        primary: "#2563eb",
        primary_dark: "#60a5fa",
        secondary: "#64748b",
        accent: "#f59e0b",
    },
    tagline: "Deputy IT Director & CISO | Emergency Management Leader | Ham Radio Operator | ITDRC Volunteer",
    blog: BlogSettings {
        posts_per_page: 10,
        show_featured_posts: true,
        show_tags: true,
    },
};
