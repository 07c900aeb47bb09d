//! Reading-time estimation for posts.
//!
//! Markup is stripped first (HTML tags, or markdown syntax for the markdown
//! entry point), then words are counted at a fixed 200 words per minute and
//! rounded up to whole minutes, never below one.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadingTime {
    pub text: String,
    pub minutes: usize,
    pub words: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingTimeCategory {
    Quick,
    Medium,
    Long,
}

impl ReadingTimeCategory {
    pub fn label(self) -> &'static str {
        match self {
            ReadingTimeCategory::Quick => "⚡ Quick read",
            ReadingTimeCategory::Medium => "📖 Medium read",
            ReadingTimeCategory::Long => "📚 Long read",
        }
    }
}

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| re(r"<[^>]*>"));

/// Markdown rewrites applied in order; `$1` keeps the captured text.
static MARKDOWN_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        // frontmatter, fenced and inline code
        (re(r"(?s)\A---.*?---"), ""),
        (re(r"(?s)```.*?```"), ""),
        (re(r"`[^`]+`"), ""),
        (re(r"(?m)^#+\s+"), ""),
        // link text survives
        (re(r"\[([^\]]+)\]\([^)]+\)"), "$1"),
        (re(r"\*\*([^*]+)\*\*"), "$1"),
        (re(r"\*([^*]+)\*"), "$1"),
        (re(r"__([^_]+)__"), "$1"),
        (re(r"_([^_]+)_"), "$1"),
        // list markers and blockquotes
        (re(r"(?m)^[-*+]\s+"), ""),
        (re(r"(?m)^\d+\.\s+"), ""),
        (re(r"(?m)^>\s+"), ""),
        // horizontal rules
        (re(r"(?m)^---+$"), ""),
        (re(r"(?m)^\*\*\*+$"), ""),
    ]
});

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("reading-time pattern is valid")
}

/// Estimates reading time for plain text or HTML.
pub fn calculate_reading_time(content: &str) -> ReadingTime {
    let stripped = HTML_TAG.replace_all(content, "");
    let words = stripped.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);

    ReadingTime {
        text: format!("{minutes} min read"),
        minutes,
        words,
    }
}

/// Estimates reading time for markdown, ignoring frontmatter, code and syntax.
pub fn calculate_markdown_reading_time(markdown: &str) -> ReadingTime {
    let stripped = MARKDOWN_RULES
        .iter()
        .fold(markdown.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        });
    calculate_reading_time(&stripped)
}

pub fn reading_time_category(minutes: usize) -> ReadingTimeCategory {
    match minutes {
        0..=3 => ReadingTimeCategory::Quick,
        4..=10 => ReadingTimeCategory::Medium,
        _ => ReadingTimeCategory::Long,
    }
}

/// `"⚡ Quick read • 2 min read"`, optionally followed by `" • N words"`.
pub fn format_reading_time_with_context(
    reading_time: &ReadingTime,
    include_word_count: bool,
) -> String {
    let category = reading_time_category(reading_time.minutes);
    let mut formatted = format!("{} • {}", category.label(), reading_time.text);
    if include_word_count {
        formatted.push_str(&format!(" • {} words", reading_time.words));
    }
    formatted
}
