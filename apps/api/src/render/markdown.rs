use pulldown_cmark::{html as md_html, Options, Parser};

/// Renders a markdown body to HTML with tables, footnotes and strikethrough.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}
