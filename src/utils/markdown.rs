/// Markdown rendering for the profile description
use pulldown_cmark::{html, Options, Parser};

/// Render a profile description to safe HTML
/// Uses pulldown-cmark for parsing and ammonia for sanitization
pub fn render_description(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    sanitize_html(&html_output)
}

/// Sanitize HTML using ammonia
/// Descriptions are user-written, so only inline formatting, lists, quotes
/// and links survive. No images, no headings.
pub fn sanitize_html(html: &str) -> String {
    use ammonia::Builder;
    use maplit::{hashmap, hashset};

    Builder::default()
        .tags(hashset![
            "p", "br", "hr",
            "strong", "em", "s", "del",
            "a",
            "ul", "ol", "li",
            "blockquote",
            "code", "pre",
        ])
        // "rel" is left to link_rel()
        .tag_attributes(hashmap![
            "a" => hashset!["href", "title"],
        ])
        .url_schemes(hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer nofollow"))
        .clean(html)
        .to_string()
}
