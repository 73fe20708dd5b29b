//! Notes Markdown Rendering
//!
//! pulldown-cmark with strikethrough, tables and task lists. Raw HTML in
//! the source is shown as text, and link or image targets using a script
//! or inline-data scheme are replaced with `#`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render notes to HTML safe for `inner_html`
pub fn render_notes(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
            Event::Start(Tag::Link {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if is_script_url(&dest_url) => {
            Event::Start(Tag::Image {
                link_type,
                dest_url: CowStr::Borrowed("#"),
                title,
                id,
            })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

fn is_script_url(url: &str) -> bool {
    // browsers ignore embedded whitespace and control characters in the scheme
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| compact.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_notes("**Salary** asked\n\n- [x] thank-you mail");
        assert!(html.contains("<strong>Salary</strong>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_notes("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_notes("[click](javascript:alert(1))");
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_other_dangerous_schemes_are_neutralised() {
        let html = render_notes("[a](VBScript:msgbox) [b](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!html.to_ascii_lowercase().contains("vbscript:"));
        assert!(!html.contains("data:"));
        assert_eq!(html.matches("href=\"#\"").count(), 2);
    }

    #[test]
    fn test_image_sources_are_filtered() {
        let html = render_notes("![x](javascript:alert(1)) ![logo](https://example.com/logo.png)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("src=\"#\""));
        assert!(html.contains("src=\"https://example.com/logo.png\""));
    }
}
