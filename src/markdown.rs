//! Markdown Rendering
//!
//! Card descriptions are written in Markdown and previewed in the detail
//! dialog. Descriptions come from other board members, so raw HTML in the
//! source is shown as text instead of being injected into the page, and
//! link or image targets with a scheme other than http, https or mailto
//! are replaced with `#`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Link { link_type, dest_url: safe_url(dest_url), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Image { link_type, dest_url: safe_url(dest_url), title, id })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        log::warn!("dropped link target {:?}", &*url);
        CowStr::Borrowed("#")
    }
}

/// Relative URLs, or absolute ones with an allowed scheme.
/// Browsers ignore whitespace and control characters inside a scheme, so
/// those are stripped before looking for one.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    match cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_markdown("**Ship** it\n\n- [x] tests");
        assert!(html.contains("<strong>Ship</strong>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));

        let html = render_markdown("![x](data:text/html;base64,PHNjcmlwdD4=) [y](JaVaScRiPt:alert(1))");
        assert!(!html.contains("data:"));
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
    }

    #[test]
    fn test_ordinary_links_are_kept() {
        let html = render_markdown("[docs](https://example.com/a?b=1) [mail](mailto:ana@example.com) [rel](/boards/1#top)");
        assert!(html.contains(r#"href="https://example.com/a?b=1""#));
        assert!(html.contains(r#"href="mailto:ana@example.com""#));
        assert!(html.contains(r#"href="/boards/1#top""#));
    }

    #[test]
    fn test_url_scheme_detection() {
        assert!(is_safe_url("notes/today.md"));
        assert!(is_safe_url("?page=2"));
        assert!(is_safe_url("HTTPS://example.com"));
        assert!(!is_safe_url(" java\tscript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox(1)"));
    }
}
