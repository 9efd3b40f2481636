//! Markdown rendering and HTML sanitization.
//!
//! The transform stage is two external collaborators run back to back:
//! comrak converts Markdown into HTML, and ammonia strips anything unsafe
//! from that HTML. Only the output of the sanitize step can become a
//! [`TrustedHtml`] value.

use serde::Serialize;

/// Sanitized HTML, safe to interpolate into a page template without escaping.
///
/// The field is private and the only constructor is [`sanitize`], so rendered
/// but unsanitized HTML can never be passed off as trusted markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Convert raw Markdown into HTML.
///
/// Raw HTML embedded in the input passes through untouched; stripping
/// dangerous markup is the sanitize step's job.
pub fn render(markdown: &str) -> String {
    let mut options = comrak::Options::default();
    options.render.r#unsafe = true;
    comrak::markdown_to_html(markdown, &options)
}

/// Strip unsafe markup under a permissive user-generated-content policy:
/// common structural and formatting tags stay, executable content goes.
pub fn sanitize(html: &str) -> TrustedHtml {
    TrustedHtml(ammonia::clean(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_produces_html_headings() {
        assert_eq!(render("# Hello\n"), "<h1>Hello</h1>\n");
    }

    #[test]
    fn raw_html_passes_through_the_renderer() {
        let html = render("<script>alert(\"hi\")</script>\n");
        assert!(html.contains("<script>"), "renderer should not escape raw HTML: {html}");
    }

    #[test]
    fn sanitize_strips_script_tags() {
        let safe = sanitize("<p>ok</p>\n<script>alert(\"hi\")</script>\n");
        assert!(!safe.as_str().contains("<script"));
        assert!(safe.as_str().contains("<p>ok</p>"));
    }

    #[test]
    fn sanitize_keeps_formatting_tags() {
        let safe = sanitize("<p><strong>bold</strong> and <em>italic</em></p>\n");
        assert_eq!(
            safe.as_str(),
            "<p><strong>bold</strong> and <em>italic</em></p>\n"
        );
    }

    #[test]
    fn sanitize_strips_event_handler_attributes() {
        let safe = sanitize("<p onclick=\"alert(1)\">text</p>");
        assert_eq!(safe.as_str(), "<p>text</p>");
    }

    #[test]
    fn rendered_markdown_with_embedded_script_ends_up_clean() {
        let safe = sanitize(&render("# Title\n\n<script>alert(1)</script>\n"));
        assert!(safe.as_str().contains("<h1>Title</h1>"));
        assert!(!safe.as_str().contains("<script"));
    }
}
