//! Minimal markdown for devotional readings: a leading `## ` heading,
//! `**strong**`, `__emphasis__` and line breaks. Anything else passes
//! through as text.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A## (.*)").expect("heading regex"));
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*)\*\*").expect("strong regex"));
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*)__").expect("em regex"));

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render devotional markdown to an HTML fragment.
pub fn render_markdown(text: &str) -> String {
    let html = escape_html(text);
    let html = HEADING_RE.replace(&html, r#"<h2 class="devotional-heading">$1</h2>"#);
    let html = STRONG_RE.replace_all(&html, "<strong>$1</strong>");
    let html = EMPHASIS_RE.replace_all(&html, "<em>$1</em>");
    html.replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn heading_only_at_start_of_text() {
        let html = render_markdown("## Day 1\n\nBody\n## Not a heading");
        assert_eq!(
            html,
            r#"<h2 class="devotional-heading">Day 1</h2><br /><br />Body<br />## Not a heading"#
        );
    }

    #[test]
    fn strong_and_emphasis() {
        assert_eq!(
            render_markdown("**Scripture:** read __slowly__"),
            "<strong>Scripture:</strong> read <em>slowly</em>"
        );
    }

    #[test]
    fn strong_is_greedy_within_a_line() {
        assert_eq!(
            render_markdown("**a** and **b**\n**c**"),
            "<strong>a** and **b</strong><br /><strong>c</strong>"
        );
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(render_markdown("1 < 2 & 3"), "1 &lt; 2 &amp; 3");
    }
}
