//! Markdown rendering
//!
//! Renders a deliberately restricted markdown dialect (headings, bold,
//! italic, inline code, links, flat lists, paragraphs) through a fixed
//! sequence of text rewrites. The order is load-bearing: escaping runs
//! first over the whole input so later-inserted markup is never
//! re-escaped, block rules run before inline rules see their output,
//! and list grouping runs before paragraph wrapping. No tables,
//! blockquotes, images, or nested lists.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref H3_RE: Regex = Regex::new(r"(?m)^###\s+(.*)$").unwrap();
    static ref H2_RE: Regex = Regex::new(r"(?m)^##\s+(.*)$").unwrap();
    static ref H1_RE: Regex = Regex::new(r"(?m)^#\s+(.*)$").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC_RE: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref CODE_RE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap();
    static ref LIST_ITEM_RE: Regex = Regex::new(r"(?m)^\s*[-*]\s+(.*)$").unwrap();
    static ref PARA_SPLIT_RE: Regex = Regex::new(r"\n{2,}").unwrap();
    static ref BLOCK_TAG_RE: Regex = Regex::new(r"^\s*<(h1|h2|h3|ul)").unwrap();
    static ref LOOSE_LI_RE: Regex = Regex::new(r"^\s*<li").unwrap();
}

const H1_SUB: &str = r#"<h1 class="text-2xl sm:text-3xl font-bold mt-10 mb-4">${1}</h1>"#;
const H2_SUB: &str = r#"<h2 class="text-xl sm:text-2xl font-bold mt-8 mb-3">${1}</h2>"#;
const H3_SUB: &str = r#"<h3 class="text-lg sm:text-xl font-semibold mt-6 mb-2">${1}</h3>"#;
const CODE_SUB: &str =
    r#"<code class="bg-zinc-900/70 border border-zinc-800 rounded px-1 py-0.5">${1}</code>"#;
const LINK_SUB: &str =
    r#"<a class="text-blue-400 hover:text-blue-300 underline" href="${2}">${1}</a>"#;
const LI_SUB: &str = r#"<li class="my-1">${1}</li>"#;
const UL_CLASS: &str = "list-disc pl-12 my-4";
const UL_LOOSE_CLASS: &str = "list-disc pl-6 my-4";
const P_CLASS: &str = "text-gray-300 leading-7";

/// Render a post body to an HTML fragment.
///
/// The only sanitization is the initial entity escape: it stops raw tag
/// injection from body text, but link `href` values are emitted
/// verbatim with no scheme validation. Content is assumed to be
/// author-controlled.
pub fn render_markdown(body: &str) -> String {
    let html = escape_html(body);
    let html = replace_headings(&html);
    let html = replace_bold(&html);
    let html = replace_italic(&html);
    let html = replace_inline_code(&html);
    let html = replace_links(&html);
    let html = replace_list_items(&html);
    let html = group_list_items(&html);
    wrap_paragraphs(&html)
}

/// Escape `&`, `<`, `>` over the entire input. Runs before any rule
/// inserts markup, so user content can never produce a live tag.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `###`/`##`/`#` lines, longest prefix first so `###` is never eaten
/// by the `#` rule.
fn replace_headings(text: &str) -> String {
    let text = H3_RE.replace_all(text, H3_SUB);
    let text = H2_RE.replace_all(&text, H2_SUB);
    H1_RE.replace_all(&text, H1_SUB).into_owned()
}

/// `**text**`, non-greedy, no nesting.
fn replace_bold(text: &str) -> String {
    BOLD_RE
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// `*text*`, non-greedy. Runs after the bold rule so the double
/// asterisks are already consumed.
fn replace_italic(text: &str) -> String {
    ITALIC_RE.replace_all(text, "<em>${1}</em>").into_owned()
}

/// `` `text` ``
fn replace_inline_code(text: &str) -> String {
    CODE_RE.replace_all(text, CODE_SUB).into_owned()
}

/// `[label](url)`. The url is emitted as-is.
fn replace_links(text: &str) -> String {
    LINK_RE.replace_all(text, LINK_SUB).into_owned()
}

/// Lines starting with `-` or `*` plus whitespace become `<li>`
/// elements, one per line.
fn replace_list_items(text: &str) -> String {
    LIST_ITEM_RE.replace_all(text, LI_SUB).into_owned()
}

/// Wrap runs of adjacent `<li>` lines in a single `<ul>`.
///
/// A run at the very end of the input with no trailing line break is
/// left loose; the paragraph pass wraps it instead.
fn group_list_items(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].starts_with("<li") {
            let start = i;
            while i < lines.len() && lines[i].starts_with("<li") {
                i += 1;
            }
            let run = lines[start..i].join("\n");
            if i < lines.len() {
                out.push(format!(r#"<ul class="{}">{}</ul>"#, UL_CLASS, run));
            } else {
                out.push(run);
            }
        } else {
            out.push(lines[i].to_string());
            i += 1;
        }
    }
    out.join("\n")
}

/// Split on blank-line runs and wrap each block. Blocks already
/// starting with a block-level tag pass through; a loose `<li>` block
/// gets its `<ul>` here; everything else becomes a `<p>` with interior
/// newlines turned into `<br/>`.
fn wrap_paragraphs(text: &str) -> String {
    PARA_SPLIT_RE
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            if BLOCK_TAG_RE.is_match(block) {
                block.to_string()
            } else if LOOSE_LI_RE.is_match(block) {
                format!(r#"<ul class="{}">{}</ul>"#, UL_LOOSE_CLASS, block)
            } else {
                format!(
                    r#"<p class="{}">{}</p>"#,
                    P_CLASS,
                    block.replace('\n', "<br/>")
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("   \n\n  "), "");
    }

    #[test]
    fn test_heading_levels() {
        let html = render_markdown("# One\n\n## Two\n\n### Three");
        assert!(html.contains(">One</h1>"));
        assert!(html.contains(">Two</h2>"));
        assert!(html.contains(">Three</h3>"));
    }

    #[test]
    fn test_heading_without_space_stays_literal() {
        let html = render_markdown("#NoSpace");
        assert!(!html.contains("<h1"));
        assert!(html.contains("#NoSpace"));
    }

    #[test]
    fn test_bold_and_italic() {
        let html = render_markdown("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong> and <em>italic</em>"));
    }

    #[test]
    fn test_unmatched_markers_stay_literal() {
        let html = render_markdown("a single * star and an `open tick");
        assert!(!html.contains("<em>"));
        assert!(!html.contains("<code"));
        assert!(html.contains("*"));
        assert!(html.contains("`"));
    }

    #[test]
    fn test_inline_code() {
        let html = render_markdown("run `cargo test` now");
        assert!(html.contains("<code"));
        assert!(html.contains(">cargo test</code>"));
    }

    #[test]
    fn test_link() {
        let html = render_markdown("[home](https://example.com)");
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(">home</a>"));
    }

    #[test]
    fn test_link_href_is_not_validated() {
        // Known limitation: schemes are not checked.
        let html = render_markdown("[x](javascript:alert%281%29)");
        assert!(html.contains(r#"href="javascript:alert%281%29""#));
    }

    #[test]
    fn test_list_single_ul() {
        let html = render_markdown("- a\n- b");
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains(">a</li>"));
        assert!(html.contains(">b</li>"));
    }

    #[test]
    fn test_list_followed_by_paragraph() {
        let html = render_markdown("- a\n- b\n\nafter");
        assert_eq!(html.matches("<ul").count(), 1);
        assert!(html.contains("<p"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_star_list_items() {
        let html = render_markdown("* first\n* second\n");
        assert_eq!(html.matches("<ul").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn test_heading_then_paragraphs() {
        let html = render_markdown("# Title\n\nParagraph one.\n\nParagraph two.");
        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<p").count(), 2);
        assert!(html.contains("Paragraph one."));
        assert!(html.contains("Paragraph two."));
    }

    #[test]
    fn test_single_newline_becomes_br() {
        let html = render_markdown("line one\nline two");
        assert_eq!(html.matches("<p").count(), 1);
        assert!(html.contains("line one<br/>line two"));
    }

    #[test]
    fn test_script_tag_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_ampersand_escaped_once() {
        let html = render_markdown("salt & pepper");
        assert!(html.contains("salt &amp; pepper"));
        assert!(!html.contains("&amp;amp;"));
    }

    #[test]
    fn test_inline_rules_inside_list_items() {
        let html = render_markdown("- **bold** item\n- `code` item\n");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(">code</code>"));
    }

    #[test]
    fn test_rule_order_escape_before_headings() {
        let html = render_markdown("# A & B");
        assert!(html.contains(">A &amp; B</h1>"));
    }
}
