//! HTML page snapshot tests for determinism and structure.
//!
//! These tests verify that page generation is:
//! - Deterministic (same transcript produces identical output)
//! - Ordered exactly as the transcript (date labels, separators, bubbles)
//! - Properly escaping message text

use chatlog_html::convert_text;
use chatlog_html::parse::IconResolver;

const SAMPLE: &str = "2024年5月1日 9:00 Alice Hello
there
2024年5月1日 9:05 Bob@home Hi!
2024年5月2日 10:00 Alice Bye
";

fn render(text: &str) -> String {
    convert_text(text, &IconResolver::default())
}

/// Extract the part of the page between `<body>` and `</body>`.
fn body_of(html: &str) -> &str {
    let start = html.find("<body>").expect("should contain body") + "<body>".len();
    let end = html.rfind("</body>").expect("should close body");
    &html[start..end]
}

#[test]
fn test_html_output_determinism() {
    let html1 = render(SAMPLE);
    let html2 = render(SAMPLE);
    assert_eq!(html1, html2, "HTML output should be deterministic");
}

#[test]
fn test_html_contains_doctype_and_structure() {
    let html = render(SAMPLE);

    assert!(html.starts_with("<!DOCTYPE html>"), "Should start with DOCTYPE");
    assert!(html.contains("<html lang=\"ja\">"), "Should contain html tag");
    assert!(html.contains("</html>"), "Should close html tag");
    assert!(html.contains("<meta charset=\"UTF-8\">"), "Should declare UTF-8");
    assert!(html.contains("<title>チャットログ</title>"), "Should contain title");
}

#[test]
fn test_html_contains_inline_css_classes() {
    let html = render(SAMPLE);

    assert!(html.contains("<style>"), "Should contain inline style tag");
    for class in [".chat {", ".icon {", ".bubble {", ".meta {"] {
        assert!(html.contains(class), "Should style {}", class);
    }
    assert!(!html.contains("<script"), "Page should not need JavaScript");
}

#[test]
fn test_sample_transcript_fragment_order() {
    let html = render(SAMPLE);
    let body = body_of(&html);

    let expected = [
        "<div class=\"meta\">2024年5月1日</div>",
        "<div class=\"meta\">Alice・9:00</div>",
        "<div>Hello\nthere</div>",
        "<div class=\"meta\">Bob@home・9:05</div>",
        "<div>Hi!</div>",
        "<hr>",
        "<div class=\"meta\">2024年5月2日</div>",
        "<div class=\"meta\">Alice・10:00</div>",
        "<div>Bye</div>",
    ];
    let mut pos = 0;
    for needle in expected {
        let found = body[pos..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
        pos += found + needle.len();
    }

    assert_eq!(body.matches("<hr>").count(), 1);
    assert_eq!(body.matches("<div class=\"chat\">").count(), 3);
}

#[test]
fn test_no_separator_before_first_date() {
    let html = render(SAMPLE);
    let body = body_of(&html);
    let hr = body.find("<hr>").unwrap();
    let first_label = body.find("2024年5月1日").unwrap();
    assert!(first_label < hr);
}

#[test]
fn test_icon_references() {
    let html = render(SAMPLE);
    assert!(html.contains(r#"<img class="icon" src="images/Alice.png" alt="Alice">"#));
    assert!(html.contains(r#"<img class="icon" src="images/Bob.png" alt="Bob@home">"#));
}

#[test]
fn test_html_escapes_message_text() {
    let html = render("2024年5月1日 9:00 Mallory <script>alert('x')</script> & co\n<img onerror=alert(1)>\n");

    assert!(!html.contains("<script>alert"), "Should escape script tags in messages");
    assert!(!html.contains("<img onerror"), "Should escape img tags in messages");
    assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt; &amp; co\n&lt;img onerror=alert(1)&gt;"));
}

#[test]
fn test_existing_entities_are_escaped_once() {
    let html = render("2024年5月1日 9:00 Alice &lt; is already an entity\n");
    assert!(html.contains("<div>&amp;lt; is already an entity</div>"));
}

#[test]
fn test_old_mac_line_endings_split_messages() {
    let html = render("2024年5月1日 9:00 Alice a\rmore\r2024年5月1日 9:01 Bob b");
    assert_eq!(html.matches("<div class=\"chat\">").count(), 2);
    assert!(html.contains("<div>a\nmore</div>"));
    assert!(html.contains("<div class=\"meta\">Bob・9:01</div>"));
}

#[test]
fn test_trailing_header_produces_one_bubble() {
    let html = render("2024年5月1日 9:00 Alice Last words");
    assert_eq!(html.matches("<div class=\"chat\">").count(), 1);
    assert!(html.contains("<div>Last words</div>"));
}

#[test]
fn test_empty_transcript_renders_empty_body() {
    let html = render("");
    assert_eq!(body_of(&html).trim(), "");
}

#[test]
fn test_custom_icon_settings_flow_into_page() {
    let html = convert_text(SAMPLE, &IconResolver::new("avatars", "webp"));
    assert!(html.contains(r#"src="avatars/Alice.webp""#));
    assert!(html.contains(r#"src="avatars/Bob.webp""#));
}
