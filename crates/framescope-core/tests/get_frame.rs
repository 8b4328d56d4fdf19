//! End-to-end frame extraction over HTML documents.

use framescope_core::{get_frame, try_get_frame, ButtonAction, FrameError};

const BASE_URL: &str = "https://example.com/frames/poll";

/// Build a page whose head holds the given meta declarations.
fn page(metas: &[(&str, &str, &str)]) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <title>Poll</title>\n");
    for (attr, key, content) in metas {
        html.push_str(&format!("  <meta {}=\"{}\" content=\"{}\">\n", attr, key, content));
    }
    html.push_str("</head>\n<body><h1>Poll</h1></body>\n</html>\n");
    html
}

fn base() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("property", "fc:frame", "vNext"),
        ("property", "fc:frame:image", "https://example.com/poll.png"),
    ]
}

fn with<'a>(extra: &[(&'a str, &'a str, &'a str)]) -> String {
    let mut metas: Vec<(&'a str, &'a str, &'a str)> = base();
    metas.extend_from_slice(extra);
    page(&metas)
}

#[test]
fn test_missing_frame_declaration() {
    let html = page(&[("property", "fc:frame:image", "https://example.com/poll.png")]);
    assert!(get_frame(&html, BASE_URL).is_none());
}

#[test]
fn test_ordinary_page_is_not_a_frame() {
    let html = page(&[
        ("property", "og:title", "Hello"),
        ("property", "og:image", "https://example.com/og.png"),
    ]);
    assert!(get_frame(&html, BASE_URL).is_none());
}

#[test]
fn test_minimal_frame() {
    let frame = get_frame(&with(&[]), BASE_URL).unwrap();
    assert_eq!(frame.version, "vNext");
    assert_eq!(frame.image, "https://example.com/poll.png");
    assert!(frame.buttons.is_empty());
    assert!(frame.input_text.is_none());
}

#[test]
fn test_full_frame() {
    let html = with(&[
        ("property", "fc:frame:post_url", "https://example.com/api/vote"),
        ("property", "fc:frame:input:text", "Write in a candidate"),
        ("property", "fc:frame:button:1", "Red"),
        ("property", "fc:frame:button:2", "Blue"),
        ("property", "fc:frame:button:3", "Results"),
        ("property", "fc:frame:button:3:action", "post_redirect"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.post_url, "https://example.com/api/vote");
    assert_eq!(frame.input_text.as_deref(), Some("Write in a candidate"));
    let labels: Vec<&str> = frame.buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Red", "Blue", "Results"]);
    assert_eq!(frame.buttons[2].action, ButtonAction::PostRedirect);
}

#[test]
fn test_buttons_ordered_by_index() {
    let html = with(&[
        ("property", "fc:frame:button:3", "C"),
        ("name", "fc:frame:button:1", "A"),
        ("property", "fc:frame:button:2", "B"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    let labels: Vec<&str> = frame.buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_version_acceptance() {
    for (version, accepted) in [
        ("vNext", true),
        ("2024-01-01", true),
        ("abc", false),
        ("1-2", false),
    ] {
        let html = page(&[
            ("property", "fc:frame", version),
            ("property", "fc:frame:image", "https://example.com/poll.png"),
        ]);
        assert_eq!(get_frame(&html, BASE_URL).is_some(), accepted, "version {}", version);
    }
}

#[test]
fn test_missing_image() {
    let html = page(&[("property", "fc:frame", "vNext")]);
    assert_eq!(try_get_frame(&html, BASE_URL), Err(FrameError::MissingImage));
}

#[test]
fn test_four_buttons_accepted() {
    let html = with(&[
        ("property", "fc:frame:button:1", "1"),
        ("property", "fc:frame:button:2", "2"),
        ("property", "fc:frame:button:3", "3"),
        ("property", "fc:frame:button:4", "4"),
    ]);
    assert_eq!(get_frame(&html, BASE_URL).unwrap().buttons.len(), 4);
}

#[test]
fn test_five_buttons_rejected() {
    let html = with(&[
        ("property", "fc:frame:button:1", "1"),
        ("property", "fc:frame:button:2", "2"),
        ("property", "fc:frame:button:3", "3"),
        ("property", "fc:frame:button:4", "4"),
        ("property", "fc:frame:button:5", "5"),
    ]);
    assert!(get_frame(&html, BASE_URL).is_none());
    assert_eq!(
        try_get_frame(&html, BASE_URL),
        Err(FrameError::TooManyButtons { count: 5, max: 4 })
    );
}

#[test]
fn test_action_defaults() {
    let html = with(&[
        ("property", "fc:frame:button:1", "No action"),
        ("property", "fc:frame:button:2", "Redirect"),
        ("property", "fc:frame:button:2:action", "post_redirect"),
        ("property", "fc:frame:button:3", "Link"),
        ("property", "fc:frame:button:3:action", "link"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons[0].action, ButtonAction::Post);
    assert_eq!(frame.buttons[1].action, ButtonAction::PostRedirect);
    assert_eq!(frame.buttons[2].action, ButtonAction::Post);
}

#[test]
fn test_action_without_label_is_ignored() {
    let html = with(&[
        ("property", "fc:frame:button:1", "Only"),
        ("property", "fc:frame:button:2:action", "post_redirect"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons.len(), 1);
    assert_eq!(frame.buttons[0].action, ButtonAction::Post);
}

#[test]
fn test_malformed_button_index_is_dropped() {
    let html = with(&[
        ("property", "fc:frame:button:1", "Good"),
        ("property", "fc:frame:button:first", "Bad"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons.len(), 1);
    assert_eq!(frame.buttons[0].label, "Good");
}

#[test]
fn test_malformed_indices_do_not_count_toward_limit() {
    let html = with(&[
        ("property", "fc:frame:button:1", "1"),
        ("property", "fc:frame:button:2", "2"),
        ("property", "fc:frame:button:3", "3"),
        ("property", "fc:frame:button:4", "4"),
        ("property", "fc:frame:button:x", "dropped"),
    ]);
    assert_eq!(get_frame(&html, BASE_URL).unwrap().buttons.len(), 4);
}

#[test]
fn test_empty_label_content() {
    let html = with(&[("property", "fc:frame:button:1", "")]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons[0].label, "");
}

#[test]
fn test_duplicate_indices_are_kept() {
    let html = with(&[
        ("property", "fc:frame:button:1", "First"),
        ("name", "fc:frame:button:1", "Again"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons.len(), 2);
    assert_eq!(frame.buttons[0].label, "First");
    assert_eq!(frame.buttons[1].label, "Again");
}

#[test]
fn test_input_text_boundary() {
    let ok = "a".repeat(32);
    let too_long = "a".repeat(33);

    let html = with(&[("property", "fc:frame:input:text", ok.as_str())]);
    assert_eq!(get_frame(&html, BASE_URL).unwrap().input_text, Some(ok.clone()));

    let html = with(&[("property", "fc:frame:input:text", too_long.as_str())]);
    assert!(get_frame(&html, BASE_URL).is_none());
}

#[test]
fn test_input_text_multibyte_boundary() {
    // 16 two-byte characters = 32 bytes; 17 = 34 bytes.
    let ok = "é".repeat(16);
    let too_long = "é".repeat(17);

    let html = with(&[("property", "fc:frame:input:text", ok.as_str())]);
    assert!(get_frame(&html, BASE_URL).is_some());

    let html = with(&[("property", "fc:frame:input:text", too_long.as_str())]);
    assert!(get_frame(&html, BASE_URL).is_none());
}

#[test]
fn test_input_text_measured_after_unescaping() {
    // Each `&eacute;` is 8 bytes of markup but 2 bytes of text.
    let ok = "&eacute;".repeat(16);
    let too_long = "&eacute;".repeat(17);

    let html = with(&[("property", "fc:frame:input:text", ok.as_str())]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.input_text, Some("\u{e9}".repeat(16)));

    let html = with(&[("property", "fc:frame:input:text", too_long.as_str())]);
    assert!(get_frame(&html, BASE_URL).is_none());
}

#[test]
fn test_named_references_in_labels() {
    let html = with(&[
        ("property", "fc:frame:button:1", "Caf&eacute; &hellip; &mdash;"),
        ("property", "fc:frame:button:2", "Next &rarr;"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.buttons[0].label, "Caf\u{e9} \u{2026} \u{2014}");
    assert_eq!(frame.buttons[1].label, "Next \u{2192}");
}

#[test]
fn test_meta_inside_title_is_text() {
    let html = r#"<html><head>
        <title>x<meta property="fc:frame" content="vNext"></title>
        <meta property="fc:frame:image" content="https://example.com/poll.png">
    </head></html>"#;
    assert_eq!(try_get_frame(html, BASE_URL), Err(FrameError::MissingVersion));
}

#[test]
fn test_post_url_fallback() {
    let frame = get_frame(&with(&[]), BASE_URL).unwrap();
    assert_eq!(frame.post_url, BASE_URL);
}

#[test]
fn test_post_url_declared_verbatim() {
    let html = with(&[("name", "fc:frame:post_url", "/relative/path?q=1")]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.post_url, "/relative/path?q=1");
}

#[test]
fn test_name_and_property_conventions_are_equivalent() {
    let by_property = page(&[
        ("property", "fc:frame", "vNext"),
        ("property", "fc:frame:image", "img"),
        ("property", "fc:frame:button:1", "Go"),
        ("property", "fc:frame:button:1:action", "post_redirect"),
    ]);
    let by_name = page(&[
        ("name", "fc:frame", "vNext"),
        ("name", "fc:frame:image", "img"),
        ("name", "fc:frame:button:1", "Go"),
        ("name", "fc:frame:button:1:action", "post_redirect"),
    ]);
    assert_eq!(get_frame(&by_property, BASE_URL), get_frame(&by_name, BASE_URL));
    assert!(get_frame(&by_name, BASE_URL).is_some());
}

#[test]
fn test_first_scalar_declaration_wins() {
    let html = page(&[
        ("property", "fc:frame", "vNext"),
        ("property", "fc:frame", "not-a-version"),
        ("property", "fc:frame:image", "first.png"),
        ("name", "fc:frame:image", "second.png"),
    ]);
    let frame = get_frame(&html, BASE_URL).unwrap();
    assert_eq!(frame.image, "first.png");
}

#[test]
fn test_idempotent() {
    let html = with(&[
        ("property", "fc:frame:button:2", "B"),
        ("property", "fc:frame:button:1", "A"),
        ("property", "fc:frame:button:1:action", "post_redirect"),
    ]);
    let first = get_frame(&html, BASE_URL);
    for _ in 0..3 {
        assert_eq!(get_frame(&html, BASE_URL), first);
    }
}

#[test]
fn test_malformed_html_is_tolerated() {
    let html = r#"<html><head>
        <meta property="fc:frame" content="vNext">
        <meta property="fc:frame:image" content="https://example.com/poll.png">
        <meta property="fc:frame:button:1" content="Go">
        </span></div>
    </head><body><div><p>unclosed</body>"#;
    let frame = get_frame(html, BASE_URL).unwrap();
    assert_eq!(frame.buttons.len(), 1);
}

#[test]
fn test_garbage_input() {
    assert!(get_frame("", BASE_URL).is_none());
    assert!(get_frame("<<<>>>", BASE_URL).is_none());
    assert!(get_frame("\u{1}\u{2}binary", BASE_URL).is_none());
}
