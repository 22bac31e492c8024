use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use gmail_digest::api::models::{Header, MessagePart, PartBody};
use gmail_digest::mail::{decode_part_data, extract_plain_text, find_header, find_parts, html_to_text};

fn leaf(mime_type: &str, text: &str) -> MessagePart {
    MessagePart {
        mime_type: mime_type.to_string(),
        body: Some(PartBody {
            data: Some(URL_SAFE_NO_PAD.encode(text)),
            attachment_id: None,
            size: None,
        }),
        parts: Vec::new(),
        headers: Vec::new(),
    }
}

fn container(mime_type: &str, parts: Vec<MessagePart>) -> MessagePart {
    MessagePart {
        mime_type: mime_type.to_string(),
        body: None,
        parts,
        headers: Vec::new(),
    }
}

#[test]
fn decode_round_trips_utf8_payloads() {
    let encoded = URL_SAFE_NO_PAD.encode("Grüße — meeting at 10:00 ✓");
    assert_eq!(
        decode_part_data(&encoded).expect("valid payload"),
        "Grüße — meeting at 10:00 ✓"
    );
}

#[test]
fn decode_never_panics_on_non_utf8_bytes() {
    let encoded = URL_SAFE_NO_PAD.encode(b"legacy=20text\xa0\xff");
    let text = decode_part_data(&encoded).expect("fallback is total");
    assert!(text.contains("legacy text"));
}

#[test]
fn finder_never_yields_attachment_only_parts() {
    let tree = container(
        "multipart/mixed",
        vec![
            MessagePart {
                mime_type: "text/plain".to_string(),
                body: Some(PartBody {
                    data: None,
                    attachment_id: Some("att-9".to_string()),
                    size: Some(100),
                }),
                parts: Vec::new(),
                headers: Vec::new(),
            },
            leaf("text/plain", "inline"),
        ],
    );

    let found: Vec<_> = find_parts(&tree, "text/plain").collect();
    assert_eq!(found.len(), 1);
    assert!(found[0].has_inline_data());
}

#[test]
fn extraction_prefers_plain_text_over_html() {
    let tree = container(
        "multipart/alternative",
        vec![
            leaf("text/plain", "Hello"),
            leaf("text/html", "<p>Hi</p>"),
        ],
    );
    assert_eq!(extract_plain_text(&tree), "Hello");
}

#[test]
fn extraction_reduces_html_when_plain_is_absent() {
    let tree = container(
        "multipart/alternative",
        vec![leaf("text/html", "<p>Hi <b>there</b></p>")],
    );
    let text = extract_plain_text(&tree);
    assert!(text.contains("Hi"));
    assert!(text.contains("there"));
    assert!(!text.contains("<b>"));
}

#[test]
fn extraction_is_total_over_empty_trees() {
    let empty_leaf = MessagePart::default();
    assert_eq!(extract_plain_text(&empty_leaf), "");

    let deep = container(
        "multipart/mixed",
        vec![container("multipart/related", vec![MessagePart::default()])],
    );
    assert_eq!(extract_plain_text(&deep), "");
}

#[test]
fn html_reducer_drops_scripts_and_keeps_link_text() {
    let text = html_to_text("<a href='x'>Click</a> <script>evil()</script> &amp; done");
    assert!(text.contains("Click"));
    assert!(text.contains("& done"));
    assert!(!text.contains("evil()"));
}

#[test]
fn header_lookup_is_case_insensitive() {
    let headers = vec![Header {
        name: "Subject".to_string(),
        value: "Hi".to_string(),
    }];
    assert_eq!(find_header(&headers, "subject"), "Hi");
    assert_eq!(find_header(&headers, "X-Missing"), "");
}
