use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use gmail_digest::api::models::{Header, Message, MessagePart, PartBody, ThreadDetail};
use gmail_digest::digest::{self, render};

fn plain_message(from: &str, subject: &str, body: &str) -> Message {
    Message {
        id: "m-1".to_string(),
        internal_date_ms: Some(1_756_300_000_000),
        payload: MessagePart {
            mime_type: "multipart/alternative".to_string(),
            body: None,
            parts: vec![
                MessagePart {
                    mime_type: "text/plain".to_string(),
                    body: Some(PartBody {
                        data: Some(URL_SAFE_NO_PAD.encode(body)),
                        attachment_id: None,
                        size: None,
                    }),
                    parts: Vec::new(),
                    headers: Vec::new(),
                },
                MessagePart {
                    mime_type: "text/html".to_string(),
                    body: Some(PartBody {
                        data: Some(URL_SAFE_NO_PAD.encode(format!("<p>{body}</p>"))),
                        attachment_id: None,
                        size: None,
                    }),
                    parts: Vec::new(),
                    headers: Vec::new(),
                },
            ],
            headers: vec![
                Header {
                    name: "From".to_string(),
                    value: from.to_string(),
                },
                Header {
                    name: "Subject".to_string(),
                    value: subject.to_string(),
                },
            ],
        },
    }
}

#[test]
fn thread_text_attributes_each_message_to_its_sender() {
    let thread = ThreadDetail {
        id: "t-1".to_string(),
        messages: vec![
            plain_message("alice@example.com", "Standup", "Running late today."),
            plain_message("bob@example.com", "Re: Standup", "No problem."),
        ],
    };

    let text = digest::thread_text(&thread);
    assert!(text.contains("From: alice@example.com\nRunning late today."));
    assert!(text.contains("From: bob@example.com\nNo problem."));
    // Plain part wins over its HTML sibling, so no markup leaks through.
    assert!(!text.contains("<p>"));
}

#[test]
fn digest_pipeline_produces_renderable_markdown() {
    let thread = ThreadDetail {
        id: "t-9".to_string(),
        messages: vec![plain_message(
            "carol@example.com",
            "Contract renewal",
            "Please review the attached terms by Friday.",
        )],
    };

    let text = digest::thread_text(&thread);
    assert!(!text.is_empty());

    let item = digest::digest_item(&thread, digest::excerpt(&text));
    assert_eq!(item.subject, "Contract renewal");
    assert!(item.summary.contains("review the attached terms"));

    let doc = render::markdown(std::slice::from_ref(&item));
    assert!(doc.contains("## Contract renewal"));
    assert!(doc.contains("**From:** carol@example.com"));
    assert!(doc.contains("[Open in Gmail](https://mail.google.com/mail/u/0/#inbox/t-9)"));
}
