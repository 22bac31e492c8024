pub mod render;

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::api::models::{Message, ThreadDetail};
use crate::mail;

/// Upper bound on the text handed to the summarizer per thread. Overflow is
/// trimmed from the front so the newest part of the conversation survives.
const MAX_THREAD_CHARS: usize = 10_000;

/// How many of the thread's newest messages contribute to the summary input.
const THREAD_TAIL_MESSAGES: usize = 3;

const EXCERPT_CHARS: usize = 280;

#[derive(Debug, Clone, Serialize)]
pub struct DigestItem {
    pub subject: String,
    pub from: String,
    pub date: String,
    pub summary: String,
    pub gmail_link: String,
}

/// Concatenated sender-attributed text of a thread's newest messages, or an
/// empty string when nothing in the thread decodes to text.
pub fn thread_text(thread: &ThreadDetail) -> String {
    let tail_start = thread.messages.len().saturating_sub(THREAD_TAIL_MESSAGES);
    let mut text = String::new();

    for message in &thread.messages[tail_start..] {
        let body = mail::extract_plain_text(&message.payload);
        if body.trim().is_empty() {
            continue;
        }

        text.push_str(&format!("From: {}\n{}\n\n", message.header("From"), body));
    }

    if text.trim().is_empty() {
        return String::new();
    }

    tail_truncate(&text, MAX_THREAD_CHARS).to_string()
}

/// Builds the digest entry for one thread from its header context and an
/// already-produced summary.
pub fn digest_item(thread: &ThreadDetail, summary: String) -> DigestItem {
    let (subject, from, date) = match thread.latest_message() {
        Some(latest) => (
            latest.header("Subject"),
            latest.header("From"),
            format_local_date(latest),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    DigestItem {
        subject: or_placeholder(subject, "(no subject)"),
        from: or_placeholder(from, "(unknown sender)"),
        date,
        summary,
        gmail_link: thread_link(&thread.id),
    }
}

pub fn thread_link(thread_id: &str) -> String {
    format!("https://mail.google.com/mail/u/0/#inbox/{thread_id}")
}

/// Short local stand-in for an LLM summary when no API key is configured.
pub fn excerpt(thread_text: &str) -> String {
    let compact = thread_text.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.len() <= EXCERPT_CHARS {
        return compact;
    }

    let mut end = EXCERPT_CHARS;
    while !compact.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &compact[..end])
}

fn format_local_date(message: &Message) -> String {
    message
        .internal_date_ms
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map(|stamp| stamp.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

fn tail_truncate(text: &str, max_chars: usize) -> &str {
    if text.len() <= max_chars {
        return text;
    }

    let mut start = text.len() - max_chars;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}
