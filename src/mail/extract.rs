//! Best-effort plain-text extraction from a Gmail message payload tree.
//!
//! Gmail returns message bodies as a recursive multipart tree whose leaves
//! carry base64url-encoded data. Extraction is deliberately forgiving: a part
//! that fails to decode is skipped, and a message with no usable text yields
//! an empty string rather than an error.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};

use crate::api::models::MessagePart;

use super::html;

pub use base64::DecodeError;

// Gmail emits both padded and unpadded base64url depending on the part.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Depth-first pre-order iterator over parts matching a mime type.
///
/// Only yields parts carrying inline body data; attachment references are
/// skipped even when the mime type matches. Lazy so that callers can stop at
/// the first hit without walking the rest of the tree.
pub fn find_parts<'a>(root: &'a MessagePart, wanted_mime: &'a str) -> PartFinder<'a> {
    PartFinder {
        stack: vec![root],
        wanted_mime,
    }
}

#[derive(Debug)]
pub struct PartFinder<'a> {
    stack: Vec<&'a MessagePart>,
    wanted_mime: &'a str,
}

impl<'a> Iterator for PartFinder<'a> {
    type Item = &'a MessagePart;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(part) = self.stack.pop() {
            // Children pushed in reverse so the leftmost child is popped first.
            self.stack.extend(part.parts.iter().rev());

            if part.mime_type == self.wanted_mime && part.has_inline_data() {
                return Some(part);
            }
        }

        None
    }
}

/// Decodes a base64url body payload into text.
///
/// Malformed base64 is the only error; once raw bytes are in hand the result
/// is total: strict UTF-8 first, then a quoted-printable pass with lossy
/// UTF-8 recovery for legacy-encoded bodies.
pub fn decode_part_data(data: &str) -> Result<String, DecodeError> {
    let bytes = URL_SAFE_LENIENT.decode(data)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(decode_legacy_bytes(err.as_bytes())),
    }
}

fn decode_legacy_bytes(bytes: &[u8]) -> String {
    match quoted_printable::decode(bytes, quoted_printable::ParseMode::Robust) {
        Ok(decoded) => String::from_utf8_lossy(&decoded).into_owned(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Extracts the best available plain-text rendering of a message payload.
///
/// Strategies are tried in priority order: a `text/plain` part is cheapest
/// and cleanest, `text/html` needs lossy tag stripping, and the final walk
/// guarantees some output for unusual structures (e.g. a single-part message
/// whose mime type is not exactly `text/plain`). Returns an empty string
/// when nothing in the tree decodes to text.
pub fn extract_plain_text(root: &MessagePart) -> String {
    const STRATEGIES: [fn(&MessagePart) -> Option<String>; 3] =
        [plain_part_text, html_part_text, first_decodable_text];

    for strategy in STRATEGIES {
        if let Some(text) = strategy(root) {
            return text;
        }
    }

    String::new()
}

fn plain_part_text(root: &MessagePart) -> Option<String> {
    find_parts(root, "text/plain")
        .filter_map(|part| part.inline_data().and_then(|data| decode_part_data(data).ok()))
        .map(|text| text.trim().to_string())
        .next()
}

fn html_part_text(root: &MessagePart) -> Option<String> {
    find_parts(root, "text/html")
        .filter_map(|part| part.inline_data().and_then(|data| decode_part_data(data).ok()))
        .map(|markup| html::html_to_text(&markup))
        .next()
}

fn first_decodable_text(part: &MessagePart) -> Option<String> {
    if part.is_attachment() {
        return None;
    }

    if let Some(data) = part.inline_data() {
        if let Ok(text) = decode_part_data(data) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    part.parts.iter().find_map(first_decodable_text)
}
