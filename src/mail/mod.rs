pub mod extract;
pub mod headers;
pub mod html;

pub use extract::{decode_part_data, extract_plain_text, find_parts};
pub use headers::find_header;
pub use html::html_to_text;
