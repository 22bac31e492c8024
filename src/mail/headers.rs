use crate::api::models::Header;

/// Returns the value of the first header whose name matches case-insensitively,
/// or an empty string when the header is absent. Header names are not unique;
/// first match wins.
pub fn find_header(headers: &[Header], name: &str) -> String {
    headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| header.value.trim().to_string())
        .unwrap_or_default()
}
