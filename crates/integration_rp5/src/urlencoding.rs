//! Percent-encoding for RP5 listing hrefs
//!
//! Listing anchors carry raw Cyrillic paths; they are encoded before being
//! joined to the base URL.

/// Percent-encode a URL path
///
/// Leaves unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`)
/// and the path separator `/` as-is. Every other byte of the UTF-8 encoding
/// becomes `%XX`; spaces become `%20`.
pub fn quote(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                result.push(char::from(byte));
            },
            _ => result.push_str(&format!("%{byte:02X}")),
        }
    }
    result
}
