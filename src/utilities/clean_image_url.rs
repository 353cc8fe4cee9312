use std::sync::LazyLock;

use regex::{Captures, Regex};

static UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("valid unicode escape regex"));

/// Decodes JSON string escapes (`\u002F`, `\u0026`, `\/`) left in URLs pulled
/// out of inline scripts, then drops the query string, which only carries
/// resize parameters on product image CDNs.
pub fn clean_image_url(image_url: &str) -> String {
    let decoded = UNICODE_ESCAPE.replace_all(image_url, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    let unescaped = decoded.replace('\\', "");

    match unescaped.split_once('?') {
        Some((base, _)) => base.to_string(),
        None => unescaped,
    }
}
