use std::sync::LazyLock;

use regex::Regex;

static PRICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""price":"([^"]+)""#).expect("valid price regex"));

/// Finds the first bare `"price":"..."` token anywhere in the page.
pub fn extract_price(html_content: &str) -> Option<String> {
    PRICE_TOKEN
        .captures(html_content)
        .and_then(|caps| caps.get(1).map(|match_| match_.as_str().to_string()))
}
