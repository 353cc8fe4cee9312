use std::sync::LazyLock;

use regex::Regex;

/// Vendor JSON keys, most specific first. Only values on the Walmart image
/// host are accepted.
static VENDOR_IMAGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#""imageUrl":"(https://i5\.walmartimages\.com/[^"]+)""#,
        r#""largeImage":"(https://i5\.walmartimages\.com/[^"]+)""#,
        r#""image":"(https://i5\.walmartimages\.com/[^"]+)""#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid vendor image regex"))
    .collect()
});

pub fn extract_vendor_image(html_content: &str) -> Option<String> {
    VENDOR_IMAGE_PATTERNS.iter().find_map(|regex| {
        regex
            .captures(html_content)
            .and_then(|caps| caps.get(1).map(|match_| match_.as_str().to_string()))
    })
}
