use std::sync::LazyLock;

use scraper::{Html, Selector};

static OG_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("meta[property='og:image']").expect("valid og:image selector")
});

/// Extracts the `content` of the first non-empty `og:image` meta tag.
pub fn extract_og_image(html_content: &str) -> Option<String> {
    let document = Html::parse_document(html_content);

    document
        .select(&OG_IMAGE)
        .filter_map(|element| element.value().attr("content"))
        .find(|content| !content.is_empty())
        .map(str::to_string)
}
