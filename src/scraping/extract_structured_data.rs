use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;

use crate::scraping::extract_data::ExtractionResult;

static LD_JSON: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid ld+json selector")
});

/// Reads `image` and `offers.price` from the first JSON-LD block of the page.
///
/// Only the first block is considered. Malformed JSON, a non-object payload or
/// a missing image all yield `None` so the caller can move to the next strategy.
pub fn extract_structured_data(html_content: &str) -> Option<ExtractionResult> {
    let document = Html::parse_document(html_content);
    let script = document.select(&LD_JSON).next()?;
    let script_content = script.text().collect::<Vec<_>>().join("");

    let data: Value = serde_json::from_str(&script_content).ok()?;
    let obj = data.as_object()?;

    let image_url = obj.get("image").and_then(image_from_value)?;

    let price = obj
        .get("offers")
        .and_then(|offers| offers.as_object())
        .and_then(|offers| offers.get("price"))
        .and_then(|price| match price {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

    Some(ExtractionResult { image_url, price })
}

// `image` may be a URL, a list of URLs or an ImageObject.
fn image_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(image_from_value),
        Value::Object(obj) => obj.get("url").and_then(image_from_value),
        _ => None,
    }
}
