use tracing::debug;

use crate::scraping::{
    extract_og_image::extract_og_image, extract_price::extract_price,
    extract_structured_data::extract_structured_data, extract_vendor_image::extract_vendor_image,
};

/// Image and price found on a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub image_url: String,
    pub price: Option<String>,
}

type Strategy = fn(&str) -> Option<ExtractionResult>;

/// Tried in order; the first strategy returning a match wins.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("structured data", extract_structured_data),
    ("og:image", from_og_image),
    ("vendor json", from_vendor_image),
];

fn from_og_image(html_content: &str) -> Option<ExtractionResult> {
    extract_og_image(html_content).map(|image_url| ExtractionResult {
        image_url,
        price: extract_price(html_content),
    })
}

fn from_vendor_image(html_content: &str) -> Option<ExtractionResult> {
    extract_vendor_image(html_content).map(|image_url| ExtractionResult {
        image_url,
        price: extract_price(html_content),
    })
}

// Extract image URL and price from a product page
pub fn extract_data(html_content: &str) -> Option<ExtractionResult> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let result = strategy(html_content)?;
        debug!(strategy = name, image_url = %result.image_url, "Extraction strategy matched");
        Some(result)
    })
}
