pub mod extract_data;
pub mod extract_og_image;
pub mod extract_price;
pub mod extract_structured_data;
pub mod extract_vendor_image;
