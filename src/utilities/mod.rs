pub mod clean_image_url;
pub mod download_image;
pub mod fetch_page;
pub mod generate_random_delay;
pub mod http_client;
pub mod write_products_json;
