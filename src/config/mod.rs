pub mod config;
pub mod products;
