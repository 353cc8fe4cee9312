use std::time::Duration;

use reqwest::Client;

use crate::config::config::HttpConfig;

/// Builds the client shared by page fetches and image downloads: spoofed
/// desktop-browser `User-Agent` and a per-request timeout.
pub fn build_client(http: &HttpConfig) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(http.user_agent.as_str())
        .timeout(Duration::from_secs(http.timeout_secs))
        .build()
}
