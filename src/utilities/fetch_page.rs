use reqwest::Client;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// GETs a product page and returns its body. Non-2xx statuses are errors.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    debug!(url, %status, bytes = body.len(), "Fetched product page");

    Ok(body)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::config::{HttpConfig, DEFAULT_USER_AGENT};
    use crate::utilities::http_client::build_client;

    fn client() -> Client {
        build_client(&HttpConfig {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            delay_min_ms: 0,
            delay_max_ms: 0,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ip/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetch_page(&client(), &format!("{}/ip/1", server.uri())).await.unwrap();
        assert_eq!(body, "<html>ok</html>");

        let requests = server.received_requests().await.unwrap();
        let user_agent = requests[0].headers.get("user-agent").unwrap();
        assert_eq!(user_agent.to_str().unwrap(), DEFAULT_USER_AGENT);
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_page(&client(), &format!("{}/ip/2", server.uri())).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Status { status, .. } if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn timeout_is_an_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = build_client(&HttpConfig {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 1,
            delay_min_ms: 0,
            delay_max_ms: 0,
        })
        .unwrap();

        let err = fetch_page(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Http(ref e) if e.is_timeout()));
    }
}
