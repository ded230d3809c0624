use bytes::Bytes;
use reqwest::Client;
use tracing::info;

use crate::errors::{AppError, Result};

/// Downloads invoice documents from remote storage.
#[derive(Clone, Default)]
pub struct DocumentService {
    client: Client,
}

impl DocumentService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the document as raw bytes. No retries; the body is not inspected.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        info!("📄 Downloading document from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(format!("Failed to download document: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::fetch(format!(
                "Failed to download document: remote responded with status {}",
                response.status()
            )));
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| AppError::fetch(format!("Failed to read document body: {}", e)))?;

        info!("📄 Downloaded {} bytes", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_body_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/invoices/42.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 fake".to_vec()))
            .mount(&server)
            .await;

        let bytes = DocumentService::new()
            .fetch(&format!("{}/invoices/42.pdf", server.uri()))
            .await
            .unwrap();

        assert_eq!(&bytes[..], b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn body_is_not_content_checked() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a pdf</html>"))
            .mount(&server)
            .await;

        let bytes = DocumentService::new().fetch(&server.uri()).await.unwrap();
        assert_eq!(&bytes[..], b"<html>not a pdf</html>");
    }

    #[tokio::test]
    async fn error_status_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = DocumentService::new().fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, AppError::FetchError(ref msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn unreachable_url_is_fetch_error() {
        let err = DocumentService::new()
            .fetch("http://127.0.0.1:1/missing.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::FetchError(_)));
    }
}
