use crate::core::{WebhookResponse, WebhookTransport};
use crate::utils::error::{LeadError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Webhook transport over `reqwest`. No timeout is set; a request runs until
/// the server answers or the connection fails.
#[derive(Debug, Clone, Default)]
pub struct ReqwestWebhook {
    client: Client,
}

impl ReqwestWebhook {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Uses a preconfigured client, e.g. one with a timeout or proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookTransport for ReqwestWebhook {
    async fn post_form(&self, url: &str, body: String) -> Result<WebhookResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| LeadError::TransportError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        tracing::debug!("Webhook response status: {}", status);

        let body = match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!("Webhook response body unreadable: {}", e);
                None
            }
        };

        Ok(WebhookResponse { status, body })
    }
}
