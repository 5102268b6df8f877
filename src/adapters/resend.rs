use crate::config::DEFAULT_API_URL;
use crate::domain::model::{DeliveryReceipt, EmailMessage, ProviderErrorBody};
use crate::domain::ports::EmailSender;
use crate::utils::error::{ContactError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Resend email API client
#[derive(Debug, Clone)]
pub struct ResendClient {
    client: Client,
    base_url: String,
}

impl ResendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ResendClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, api_key: &str, email: &EmailMessage) -> Result<DeliveryReceipt> {
        let url = self.emails_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // 錯誤回應不一定是 JSON
            let error_body: ProviderErrorBody = response.json().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                name = ?error_body.name,
                message = ?error_body.message,
                "Resend API error"
            );
            return Err(ContactError::ProviderError {
                status: status.as_u16(),
                details: error_body.message,
            });
        }

        let receipt: DeliveryReceipt = response.json().await?;
        Ok(receipt)
    }
}
