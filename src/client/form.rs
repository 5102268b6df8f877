use crate::client::view::{ButtonState, FormFields, FormMessage, FormView};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const CONTACT_PATH: &str = "/api/contact";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_AUTO_HIDE: Duration = Duration::from_secs(5);

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SUCCESS_FALLBACK: &str = "Thank you! Your message has been sent successfully.";
pub const ERROR_FALLBACK: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// 送出結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 欄位不完整，沒有發出請求
    Rejected,
    Sent,
    /// 伺服器回應失敗
    Failed,
    NetworkError,
}

#[derive(Debug, Default, Deserialize)]
struct FormResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// 聯絡表單的送出流程
#[derive(Debug, Clone)]
pub struct ContactFormClient {
    client: Client,
    endpoint: String,
}

impl ContactFormClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// 以網站根網址組出 `/api/contact`
    pub fn for_site(base_url: &str) -> Self {
        Self::new(format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit<V: FormView>(&self, view: &mut V) -> SubmitOutcome {
        let fields = view.read_fields();
        if !fields.is_complete() {
            view.show_message(FormMessage::error(REQUIRED_FIELDS_MESSAGE));
            return SubmitOutcome::Rejected;
        }

        let original = view.button();
        view.set_button(ButtonState::busy(SENDING_LABEL));
        view.hide_message();

        let outcome = match self.post(&fields).await {
            Ok((status, body)) if status.is_success() && body.success == Some(true) => {
                let text = body
                    .message
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
                view.show_message(FormMessage::success(text, SUCCESS_AUTO_HIDE));
                view.reset();
                SubmitOutcome::Sent
            }
            Ok((status, body)) => {
                tracing::debug!(status = status.as_u16(), "Contact endpoint returned an error");
                let text = body
                    .error
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| ERROR_FALLBACK.to_string());
                view.show_message(FormMessage::error(text));
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(error = %e, "Form submission error");
                view.show_message(FormMessage::error(NETWORK_ERROR_MESSAGE));
                SubmitOutcome::NetworkError
            }
        };

        view.set_button(ButtonState::idle(original.label));
        outcome
    }

    // 非 JSON 回應與連線失敗同樣視為網路錯誤
    async fn post(&self, fields: &FormFields) -> reqwest::Result<(StatusCode, FormResponse)> {
        let response = self.client.post(&self.endpoint).json(fields).send().await?;
        let status = response.status();
        let body = response.json::<FormResponse>().await?;
        Ok((status, body))
    }
}
