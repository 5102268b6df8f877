use crate::config::ContactConfig;
use crate::core::email;
use crate::domain::model::{
    ContactFailure, ContactResponse, ContactSuccess, DeliveryReceipt, Submission,
};
use crate::domain::ports::EmailSender;
use crate::utils::error::{ContactError, ErrorCategory, Result};
use crate::utils::validation::Validate;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Endpoint 的回應：HTTP 狀態碼加 JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: ContactResponse,
}

impl HandlerResponse {
    pub fn success(receipt: DeliveryReceipt) -> Self {
        Self {
            status: 200,
            body: ContactResponse::Success(ContactSuccess {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                id: receipt.id,
            }),
        }
    }

    pub fn from_error(error: &ContactError) -> Self {
        Self {
            status: error.status_code(),
            body: ContactResponse::Failure(ContactFailure {
                error: error.user_friendly_message().to_string(),
                details: error.details().map(str::to_string),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, ContactResponse::Success(_))
    }

    pub fn to_json(&self) -> String {
        // ContactResponse 只含字串與布林，序列化不會失敗
        serde_json::to_string(&self.body)
            .unwrap_or_else(|_| r#"{"error":"An unexpected error occurred"}"#.to_string())
    }
}

/// 處理 `/api/contact` 的請求
pub struct ContactHandler<S: EmailSender> {
    sender: S,
    config: ContactConfig,
}

impl<S: EmailSender> ContactHandler<S> {
    pub fn new(sender: S, config: ContactConfig) -> Self {
        Self { sender, config }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// 所有錯誤都轉成 JSON 回應，不會往外拋
    pub async fn handle(&self, method: &str, body: &[u8]) -> HandlerResponse {
        match self.process(method, body).await {
            Ok(receipt) => {
                tracing::info!(id = %receipt.id, "Contact email sent");
                HandlerResponse::success(receipt)
            }
            Err(e) => {
                match e.category() {
                    ErrorCategory::Request => {
                        tracing::debug!(error = %e, "Rejected contact request")
                    }
                    category => {
                        tracing::error!(error = %e, ?category, "Error processing contact form")
                    }
                }
                HandlerResponse::from_error(&e)
            }
        }
    }

    async fn process(&self, method: &str, body: &[u8]) -> Result<DeliveryReceipt> {
        if !method.eq_ignore_ascii_case("POST") {
            return Err(ContactError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        let submission = Submission::from_json(body)?;
        submission.validate()?;

        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ContactError::MissingConfigError {
                field: "RESEND_API_KEY".to_string(),
            })?;

        tracing::debug!(email = %submission.email, "Forwarding contact submission");
        let message = email::compose(&submission, &self.config.email);
        self.sender.send(api_key, &message).await
    }
}
