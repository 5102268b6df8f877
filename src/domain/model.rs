use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{missing_required_fields, Validate};
use serde::{Deserialize, Serialize};

/// 表單送出的內容（name / email / message）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// 解析請求 body；無法解析時回傳 400
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ContactError::InvalidBody {
                reason: "empty body".to_string(),
            });
        }
        serde_json::from_slice(body).map_err(|e| ContactError::InvalidBody {
            reason: e.to_string(),
        })
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

impl Validate for Submission {
    fn validate(&self) -> Result<()> {
        let fields = missing_required_fields(&[("name", self.name.as_str()), ("email", self.email.as_str())]);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields { fields })
        }
    }
}

/// 送往 email provider 的 JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider 成功回應
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliveryReceipt {
    pub id: String,
}

/// Provider 錯誤回應，欄位皆可能缺少
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSuccess {
    pub success: bool,
    pub message: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<String>,
}

/// Endpoint 回傳給瀏覽器的 JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Success(ContactSuccess),
    Failure(ContactFailure),
}
