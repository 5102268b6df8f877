#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_socket_addr, validate_url, Validate};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM: &str = "onboarding@resend.dev";
pub const DEFAULT_TO: &str = "jacob@streetle.co.uk";
pub const DEFAULT_SITE_NAME: &str = "IntelTree";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// 寄件者、收件者與頁尾站名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub from: String,
    pub to: String,
    pub site_name: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

/// Endpoint 執行時的設定，啟動時讀取一次
///
/// `api_key` 允許缺少：缺少時每個請求回 500，而不是在啟動時失敗。
#[derive(Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub email: EmailSettings,
}

// API key 不可出現在日誌中
impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("email", &self.email)
            .finish()
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            email: EmailSettings::default(),
        }
    }
}

impl ContactConfig {
    /// 從環境變數讀取設定
    ///
    /// - `RESEND_API_KEY`: provider API key
    /// - `RESEND_API_URL`: provider base URL (default: `https://api.resend.com`)
    /// - `CONTACT_FROM` / `CONTACT_TO`: sender and recipient
    /// - `CONTACT_SITE_NAME`: site name used in the email footer
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// 以 lookup 的值覆蓋目前設定，空字串視為未設定
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(api_key) = get("RESEND_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(api_url) = get("RESEND_API_URL") {
            self.api_url = api_url;
        }
        if let Some(from) = get("CONTACT_FROM") {
            self.email.from = from;
        }
        if let Some(to) = get("CONTACT_TO") {
            self.email.to = to;
        }
        if let Some(site_name) = get("CONTACT_SITE_NAME") {
            self.email.site_name = site_name;
        }
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Validate for ContactConfig {
    fn validate(&self) -> Result<()> {
        validate_url("provider.api_url", &self.api_url)?;
        validate_non_empty_string("email.from", &self.email.from)?;
        validate_non_empty_string("email.to", &self.email.to)?;
        if self.api_key.is_none() {
            tracing::warn!("RESEND_API_KEY is not set, submissions will be rejected");
        }
        Ok(())
    }
}

/// 本機伺服器設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind)
    }
}
