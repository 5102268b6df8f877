use crate::config::{ContactConfig, ServerSettings};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔格式
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:3000"
///
/// [email]
/// from = "onboarding@resend.dev"
/// to = "team@example.com"
/// site_name = "IntelTree"
///
/// [provider]
/// api_url = "https://api.resend.com"
/// api_key = "${RESEND_API_KEY}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub email: Option<EmailSection>,
    pub provider: Option<ProviderSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSection {
    pub from: Option<String>,
    pub to: Option<String>,
    pub site_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigFileError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESEND_API_KEY})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Self::placeholder_regex()?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn placeholder_regex() -> Result<Regex> {
        Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::ConfigFileError {
            message: format!("Invalid placeholder pattern: {}", e),
        })
    }

    /// 轉換為執行設定；未替換的 `${VAR}` 視為未設定
    pub fn resolve(self) -> Result<(ContactConfig, ServerSettings)> {
        let re = Self::placeholder_regex()?;
        let unresolved = |value: &str| re.is_match(value);

        let mut config = ContactConfig::default();
        let mut server = ServerSettings::default();

        if let Some(section) = self.server {
            if let Some(bind) = section.bind {
                server.bind = bind;
            }
        }

        if let Some(section) = self.email {
            if let Some(from) = section.from {
                config.email.from = from;
            }
            if let Some(to) = section.to {
                config.email.to = to;
            }
            if let Some(site_name) = section.site_name {
                config.email.site_name = site_name;
            }
        }

        if let Some(section) = self.provider {
            if let Some(api_url) = section.api_url {
                config.api_url = api_url;
            }
            config.api_key = section
                .api_key
                .filter(|key| !key.trim().is_empty() && !unresolved(key));
        }

        Ok((config, server))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let (config, server) = self.clone().resolve()?;
        config.validate()?;
        server.validate()
    }
}
