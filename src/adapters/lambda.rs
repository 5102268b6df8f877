//! API Gateway (REST v1 / HTTP API v2) 與 Lambda Function URL 事件轉換

use crate::core::handler::{ContactHandler, HandlerResponse};
use crate::domain::ports::EmailSender;
use crate::utils::error::{ContactError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    /// REST API (payload v1)
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    /// HTTP API (payload v2) 與 Function URL
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpContext {
    pub method: String,
}

impl HttpEvent {
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .map(|http| http.method.as_str())
            })
            .unwrap_or("")
    }

    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        let body = self.body.as_deref().unwrap_or("");
        if self.is_base64_encoded {
            STANDARD
                .decode(body)
                .map_err(|e| ContactError::InvalidBody {
                    reason: format!("invalid base64 body: {}", e),
                })
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl From<HandlerResponse> for HttpResponse {
    fn from(response: HandlerResponse) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status_code: response.status,
            headers,
            body: response.to_json(),
            is_base64_encoded: false,
        }
    }
}

pub async fn handle_event<S: EmailSender>(
    handler: &ContactHandler<S>,
    event: HttpEvent,
) -> HttpResponse {
    let method = event.method().to_string();
    if !method.eq_ignore_ascii_case("POST") {
        return handler.handle(&method, &[]).await.into();
    }

    match event.body_bytes() {
        Ok(body) => handler.handle(&method, &body).await.into(),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected Lambda event body");
            HandlerResponse::from_error(&e).into()
        }
    }
}
