use crate::domain::model::{DeliveryReceipt, EmailMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 對外寄信的介面
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, api_key: &str, email: &EmailMessage) -> Result<DeliveryReceipt>;
}
