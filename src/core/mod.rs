pub mod email;
pub mod handler;

pub use crate::domain::model::{ContactResponse, DeliveryReceipt, EmailMessage, Submission};
pub use crate::domain::ports::EmailSender;
pub use crate::utils::error::Result;
