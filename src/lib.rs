pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::adapters::resend::ResendClient;
pub use client::{ContactFormClient, FormState};
pub use config::{ContactConfig, EmailSettings};
pub use crate::core::handler::{ContactHandler, HandlerResponse};
pub use utils::error::{ContactError, Result};
