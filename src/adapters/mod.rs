// Adapters layer: concrete implementations for external systems (provider, http server, lambda).

#[cfg(feature = "cli")]
pub mod http;
pub mod lambda;
pub mod resend;
