// src/infrastructure/email/mod.rs
pub mod log;
pub mod relay;

pub use log::LoggingEmailDispatcher;
pub use relay::{HttpRelayDispatcher, RelaySettings};
