#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{create_ai, AiError, AiPlayer, CallDecision, RandomPlayer};
pub use config::TableConfig;
pub use error::{AppError, Rejection};
pub use errors::ErrorCode;
pub use services::{GameFlowService, HandStarted, TableId, TableRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
