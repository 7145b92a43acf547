//! Error handling for the Sheepshead backend.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, ErrorCategory};
pub use error_code::ErrorCode;
