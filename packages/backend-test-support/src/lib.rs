//! Backend test support utilities
//!
//! This crate provides utilities shared by the backend's unit tests,
//! integration tests and the table simulator's tests.

pub mod logging;
