//! Seat agents - automated decisions from a seat's [`PlayerView`](crate::domain::PlayerView).
//!
//! This module provides:
//! - the [`AiPlayer`] trait
//! - [`RandomPlayer`]: random legal moves (seedable for tests)
//! - [`create_ai`]: construct an agent from a type name and JSON config

mod random;
mod trait_def;

pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer, CallDecision};

/// Create an agent from `ai_type` and optional config.
///
/// Currently supports:
/// - "random": RandomPlayer with optional `seed` from config
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "random" => {
            let seed = config.and_then(|c| c.get("seed")).and_then(|s| s.as_u64());
            Some(Box::new(RandomPlayer::new(seed)))
        }
        _ => None,
    }
}
