//! Session-layer services: the live table registry and the game flow over it.

pub mod game_flow;
pub mod tables;

pub use game_flow::{GameFlowService, HandStarted};
pub use tables::{Table, TableHandle, TableId, TableRegistry};
