//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per hand plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Random,
}

impl AiType {
    /// Name understood by the backend's agent factory.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Random => "random",
        }
    }
}
