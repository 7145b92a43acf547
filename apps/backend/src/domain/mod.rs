//! Domain layer: the pure Sheepshead rule engine.

pub mod burying;
pub mod calling;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod legality;
pub mod picking;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod summary;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_burying;
#[cfg(test)]
mod tests_calling;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use burying::{bury, BuryResult};
pub use calling::{call_partner, callable_options, CallOption, CallResult, CallingOptions};
pub use cards_logic::{card_beats, card_points, effective_suit, is_trump};
pub use cards_types::{Card, EffectiveSuit, Rank, Suit};
pub use dealing::{full_deck, start_hand, OsShuffle, SeededShuffle, ShuffleSource};
pub use picking::{pass, pick, PickResult};
pub use player_view::{player_view, PlayerView};
pub use scoring::{HandResult, NormalResult, SchwanzerResult};
pub use seed_derivation::{derive_agent_seed, derive_dealing_seed};
pub use snapshot::{snapshot, HandSnapshot};
pub use state::{CallKind, HandState, PartnerCall, Phase, PhaseKind, Seat};
pub use tricks::{legal_moves, play_card, PlayCardResult};
