//! Random seat agent - makes random legal moves.
//!
//! [`RandomPlayer`] is the reference implementation of [`AiPlayer`](super::AiPlayer).
//! The table simulator seats five of them, and the randomized end-to-end
//! tests use seeded instances for reproducible hands.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, CallDecision};
use crate::domain::cards_logic::is_fail_of;
use crate::domain::player_view::PlayerView;
use crate::domain::Card;

/// Agent that chooses uniformly among legal options in every phase.
///
/// # Usage
///
/// ```rust,ignore
/// use backend::ai::RandomPlayer;
///
/// // Non-deterministic (uses system entropy)
/// let random_ai = RandomPlayer::new(None);
///
/// // Deterministic (uses seed for reproducible behavior)
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    /// Create a new `RandomPlayer`.
    ///
    /// * `Some(seed)` - reproducible choices
    /// * `None` - seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_pick(&self, _view: &PlayerView) -> Result<bool, AiError> {
        let mut rng = self.rng()?;
        Ok(rng.random_bool(0.5))
    }

    fn choose_call(&self, view: &PlayerView) -> Result<CallDecision, AiError> {
        let Some(options) = &view.calling_options else {
            return Err(AiError::InvalidMove("No calling options available".into()));
        };
        if options.go_alone {
            return Ok(CallDecision::ALONE);
        }

        let mut rng = self.rng()?;
        // Going alone is always allowed; weigh it like one more option.
        let idx = rng.random_range(0..=options.options.len());
        let Some(option) = options.options.get(idx) else {
            return Ok(CallDecision::ALONE);
        };
        let under_card = if options.must_select_under_card {
            let card = view
                .hand
                .choose(&mut *rng)
                .copied()
                .ok_or_else(|| AiError::InvalidMove("No card to play under".into()))?;
            Some(card)
        } else {
            None
        };

        Ok(CallDecision {
            suit: Some(option.suit),
            go_alone: false,
            under_card,
        })
    }

    fn choose_bury(&self, view: &PlayerView) -> Result<[Card; 2], AiError> {
        let mut pool: Vec<Card> = view
            .hand
            .iter()
            .copied()
            .filter(|&c| Some(c) != view.under_card)
            .collect();

        let mut rng = self.rng()?;
        // A plain call (no under card) must keep one card of the called suit.
        if let (Some(call), None) = (view.call, view.under_card) {
            let holds: Vec<Card> = pool
                .iter()
                .copied()
                .filter(|&c| is_fail_of(c, call.suit))
                .collect();
            if let Some(&keep) = holds.choose(&mut *rng) {
                pool.retain(|&c| c != keep);
            }
        }

        pool.shuffle(&mut *rng);
        match pool.as_slice() {
            [a, b, ..] => Ok([*a, *b]),
            _ => Err(AiError::InvalidMove("Not enough cards to bury".into())),
        }
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        if view.legal_plays.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let mut rng = self.rng()?;
        view.legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
