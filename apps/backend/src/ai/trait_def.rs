//! Seat agent trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::domain::{Card, Suit};
use crate::error::AppError;

/// Errors that can occur during agent decision-making.
#[derive(Debug)]
pub enum AiError {
    /// Agent encountered an internal error
    Internal(String),
    /// Agent was asked to act with nothing legal to choose from
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// A picker's calling decision, shaped like the `call_partner` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallDecision {
    pub suit: Option<Suit>,
    pub go_alone: bool,
    pub under_card: Option<Card>,
}

impl CallDecision {
    pub const ALONE: CallDecision = CallDecision {
        suit: None,
        go_alone: true,
        under_card: None,
    };
}

/// Trait for seat agents.
///
/// Implementations receive the redacted view of their own seat and must
/// choose a legal action. Use [`PlayerView::legal_plays`] and
/// [`PlayerView::calling_options`] rather than re-deriving the rules.
pub trait AiPlayer: Send + Sync {
    /// `true` to pick up the blind, `false` to pass.
    fn choose_pick(&self, view: &PlayerView) -> Result<bool, AiError>;

    /// Name a partner or go alone. Only asked of the picker.
    fn choose_call(&self, view: &PlayerView) -> Result<CallDecision, AiError>;

    /// Two cards to bury. Only asked of the picker.
    fn choose_bury(&self, view: &PlayerView) -> Result<[Card; 2], AiError>;

    /// Choose a card to play from `view.legal_plays`.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
