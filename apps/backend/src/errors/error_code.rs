//! Error codes surfaced to the session layer.
//!
//! This module defines all error codes used throughout the backend.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE; the session layer forwards
//! them verbatim to the acting client.

use core::fmt;

use super::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Centralized error codes for the Sheepshead backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Phase / turn / authority
    /// Operation invoked outside its phase
    PhaseMismatch,
    /// Wrong seat acting
    OutOfTurn,
    /// Picker-only operation by another seat
    NotPicker,

    // Hand content
    /// Card not in hand
    CardNotInHand,
    /// Wrong number of cards submitted
    WrongCardCount,
    /// Same card submitted twice
    DuplicateCard,
    /// Parse card error
    ParseCard,
    /// Invalid seat number
    InvalidSeat,

    // Rule violations
    /// Picker must keep a hold card of the called suit
    HoldCardRequired,
    /// The under card cannot be buried
    UnderCardBuried,
    /// Call not offered for this hand
    IllegalCall,
    /// Under call requires an under card
    UnderCardRequired,
    /// Under card given for a call that does not take one
    UnexpectedUnderCard,
    /// Card outside the legal-move set
    IllegalPlay,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Table not found
    TableNotFound,
    /// No hand has been started at the table
    HandNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// A hand is still being played at the table
    HandInProgress,
    /// Registry is at capacity
    TableLimit,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::NotPicker => "NOT_PICKER",

            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::WrongCardCount => "WRONG_CARD_COUNT",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSeat => "INVALID_SEAT",

            Self::HoldCardRequired => "HOLD_CARD_REQUIRED",
            Self::UnderCardBuried => "UNDER_CARD_BURIED",
            Self::IllegalCall => "ILLEGAL_CALL",
            Self::UnderCardRequired => "UNDER_CARD_REQUIRED",
            Self::UnexpectedUnderCard => "UNEXPECTED_UNDER_CARD",
            Self::IllegalPlay => "ILLEGAL_PLAY",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::HandNotFound => "HAND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::HandInProgress => "HAND_IN_PROGRESS",
            Self::TableLimit => "TABLE_LIMIT",
            Self::Conflict => "CONFLICT",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::PhaseMismatch => Self::PhaseMismatch,
                ValidationKind::OutOfTurn => Self::OutOfTurn,
                ValidationKind::NotPicker => Self::NotPicker,
                ValidationKind::CardNotInHand => Self::CardNotInHand,
                ValidationKind::WrongCardCount => Self::WrongCardCount,
                ValidationKind::DuplicateCard => Self::DuplicateCard,
                ValidationKind::HoldCardRequired => Self::HoldCardRequired,
                ValidationKind::UnderCardBuried => Self::UnderCardBuried,
                ValidationKind::IllegalCall => Self::IllegalCall,
                ValidationKind::UnderCardRequired => Self::UnderCardRequired,
                ValidationKind::UnexpectedUnderCard => Self::UnexpectedUnderCard,
                ValidationKind::IllegalPlay => Self::IllegalPlay,
                ValidationKind::ParseCard => Self::ParseCard,
                ValidationKind::InvalidSeat => Self::InvalidSeat,
                ValidationKind::Other(_) => Self::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Table => Self::TableNotFound,
                NotFoundKind::Hand => Self::HandNotFound,
                NotFoundKind::Other(_) => Self::NotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::HandInProgress => Self::HandInProgress,
                ConflictKind::TableLimit => Self::TableLimit,
                ConflictKind::Other(_) => Self::Conflict,
            },
        }
    }
}
