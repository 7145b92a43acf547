//! Domain-level error type used across the engine and services.
//!
//! This error type is transport- and storage-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why an engine operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Operation invoked outside its phase
    PhaseMismatch,
    /// Seat acting when it is not their turn
    OutOfTurn,
    /// Picker-only operation attempted by another seat
    NotPicker,
    /// Card id not currently held
    CardNotInHand,
    /// Wrong number of cards submitted
    WrongCardCount,
    /// Same card submitted twice
    DuplicateCard,
    /// Bury would leave the picker without a fail card of the called suit
    HoldCardRequired,
    /// The under card must stay in hand
    UnderCardBuried,
    /// Requested call is not among the callable options
    IllegalCall,
    /// Under call accepted without naming an under card
    UnderCardRequired,
    /// Under card named for a call that does not use one
    UnexpectedUnderCard,
    /// Card outside the legal-move set
    IllegalPlay,
    ParseCard,
    InvalidSeat,
    Other(String),
}

/// The five rejection categories the session layer surfaces to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Phase,
    Turn,
    Authority,
    HandContent,
    Rule,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Table,
    Hand,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    HandInProgress,
    TableLimit,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }

    /// Rejection category for validation errors.
    pub fn category(&self) -> Option<ErrorCategory> {
        let kind = self.kind()?;
        Some(match kind {
            ValidationKind::PhaseMismatch => ErrorCategory::Phase,
            ValidationKind::OutOfTurn => ErrorCategory::Turn,
            ValidationKind::NotPicker => ErrorCategory::Authority,
            ValidationKind::CardNotInHand
            | ValidationKind::WrongCardCount
            | ValidationKind::DuplicateCard
            | ValidationKind::ParseCard
            | ValidationKind::InvalidSeat => ErrorCategory::HandContent,
            ValidationKind::HoldCardRequired
            | ValidationKind::UnderCardBuried
            | ValidationKind::IllegalCall
            | ValidationKind::UnderCardRequired
            | ValidationKind::UnexpectedUnderCard
            | ValidationKind::IllegalPlay
            | ValidationKind::Other(_) => ErrorCategory::Rule,
        })
    }
}
