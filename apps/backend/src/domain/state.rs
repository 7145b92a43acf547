use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandResult;
use crate::domain::{Card, EffectiveSuit, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=4

/// How the picker named a partner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallKind {
    /// Picker holds a fail card of the suit but not its ace.
    Normal,
    /// Picker holds no fail card of the suit; plays an under card in its place,
    /// or (calling a ten) already holds the suit's ace.
    Under,
}

/// Partner call fixed during the calling phase. Never changes afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PartnerCall {
    pub suit: Suit,
    pub rank: Rank,
    pub kind: CallKind,
    /// Card the picker holds back to play when the called suit is led.
    pub under_card: Option<Card>,
}

impl PartnerCall {
    /// The card whose holder becomes the partner.
    pub fn called_card(&self) -> Card {
        Card::new(self.rank, self.suit)
    }

    pub fn called_lead(&self) -> EffectiveSuit {
        EffectiveSuit::Fail(self.suit)
    }
}

/// One card placed into a trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub seat: Seat,
    pub card: Card,
    /// Played face down as the under card; never wins the trick.
    pub is_under: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub plays: Vec<TrickPlay>,
    pub lead: EffectiveSuit,
    pub winner: Seat,
    pub points: u8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PickingState {
    pub blind: Vec<Card>,
    pub turn: Seat,
    pub passed: u8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CallingState {
    pub picker: Seat,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BuryingState {
    pub picker: Seat,
    /// `None` when the picker goes alone.
    pub call: Option<PartnerCall>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayState {
    pub picker: Seat,
    pub call: Option<PartnerCall>,
    pub buried: Vec<Card>,
    /// Set only once the identifying card has been played.
    pub partner: Option<Seat>,
    pub under_card_played: bool,
    /// Whether the called suit has led a completed trick.
    pub called_suit_led: bool,
    pub turn: Seat,
    pub leader: Seat,
    pub lead: Option<EffectiveSuit>,
    pub current_trick: Vec<TrickPlay>,
    pub completed_tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; PLAYERS],
}

impl PlayState {
    pub fn under_card(&self) -> Option<Card> {
        self.call.and_then(|c| c.under_card)
    }

    /// Whether the under card is still in the picker's hand.
    pub fn under_card_pending(&self) -> bool {
        self.under_card().is_some() && !self.under_card_played
    }

    pub fn trick_no(&self) -> usize {
        self.completed_tricks.len() + 1
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoringState {
    pub result: HandResult,
    pub completed_tricks: Vec<CompletedTrick>,
    pub buried: Vec<Card>,
    /// Untouched blind; only non-empty when everyone passed.
    pub blind: Vec<Card>,
}

/// Hand lifecycle. Each phase carries only the data that exists in it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Phase {
    Dealing,
    Picking(PickingState),
    Calling(CallingState),
    Burying(BuryingState),
    Playing(PlayState),
    Scoring(ScoringState),
}

/// Payload-free phase tag for messages and projections.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    Dealing,
    Picking,
    Calling,
    Burying,
    Playing,
    Scoring,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Dealing => PhaseKind::Dealing,
            Phase::Picking(_) => PhaseKind::Picking,
            Phase::Calling(_) => PhaseKind::Calling,
            Phase::Burying(_) => PhaseKind::Burying,
            Phase::Playing(_) => PhaseKind::Playing,
            Phase::Scoring(_) => PhaseKind::Scoring,
        }
    }
}

/// Entire hand container, sufficient for pure domain operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandState {
    pub dealer: Seat,
    /// Seats' cards. Sorted after the deal; cards are removed as played.
    pub hands: [Vec<Card>; PLAYERS],
    pub phase: Phase,
}

impl HandState {
    /// Fresh hand awaiting the deal.
    pub fn new(dealer: Seat) -> Result<Self, DomainError> {
        let dealer = validate_seat(dealer)?;
        Ok(Self {
            dealer,
            hands: Default::default(),
            phase: Phase::Dealing,
        })
    }

    /// Dealer for the hand that follows this one.
    pub fn next_dealer(&self) -> Seat {
        next_seat(self.dealer)
    }

    /// Seat expected to act next, if anyone.
    pub fn to_act(&self) -> Option<Seat> {
        match &self.phase {
            Phase::Picking(p) => Some(p.turn),
            Phase::Calling(c) => Some(c.picker),
            Phase::Burying(b) => Some(b.picker),
            Phase::Playing(p) => Some(p.turn),
            Phase::Dealing | Phase::Scoring(_) => None,
        }
    }

    pub fn picker(&self) -> Option<Seat> {
        match &self.phase {
            Phase::Calling(c) => Some(c.picker),
            Phase::Burying(b) => Some(b.picker),
            Phase::Playing(p) => Some(p.picker),
            Phase::Scoring(s) => s.result.picker(),
            Phase::Dealing | Phase::Picking(_) => None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.hands
            .get(seat as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Scoring(_))
    }

    pub fn result(&self) -> Option<&HandResult> {
        match &self.phase {
            Phase::Scoring(s) => Some(&s.result),
            _ => None,
        }
    }
}

/// Seat / turn math helpers (5 fixed seats: 0..=4).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → ... → 4 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Seat to the left of the dealer: first to pick, first to lead.
#[inline]
pub fn left_of_dealer(dealer: Seat) -> Seat {
    next_seat(dealer)
}

/// Expected actor seat during a trick.
#[inline]
pub fn expected_actor(leader: Seat, play_count: usize) -> Seat {
    seat_offset(leader, play_count as i8)
}

pub fn validate_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} is out of range"),
        ))
    }
}

pub(crate) fn phase_mismatch(expected: PhaseKind, actual: &Phase) -> DomainError {
    DomainError::validation(
        ValidationKind::PhaseMismatch,
        format!("Expected {expected:?} phase, hand is in {:?}", actual.kind()),
    )
}

pub(crate) fn out_of_turn(seat: Seat, to_act: Seat) -> DomainError {
    DomainError::validation(
        ValidationKind::OutOfTurn,
        format!("Seat {seat} acted; seat {to_act} is to act"),
    )
}

pub(crate) fn not_picker(seat: Seat) -> DomainError {
    DomainError::validation(
        ValidationKind::NotPicker,
        format!("Seat {seat} is not the picker"),
    )
}
