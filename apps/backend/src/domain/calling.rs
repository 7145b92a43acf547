//! Partner calling: which calls the picker may make, and making one.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::count_fail_of;
use crate::domain::state::{
    not_picker, phase_mismatch, validate_seat, BuryingState, CallKind, HandState, PartnerCall,
    Phase, PhaseKind, Seat,
};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One call the picker may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOption {
    pub suit: Suit,
    pub rank: Rank,
    pub kind: CallKind,
}

/// Calls available to the picker for their 8-card hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallingOptions {
    /// No call is possible; the picker must play alone.
    pub go_alone: bool,
    pub must_select_under_card: bool,
    pub options: Vec<CallOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub picker: Seat,
    /// `None` when the picker goes alone.
    pub call: Option<PartnerCall>,
}

impl CallResult {
    pub fn went_alone(&self) -> bool {
        self.call.is_none()
    }
}

fn holds(hand: &[Card], rank: Rank, suit: Suit) -> bool {
    hand.contains(&Card::new(rank, suit))
}

/// Compute the calls open to a picker holding `hand`.
pub fn callable_options(hand: &[Card]) -> CallingOptions {
    let holds_all_aces = Suit::FAIL.iter().all(|&s| holds(hand, Rank::Ace, s));

    if holds_all_aces {
        let options: Vec<CallOption> = Suit::FAIL
            .iter()
            .filter(|&&s| !holds(hand, Rank::Ten, s))
            .map(|&suit| CallOption {
                suit,
                rank: Rank::Ten,
                kind: CallKind::Under,
            })
            .collect();
        if options.is_empty() {
            return CallingOptions {
                go_alone: true,
                must_select_under_card: false,
                options,
                reason: Some("Picker holds every fail ace and ten".to_string()),
            };
        }
        return CallingOptions {
            go_alone: false,
            must_select_under_card: false,
            options,
            reason: Some("Picker holds every fail ace; call a ten".to_string()),
        };
    }

    let normal: Vec<CallOption> = Suit::FAIL
        .iter()
        .filter(|&&s| count_fail_of(hand, s) > 0 && !holds(hand, Rank::Ace, s))
        .map(|&suit| CallOption {
            suit,
            rank: Rank::Ace,
            kind: CallKind::Normal,
        })
        .collect();
    if !normal.is_empty() {
        return CallingOptions {
            go_alone: false,
            must_select_under_card: false,
            options: normal,
            reason: None,
        };
    }

    let under: Vec<CallOption> = Suit::FAIL
        .iter()
        .filter(|&&s| !holds(hand, Rank::Ace, s))
        .map(|&suit| CallOption {
            suit,
            rank: Rank::Ace,
            kind: CallKind::Under,
        })
        .collect();
    CallingOptions {
        go_alone: false,
        must_select_under_card: true,
        options: under,
        reason: Some("No fail suit without its ace; call under".to_string()),
    }
}

/// Name a partner, or go alone.
///
/// `suit` is the called suit; `under_card` must be given exactly when the
/// options require one.
pub fn call_partner(
    state: &mut HandState,
    seat: Seat,
    suit: Option<Suit>,
    go_alone: bool,
    under_card: Option<Card>,
) -> Result<CallResult, DomainError> {
    validate_seat(seat)?;
    let Phase::Calling(calling) = &state.phase else {
        return Err(phase_mismatch(PhaseKind::Calling, &state.phase));
    };
    let picker = calling.picker;
    if seat != picker {
        return Err(not_picker(seat));
    }

    let hand = &state.hands[picker as usize];
    let options = callable_options(hand);

    let call = match (go_alone, suit) {
        (true, Some(suit)) => {
            return Err(DomainError::validation(
                ValidationKind::IllegalCall,
                format!("Cannot both go alone and call {suit}"),
            ));
        }
        (true, None) => {
            if under_card.is_some() {
                return Err(DomainError::validation(
                    ValidationKind::UnexpectedUnderCard,
                    "Going alone takes no under card",
                ));
            }
            None
        }
        (false, None) => {
            return Err(DomainError::validation(
                ValidationKind::IllegalCall,
                "A suit must be called unless going alone",
            ));
        }
        (false, Some(suit)) => {
            if options.go_alone {
                return Err(DomainError::validation(
                    ValidationKind::IllegalCall,
                    "Picker must go alone",
                ));
            }
            let Some(option) = options.options.iter().find(|o| o.suit == suit) else {
                return Err(DomainError::validation(
                    ValidationKind::IllegalCall,
                    format!("Calling {suit} is not allowed for this hand"),
                ));
            };
            let under_card = match (options.must_select_under_card, under_card) {
                (true, None) => {
                    return Err(DomainError::validation(
                        ValidationKind::UnderCardRequired,
                        "Under call requires an under card",
                    ));
                }
                (true, Some(card)) => {
                    if !hand.contains(&card) {
                        return Err(DomainError::validation(
                            ValidationKind::CardNotInHand,
                            format!("Under card {card} is not in hand"),
                        ));
                    }
                    Some(card)
                }
                (false, Some(_)) => {
                    return Err(DomainError::validation(
                        ValidationKind::UnexpectedUnderCard,
                        "This call takes no under card",
                    ));
                }
                (false, None) => None,
            };
            Some(PartnerCall {
                suit: option.suit,
                rank: option.rank,
                kind: option.kind,
                under_card,
            })
        }
    };

    state.phase = Phase::Burying(BuryingState { picker, call });
    Ok(CallResult { picker, call })
}
