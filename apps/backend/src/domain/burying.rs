use crate::domain::cards_logic::{cards_points, count_fail_of};
use crate::domain::rules::{BLIND_SIZE, PLAYERS};
use crate::domain::state::{
    left_of_dealer, not_picker, phase_mismatch, validate_seat, HandState, Phase, PhaseKind,
    PlayState, Seat,
};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of the bury.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuryResult {
    pub buried: Vec<Card>,
    pub buried_points: u8,
    /// Seat that leads the first trick.
    pub leader: Seat,
}

/// Put two cards from the picker's hand face down.
pub fn bury(state: &mut HandState, seat: Seat, cards: &[Card]) -> Result<BuryResult, DomainError> {
    validate_seat(seat)?;
    let Phase::Burying(burying) = &state.phase else {
        return Err(phase_mismatch(PhaseKind::Burying, &state.phase));
    };
    let picker = burying.picker;
    let call = burying.call;
    if seat != picker {
        return Err(not_picker(seat));
    }

    if cards.len() != BLIND_SIZE {
        return Err(DomainError::validation(
            ValidationKind::WrongCardCount,
            format!("Must bury exactly {BLIND_SIZE} cards, got {}", cards.len()),
        ));
    }
    if cards[0] == cards[1] {
        return Err(DomainError::validation(
            ValidationKind::DuplicateCard,
            format!("Card {} submitted twice", cards[0]),
        ));
    }

    let hand = &state.hands[picker as usize];
    if let Some(missing) = cards.iter().find(|c| !hand.contains(c)) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {missing} is not in hand"),
        ));
    }

    if let Some(call) = call {
        if let Some(under) = call.under_card {
            if cards.contains(&under) {
                return Err(DomainError::validation(
                    ValidationKind::UnderCardBuried,
                    format!("Under card {under} cannot be buried"),
                ));
            }
        } else {
            let remaining: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|c| !cards.contains(c))
                .collect();
            if count_fail_of(&remaining, call.suit) == 0 {
                return Err(DomainError::validation(
                    ValidationKind::HoldCardRequired,
                    format!("Must keep a {} to hold the called suit", call.suit),
                ));
            }
        }
    }

    let buried = cards.to_vec();
    state.hands[picker as usize].retain(|c| !buried.contains(c));
    let leader = left_of_dealer(state.dealer);
    let buried_points = cards_points(&buried);

    state.phase = Phase::Playing(PlayState {
        picker,
        call,
        buried: buried.clone(),
        partner: None,
        under_card_played: false,
        called_suit_led: false,
        turn: leader,
        leader,
        lead: None,
        current_trick: Vec::with_capacity(PLAYERS),
        completed_tricks: Vec::new(),
        tricks_won: [0; PLAYERS],
    });

    Ok(BuryResult {
        buried,
        buried_points,
        leader,
    })
}
