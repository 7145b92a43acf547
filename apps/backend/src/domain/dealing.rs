//! Deck construction, shuffle sources and the deal.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{BLIND_SIZE, DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::state::{left_of_dealer, seat_offset, HandState, Phase, PhaseKind, PickingState};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate the 32-card stripped deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Source of deck permutations consumed at deal time.
pub trait ShuffleSource: Send {
    fn shuffle(&mut self, deck: &mut [Card]);
}

/// Uniform shuffle from the thread-local OS-seeded generator. Not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsShuffle;

impl ShuffleSource for OsShuffle {
    fn shuffle(&mut self, deck: &mut [Card]) {
        deck.shuffle(&mut rand::rng());
    }
}

/// Reproducible shuffle for tests and simulation.
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: ChaCha20Rng,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ShuffleSource for SeededShuffle {
    fn shuffle(&mut self, deck: &mut [Card]) {
        deck.shuffle(&mut self.rng);
    }
}

/// Shuffle a fresh deck and deal it into `state`.
pub fn start_hand(
    state: &mut HandState,
    shuffle: &mut dyn ShuffleSource,
) -> Result<(), DomainError> {
    let mut deck = full_deck();
    shuffle.shuffle(&mut deck);
    deal_from_deck(state, &deck)
}

/// Deal a specific deck order: one card at a time clockwise starting left of
/// the dealer; the last two cards form the blind.
pub fn deal_from_deck(state: &mut HandState, deck: &[Card]) -> Result<(), DomainError> {
    if !matches!(state.phase, Phase::Dealing) {
        return Err(crate::domain::state::phase_mismatch(
            PhaseKind::Dealing,
            &state.phase,
        ));
    }
    validate_deck(deck)?;

    let first = left_of_dealer(state.dealer);
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    let dealt = PLAYERS * HAND_SIZE;
    for (i, &card) in deck[..dealt].iter().enumerate() {
        let seat = seat_offset(first, (i % PLAYERS) as i8);
        hands[seat as usize].push(card);
    }
    for hand in hands.iter_mut() {
        hand.sort();
    }

    let blind = deck[dealt..dealt + BLIND_SIZE].to_vec();
    state.hands = hands;
    state.phase = Phase::Picking(PickingState {
        blind,
        turn: first,
        passed: 0,
    });
    Ok(())
}

fn validate_deck(deck: &[Card]) -> Result<(), DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::WrongCardCount,
            format!("Deck must have {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }
    let mut sorted = deck.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::DuplicateCard,
            "Deck contains duplicate cards",
        ));
    }
    Ok(())
}
