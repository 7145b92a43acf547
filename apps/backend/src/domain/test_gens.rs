// Proptest generators for domain types.
// These generators ensure unique cards and reachable hand states for property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Seat, TrickPlay};
use crate::domain::{Card, EffectiveSuit, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random fail suit (never diamonds)
pub fn fail_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Spades), Just(Suit::Hearts)]
}

/// Generate a random EffectiveSuit
pub fn effective_suit() -> impl Strategy<Value = EffectiveSuit> {
    prop_oneof![
        Just(EffectiveSuit::Trump),
        fail_suit().prop_map(EffectiveSuit::Fail),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Seven),
        Just(Rank::Eight),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ace),
    ]
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by creating a shuffled subset of the deck
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a hand of 1 to 8 unique cards
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=8usize).prop_flat_map(unique_cards)
}

/// Generate a Seat (0-4)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=4u8
}

/// Generate a full shuffled deck order
pub fn shuffled_deck() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(full_deck().len())
}

/// Complete trick: 5 unique cards, optionally one of them (not the first)
/// marked as the under card.
/// Returns (plays, lead)
pub fn complete_trick() -> impl Strategy<Value = (Vec<TrickPlay>, EffectiveSuit)> {
    (seat(), unique_cards(PLAYERS), proptest::option::of(1usize..PLAYERS)).prop_map(
        |(leader, cards, under_idx)| {
            let lead = crate::domain::cards_logic::effective_suit(cards[0]);
            let plays = cards
                .iter()
                .enumerate()
                .map(|(i, &card)| TrickPlay {
                    seat: crate::domain::state::seat_offset(leader, i as i8),
                    card,
                    is_under: Some(i) == under_idx,
                })
                .collect();
            (plays, lead)
        },
    )
}

/// Seed for a reproducible shuffle source or agent
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
