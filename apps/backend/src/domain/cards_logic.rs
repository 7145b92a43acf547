//! Card game logic: point values, trump classification, comparing card strength

use super::cards_types::{Card, EffectiveSuit, Rank, Suit};

/// Point value of a single card (A=11, 10=10, K=4, Q=3, J=2, pips=0).
pub fn card_points(card: Card) -> u8 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten => 10,
        Rank::King => 4,
        Rank::Queen => 3,
        Rank::Jack => 2,
        Rank::Nine | Rank::Eight | Rank::Seven => 0,
    }
}

pub fn cards_points(cards: &[Card]) -> u8 {
    cards.iter().map(|&c| card_points(c)).sum()
}

/// All queens, all jacks and all diamonds are trump.
pub fn is_trump(card: Card) -> bool {
    matches!(card.rank, Rank::Queen | Rank::Jack) || card.suit == Suit::Diamonds
}

pub fn effective_suit(card: Card) -> EffectiveSuit {
    if is_trump(card) {
        EffectiveSuit::Trump
    } else {
        EffectiveSuit::Fail(card.suit)
    }
}

/// Non-trump card of the given printed suit.
pub fn is_fail_of(card: Card, suit: Suit) -> bool {
    effective_suit(card) == EffectiveSuit::Fail(suit)
}

fn court_suit_order(suit: Suit) -> u8 {
    match suit {
        Suit::Clubs => 3,
        Suit::Spades => 2,
        Suit::Hearts => 1,
        Suit::Diamonds => 0,
    }
}

fn fail_rank_order(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 7,
        Rank::Ten => 6,
        Rank::King => 5,
        Rank::Queen => 4,
        Rank::Jack => 3,
        Rank::Nine => 2,
        Rank::Eight => 1,
        Rank::Seven => 0,
    }
}

/// Power within the trump suit, higher wins. `None` for fail cards.
///
/// Queens (C>S>H>D) over jacks (C>S>H>D) over diamond pips (A>10>K>9>8>7).
pub fn trump_power(card: Card) -> Option<u8> {
    if !is_trump(card) {
        return None;
    }
    Some(match card.rank {
        Rank::Queen => 20 + court_suit_order(card.suit),
        Rank::Jack => 10 + court_suit_order(card.suit),
        rank => fail_rank_order(rank),
    })
}

/// Power within a fail suit (A>10>K>9>8>7). `None` for trump cards.
pub fn fail_power(card: Card) -> Option<u8> {
    if is_trump(card) {
        None
    } else {
        Some(fail_rank_order(card.rank))
    }
}

/// Whether `a` beats `b` in a trick whose lead effective suit is `lead`.
pub fn card_beats(a: Card, b: Card, lead: EffectiveSuit) -> bool {
    match (trump_power(a), trump_power(b)) {
        (Some(pa), Some(pb)) => pa > pb,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => {
            let a_follows = effective_suit(a) == lead;
            let b_follows = effective_suit(b) == lead;
            match (a_follows, b_follows) {
                (true, false) => true,
                (false, true) => false,
                // Both follow: same fail suit, rank decides
                (true, true) => fail_power(a) > fail_power(b),
                (false, false) => false,
            }
        }
    }
}

pub fn hand_has_effective_suit(hand: &[Card], suit: EffectiveSuit) -> bool {
    hand.iter().any(|&c| effective_suit(c) == suit)
}

/// Number of cards in `hand` whose effective suit is the fail suit `suit`.
pub fn count_fail_of(hand: &[Card], suit: Suit) -> usize {
    hand.iter().filter(|&&c| is_fail_of(c, suit)).count()
}
