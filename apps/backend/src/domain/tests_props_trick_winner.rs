//! Property-based tests for trick resolution.

use proptest::prelude::*;

use crate::domain::cards_logic::{card_beats, effective_suit, is_trump};
use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every complete trick has a winner, and it is never the under card.
    #[test]
    fn prop_winner_is_never_under((plays, lead) in test_gens::complete_trick()) {
        let winner = resolve_trick(&plays, lead);
        prop_assert!(winner.is_some());
        let winner = winner.unwrap();
        let play = plays.iter().find(|p| p.seat == winner).unwrap();
        prop_assert!(!play.is_under);
    }

    /// No counted card beats the winning card.
    #[test]
    fn prop_winner_is_unbeaten((plays, lead) in test_gens::complete_trick()) {
        let winner = resolve_trick(&plays, lead).unwrap();
        let best = plays.iter().find(|p| p.seat == winner).unwrap().card;
        for play in plays.iter().filter(|p| !p.is_under && p.seat != winner) {
            prop_assert!(
                !card_beats(play.card, best, lead),
                "{:?} beats winning {:?}",
                play.card,
                best
            );
        }
    }

    /// Trump takes the trick when any counted trump is played; otherwise the
    /// winner followed the led suit.
    #[test]
    fn prop_trump_or_lead_suit_wins((plays, lead) in test_gens::complete_trick()) {
        let winner = resolve_trick(&plays, lead).unwrap();
        let best = plays.iter().find(|p| p.seat == winner).unwrap().card;
        let any_trump = plays.iter().any(|p| !p.is_under && is_trump(p.card));
        if any_trump {
            prop_assert!(is_trump(best));
        } else {
            prop_assert_eq!(effective_suit(best), lead);
        }
    }
}
