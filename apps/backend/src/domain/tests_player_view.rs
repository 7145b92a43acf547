use crate::domain::burying::bury;
use crate::domain::calling::call_partner;
use crate::domain::player_view::{player_view, PublicCall};
use crate::domain::state::{HandState, PhaseKind};
use crate::domain::test_state_helpers::{cards, dealt_state, pick_by, play_out_lowest};
use crate::domain::tricks::play_card;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::ValidationKind;

fn card(token: &str) -> Card {
    cards(&[token])[0]
}

fn dealt() -> HandState {
    dealt_state(
        0,
        [
            &["JD", "8D", "7D", "9H", "8H", "KS"],
            &["AH", "AS", "QC", "QS", "JC", "JS"],
            &["AC", "9C", "QH", "7H", "8S", "7S"],
            &["TC", "KC", "QD", "JH", "9S", "TS"],
            &["8C", "7C", "KD", "9D", "TH", "KH"],
        ],
        &["AD", "TD"],
    )
}

/// Seat 1 picks, calls clubs under with TD and buries both aces.
fn under_in_play() -> HandState {
    let mut state = dealt();
    pick_by(&mut state, 1);
    call_partner(&mut state, 1, Some(Suit::Clubs), false, Some(card("TD"))).unwrap();
    bury(&mut state, 1, &cards(&["AS", "AH"])).unwrap();
    state
}

#[test]
fn picking_view_hides_other_hands_and_blind() {
    let state = dealt();
    let view = player_view(&state, 3).unwrap();
    assert_eq!(view.phase, PhaseKind::Picking);
    assert_eq!(view.hand, state.hands[3]);
    assert_eq!(view.hand_counts, [6; 5]);
    assert_eq!(view.blind_count, 2);
    assert_eq!(view.to_act, Some(1));
    assert!(!view.is_my_turn());
    assert!(view.legal_plays.is_empty());
    assert_eq!(view.picker, None);
}

#[test]
fn invalid_seat_is_rejected() {
    let state = dealt();
    let err = player_view(&state, 5).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::InvalidSeat));
}

#[test]
fn only_the_picker_sees_calling_options() {
    let mut state = dealt();
    pick_by(&mut state, 1);

    let picker = player_view(&state, 1).unwrap();
    assert!(picker.is_picker());
    assert_eq!(picker.hand.len(), 8);
    let options = picker.calling_options.unwrap();
    assert!(options.must_select_under_card);

    let other = player_view(&state, 2).unwrap();
    assert!(other.calling_options.is_none());
    assert_eq!(other.hand_counts[1], 8);
}

#[test]
fn under_card_and_bury_are_picker_only() {
    let state = under_in_play();

    let picker = player_view(&state, 1).unwrap();
    assert_eq!(picker.under_card, Some(card("TD")));
    assert_eq!(picker.buried, Some(cards(&["AS", "AH"])));

    let other = player_view(&state, 2).unwrap();
    assert_eq!(other.under_card, None);
    assert_eq!(other.buried, None);
    assert_eq!(
        other.call,
        Some(PublicCall {
            suit: Suit::Clubs,
            rank: Rank::Ace,
        })
    );
    assert!(!other.went_alone);
}

#[test]
fn legal_plays_only_on_turn() {
    let state = under_in_play();
    let leader = player_view(&state, 1).unwrap();
    assert!(leader.is_my_turn());
    assert!(!leader.legal_plays.is_empty());
    assert!(player_view(&state, 2).unwrap().legal_plays.is_empty());
}

#[test]
fn played_under_card_is_face_down_for_others() {
    let mut state = under_in_play();
    for (seat, token) in [(1, "JC"), (2, "QH"), (3, "QD"), (4, "9D"), (0, "7D")] {
        play_card(&mut state, seat, card(token)).unwrap();
    }
    for (seat, token) in [(2, "AC"), (3, "TC"), (4, "7C"), (0, "8D"), (1, "TD")] {
        play_card(&mut state, seat, card(token)).unwrap();
    }

    let other = player_view(&state, 3).unwrap();
    let under = other.completed_tricks[1].plays[4];
    assert_eq!(under.seat, 1);
    assert!(under.face_down);
    assert_eq!(under.card, None);
    assert_eq!(other.partner, Some(1));
    assert_eq!(other.completed_tricks[1].winner, 0);

    let picker = player_view(&state, 1).unwrap();
    let under = picker.completed_tricks[1].plays[4];
    assert!(under.face_down);
    assert_eq!(under.card, Some(card("TD")));
}

#[test]
fn scoring_view_carries_the_result() {
    let mut state = under_in_play();
    play_out_lowest(&mut state);
    let view = player_view(&state, 4).unwrap();
    assert_eq!(view.phase, PhaseKind::Scoring);
    assert_eq!(view.to_act, None);
    let result = view.result.unwrap();
    assert_eq!(result.scores(), [-1, 4, -1, -1, -1]);
    assert_eq!(view.completed_tricks.len(), 6);
    assert_eq!(view.buried, None);
}
