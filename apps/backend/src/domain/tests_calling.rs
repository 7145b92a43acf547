use crate::domain::calling::call_partner;
use crate::domain::state::{BuryingState, CallKind, HandState, PartnerCall, Phase};
use crate::domain::test_state_helpers::{cards, dealt_state, pick_by};
use crate::domain::{Rank, Suit};
use crate::errors::domain::{ErrorCategory, ValidationKind};

/// Seat 2 picks a trump-heavy hand with 7H and 7C from the blind.
fn normal_call_state() -> HandState {
    let mut state = dealt_state(
        1,
        [
            &["JH", "JD", "AD", "TD", "KS", "9S"],
            &["KD", "9D", "8D", "7D", "8S", "7S"],
            &["QC", "QS", "QH", "QD", "JC", "JS"],
            &["AC", "TC", "KC", "9C", "8C", "AS"],
            &["AH", "TH", "KH", "9H", "8H", "TS"],
        ],
        &["7H", "7C"],
    );
    pick_by(&mut state, 2);
    state
}

/// Seat 1 picks holding AH and AS with no clubs: only an under call on clubs.
fn under_call_state() -> HandState {
    let mut state = dealt_state(
        0,
        [
            &["JD", "8D", "7D", "9H", "8H", "KS"],
            &["AH", "AS", "QC", "QS", "JC", "JS"],
            &["AC", "9C", "QH", "7H", "8S", "7S"],
            &["TC", "KC", "QD", "JH", "9S", "TS"],
            &["8C", "7C", "KD", "9D", "TH", "KH"],
        ],
        &["AD", "TD"],
    );
    pick_by(&mut state, 1);
    state
}

fn assert_rejected(
    state: &mut HandState,
    seat: u8,
    suit: Option<Suit>,
    go_alone: bool,
    under: Option<&str>,
    kind: ValidationKind,
) {
    let before = state.clone();
    let under = under.map(|t| cards(&[t])[0]);
    let err = call_partner(state, seat, suit, go_alone, under).unwrap_err();
    assert_eq!(err.kind(), Some(&kind));
    assert_eq!(*state, before, "rejected call must not mutate state");
}

#[test]
fn normal_call_moves_to_burying() {
    let mut state = normal_call_state();
    let result = call_partner(&mut state, 2, Some(Suit::Hearts), false, None).unwrap();
    let expected = PartnerCall {
        suit: Suit::Hearts,
        rank: Rank::Ace,
        kind: CallKind::Normal,
        under_card: None,
    };
    assert_eq!(result.call, Some(expected));
    assert!(!result.went_alone());
    assert_eq!(
        state.phase,
        Phase::Burying(BuryingState {
            picker: 2,
            call: Some(expected),
        })
    );
}

#[test]
fn call_rejections_leave_state_untouched() {
    let mut state = normal_call_state();
    assert_rejected(&mut state, 3, Some(Suit::Hearts), false, None, ValidationKind::NotPicker);
    assert_rejected(&mut state, 2, Some(Suit::Spades), false, None, ValidationKind::IllegalCall);
    assert_rejected(&mut state, 2, Some(Suit::Diamonds), false, None, ValidationKind::IllegalCall);
    assert_rejected(&mut state, 2, None, false, None, ValidationKind::IllegalCall);
    assert_rejected(&mut state, 2, Some(Suit::Hearts), true, None, ValidationKind::IllegalCall);
    assert_rejected(
        &mut state,
        2,
        Some(Suit::Hearts),
        false,
        Some("QC"),
        ValidationKind::UnexpectedUnderCard,
    );
}

#[test]
fn not_picker_is_an_authority_violation() {
    let mut state = normal_call_state();
    let err = call_partner(&mut state, 0, Some(Suit::Hearts), false, None).unwrap_err();
    assert_eq!(err.category(), Some(ErrorCategory::Authority));
}

#[test]
fn call_outside_calling_phase() {
    let mut state = dealt_state(
        1,
        [
            &["JH", "JD", "AD", "TD", "KS", "9S"],
            &["KD", "9D", "8D", "7D", "8S", "7S"],
            &["QC", "QS", "QH", "QD", "JC", "JS"],
            &["AC", "TC", "KC", "9C", "8C", "AS"],
            &["AH", "TH", "KH", "9H", "8H", "TS"],
        ],
        &["7H", "7C"],
    );
    let err = call_partner(&mut state, 2, Some(Suit::Hearts), false, None).unwrap_err();
    assert_eq!(err.kind(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(err.category(), Some(ErrorCategory::Phase));
}

#[test]
fn going_alone_clears_the_call() {
    let mut state = normal_call_state();
    let result = call_partner(&mut state, 2, None, true, None).unwrap();
    assert!(result.went_alone());
    assert_eq!(
        state.phase,
        Phase::Burying(BuryingState {
            picker: 2,
            call: None,
        })
    );
}

#[test]
fn under_call_requires_an_under_card() {
    let mut state = under_call_state();
    let clubs = Some(Suit::Clubs);
    assert_rejected(&mut state, 1, clubs, false, None, ValidationKind::UnderCardRequired);
    assert_rejected(&mut state, 1, clubs, false, Some("7H"), ValidationKind::CardNotInHand);
    let hearts = Some(Suit::Hearts);
    assert_rejected(&mut state, 1, hearts, false, Some("TD"), ValidationKind::IllegalCall);

    let under = cards(&["TD"]).first().copied();
    let result = call_partner(&mut state, 1, clubs, false, under).unwrap();
    let call = result.call.unwrap();
    assert_eq!(call.kind, CallKind::Under);
    assert_eq!(call.rank, Rank::Ace);
    assert_eq!(call.under_card, Some(cards(&["TD"])[0]));
}

#[test]
fn forced_alone_hand_must_go_alone() {
    let mut state = dealt_state(
        0,
        [
            &["JD", "8D", "7D", "9H", "8H", "KS"],
            &["AC", "AS", "AH", "TC", "TS", "TH"],
            &["KC", "9C", "QH", "7H", "8S", "7S"],
            &["8C", "7C", "QD", "JH", "9S", "JC"],
            &["AD", "TD", "KD", "9D", "JS", "KH"],
        ],
        &["QC", "QS"],
    );
    pick_by(&mut state, 1);
    assert_rejected(&mut state, 1, Some(Suit::Clubs), false, None, ValidationKind::IllegalCall);
    let result = call_partner(&mut state, 1, None, true, None).unwrap();
    assert!(result.went_alone());
}

#[test]
fn call_ten_when_holding_every_ace() {
    let mut state = dealt_state(
        0,
        [
            &["JD", "8D", "7D", "9H", "8H", "KS"],
            &["AC", "AS", "AH", "TC", "QC", "QS"],
            &["KC", "9C", "QH", "7H", "8S", "7S"],
            &["8C", "7C", "QD", "JH", "9S", "JC"],
            &["AD", "TD", "KD", "9D", "JS", "KH"],
        ],
        &["TS", "TH"],
    );
    pick_by(&mut state, 1);
    // Holds every fail ten too once the blind is in: forced alone.
    assert_rejected(&mut state, 1, Some(Suit::Spades), false, None, ValidationKind::IllegalCall);

    let mut state = dealt_state(
        0,
        [
            &["JD", "8D", "7D", "9H", "8H", "KS"],
            &["AC", "AS", "AH", "TC", "QC", "QS"],
            &["KC", "9C", "QH", "7H", "8S", "7S"],
            &["8C", "7C", "QD", "JH", "9S", "TH"],
            &["AD", "TD", "KD", "9D", "JS", "KH"],
        ],
        &["TS", "JC"],
    );
    pick_by(&mut state, 1);
    assert_rejected(&mut state, 1, Some(Suit::Clubs), false, None, ValidationKind::IllegalCall);
    let result = call_partner(&mut state, 1, Some(Suit::Hearts), false, None).unwrap();
    let call = result.call.unwrap();
    assert_eq!(call.rank, Rank::Ten);
    assert_eq!(call.kind, CallKind::Under);
    assert_eq!(call.under_card, None);
}
