use crate::domain::burying::bury;
use crate::domain::calling::call_partner;
use crate::domain::state::{HandState, Phase};
use crate::domain::test_state_helpers::{cards, dealt_state, pick_and_call, pick_by};
use crate::domain::Suit;
use crate::errors::domain::ValidationKind;

fn dealt() -> HandState {
    dealt_state(
        1,
        [
            &["JH", "JD", "AD", "TD", "KS", "9S"],
            &["KD", "9D", "8D", "7D", "8S", "7S"],
            &["QC", "QS", "QH", "QD", "JC", "JS"],
            &["AC", "TC", "KC", "9C", "8C", "AS"],
            &["AH", "TH", "KH", "9H", "8H", "TS"],
        ],
        &["7H", "7C"],
    )
}

fn called_hearts() -> HandState {
    let mut state = dealt();
    pick_and_call(&mut state, 2, Suit::Hearts);
    state
}

fn assert_bury_rejected(state: &mut HandState, seat: u8, tokens: &[&str], kind: ValidationKind) {
    let before = state.clone();
    let err = bury(state, seat, &cards(tokens)).unwrap_err();
    assert_eq!(err.kind(), Some(&kind), "{tokens:?}");
    assert_eq!(*state, before);
}

#[test]
fn bury_moves_two_cards_and_starts_play() {
    let mut state = called_hearts();
    let result = bury(&mut state, 2, &cards(&["7C", "JS"])).unwrap();
    assert_eq!(result.buried_points, 2);
    // Dealer 1: seat 2 leads.
    assert_eq!(result.leader, 2);
    assert_eq!(state.hands[2].len(), 6);
    assert!(!state.hands[2].contains(&cards(&["7C"])[0]));

    let Phase::Playing(play) = &state.phase else {
        panic!("expected playing");
    };
    assert_eq!(play.buried, cards(&["7C", "JS"]));
    assert_eq!(play.turn, 2);
    assert_eq!(play.partner, None);
}

#[test]
fn bury_rejections_have_no_side_effects() {
    let mut state = called_hearts();
    assert_bury_rejected(&mut state, 3, &["7C", "JS"], ValidationKind::NotPicker);
    assert_bury_rejected(&mut state, 2, &["7C"], ValidationKind::WrongCardCount);
    assert_bury_rejected(&mut state, 2, &["7C", "JS", "QC"], ValidationKind::WrongCardCount);
    assert_bury_rejected(&mut state, 2, &["7C", "7C"], ValidationKind::DuplicateCard);
    assert_bury_rejected(&mut state, 2, &["7C", "AH"], ValidationKind::CardNotInHand);
    assert_bury_rejected(&mut state, 2, &["7H", "7C"], ValidationKind::HoldCardRequired);
}

#[test]
fn going_alone_waives_the_hold_card() {
    let mut state = dealt();
    pick_by(&mut state, 2);
    call_partner(&mut state, 2, None, true, None).unwrap();
    bury(&mut state, 2, &cards(&["7H", "7C"])).unwrap();
    assert!(matches!(state.phase, Phase::Playing(_)));
}

#[test]
fn bury_before_calling_is_phase_mismatch() {
    let mut state = dealt();
    pick_by(&mut state, 2);
    assert_bury_rejected(&mut state, 2, &["7C", "JS"], ValidationKind::PhaseMismatch);
}

#[test]
fn under_card_cannot_be_buried() {
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
    call_partner(&mut state, 1, Some(Suit::Clubs), false, Some(cards(&["TD"])[0])).unwrap();
    assert_bury_rejected(&mut state, 1, &["TD", "AS"], ValidationKind::UnderCardBuried);
    // No clubs in hand, yet an under call needs no hold card.
    bury(&mut state, 1, &cards(&["AS", "AH"])).unwrap();
}
