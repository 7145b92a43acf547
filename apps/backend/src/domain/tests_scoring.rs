use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_normal, score_schwanzer, schwanzer_points, TrickTally};
use crate::domain::test_state_helpers::cards;
use crate::domain::Card;

fn tally(points: [u8; PLAYERS], tricks: [u8; PLAYERS]) -> TrickTally {
    TrickTally { points, tricks }
}

#[test]
fn sixty_points_loses() {
    // Picker 0 with partner 1 take exactly 60.
    let r = score_normal(0, Some(1), &tally([50, 10, 20, 20, 20], [2, 1, 1, 1, 1]), 0);
    assert_eq!(r.picking_points, 60);
    assert_eq!(r.defending_points, 60);
    assert!(!r.picker_wins);
    assert!(!r.schneider);
    assert_eq!(r.multiplier, 1);
    assert_eq!(r.scores, [-2, -1, 1, 1, 1]);
}

#[test]
fn sixty_one_points_wins() {
    let r = score_normal(0, Some(1), &tally([51, 10, 20, 19, 20], [2, 1, 1, 1, 1]), 0);
    assert!(r.picker_wins);
    assert_eq!(r.multiplier, 1);
    assert_eq!(r.scores, [2, 1, -1, -1, -1]);
    assert_eq!(r.defenders, vec![2, 3, 4]);
}

#[test]
fn ninety_is_not_schneider() {
    let r = score_normal(0, Some(1), &tally([80, 10, 10, 10, 10], [3, 1, 1, 0, 1]), 0);
    assert_eq!(r.picking_points, 90);
    assert!(!r.schneider);
    assert_eq!(r.multiplier, 1);
}

#[test]
fn ninety_one_is_schneider() {
    let r = score_normal(0, Some(1), &tally([81, 10, 10, 9, 10], [3, 1, 1, 0, 1]), 0);
    assert_eq!(r.defending_points, 29);
    assert!(r.schneider);
    assert!(!r.schwarz);
    assert_eq!(r.scores, [4, 2, -2, -2, -2]);
}

#[test]
fn picker_thirty_points_is_schneidered() {
    let r = score_normal(0, Some(1), &tally([20, 10, 30, 30, 30], [1, 1, 2, 1, 1]), 0);
    assert!(!r.picker_wins);
    assert!(r.schneider);
    assert_eq!(r.scores, [-4, -2, 2, 2, 2]);

    let r = score_normal(0, Some(1), &tally([21, 10, 30, 30, 29], [1, 1, 2, 1, 1]), 0);
    assert!(!r.schneider);
    assert_eq!(r.multiplier, 1);
}

#[test]
fn all_tricks_is_schwarz() {
    let r = score_normal(0, Some(1), &tally([120, 0, 0, 0, 0], [6, 0, 0, 0, 0]), 0);
    assert!(r.schwarz);
    assert_eq!(r.multiplier, 3);
    assert_eq!(r.scores, [6, 3, -3, -3, -3]);
}

#[test]
fn picker_taking_no_trick_is_schwarz_even_with_buried_points() {
    // Buried points keep the picker off zero points, but tricks decide schwarz.
    let r = score_normal(0, Some(1), &tally([0, 0, 40, 40, 19], [0, 0, 2, 2, 2]), 21);
    assert!(!r.picker_wins);
    assert!(r.schwarz);
    assert_eq!(r.scores, [-6, -3, 3, 3, 3]);
}

#[test]
fn buried_points_count_for_picker() {
    let r = score_normal(2, Some(4), &tally([10, 10, 40, 20, 19], [1, 1, 2, 1, 1]), 21);
    assert_eq!(r.seat_points[2], 61);
    assert_eq!(r.picking_points, 80);
    assert_eq!(r.buried_points, 21);
}

#[test]
fn alone_pays_four_times() {
    let r = score_normal(3, None, &tally([10, 10, 10, 70, 20], [1, 1, 1, 2, 1]), 0);
    assert!(r.went_alone);
    assert!(r.picker_wins);
    assert_eq!(r.scores, [-1, -1, -1, 4, -1]);
}

#[test]
fn under_card_partner_is_the_picker() {
    // Partner resolved to the picker pays like going alone.
    let r = score_normal(1, Some(1), &tally([31, 50, 8, 0, 31], [1, 3, 1, 0, 1]), 0);
    assert!(r.went_alone);
    assert_eq!(r.partner, Some(1));
    assert_eq!(r.picking_points, 50);
    assert!(!r.picker_wins);
    assert_eq!(r.scores, [1, -4, 1, 1, 1]);
}

#[test]
fn normal_scores_are_zero_sum() {
    let tallies = [
        tally([120, 0, 0, 0, 0], [6, 0, 0, 0, 0]),
        tally([0, 30, 30, 30, 30], [0, 2, 2, 1, 1]),
        tally([24, 24, 24, 24, 24], [2, 1, 1, 1, 1]),
    ];
    for t in &tallies {
        for partner in [None, Some(0), Some(2)] {
            let r = score_normal(0, partner, t, 0);
            assert_eq!(r.scores.iter().sum::<i16>(), 0, "{t:?} {partner:?}");
        }
    }
}

#[test]
fn schwanzer_values() {
    let values: Vec<u8> = cards(&["QC", "JH", "AD", "7D", "AC", "TH"])
        .into_iter()
        .map(schwanzer_points)
        .collect();
    assert_eq!(values, vec![3, 2, 1, 1, 0, 0]);
}

fn schwanzer_hands(tokens: [&[&str]; PLAYERS]) -> [Vec<Card>; PLAYERS] {
    tokens.map(cards)
}

#[test]
fn schwanzer_unique_loser() {
    let hands = schwanzer_hands([
        &["QC", "QS", "JC", "JS", "AD", "7D"],
        &["QH", "TD", "AC", "TC", "KC", "9C"],
        &["QD", "KD", "8C", "7C", "AH", "TH"],
        &["JH", "9D", "KH", "9H", "8H", "7H"],
        &["JD", "8D", "AS", "TS", "KS", "9S"],
    ]);
    let r = score_schwanzer(&hands);
    assert_eq!(r.points, [12, 4, 4, 3, 3]);
    assert_eq!(r.losers, vec![0]);
    assert_eq!(r.scores, [-4, 1, 1, 1, 1]);
}

#[test]
fn schwanzer_two_way_tie() {
    let hands = schwanzer_hands([
        &["QC", "QS", "AC", "TC", "KC", "9C"],
        &["QH", "QD", "AH", "TH", "KH", "9H"],
        &["AD", "TD", "AS", "TS", "KS", "9S"],
        &["JC", "8D", "8C", "7C", "8H", "7H"],
        &["JH", "7D", "8S", "7S", "KD", "9D"],
    ]);
    let r = score_schwanzer(&hands);
    assert_eq!(r.points, [6, 6, 2, 3, 5]);
    assert_eq!(r.losers, vec![0, 1]);
    assert_eq!(r.scores, [-3, -3, 2, 2, 2]);
}

#[test]
fn schwanzer_three_way_tie() {
    let hands = schwanzer_hands([
        &["QC", "QS", "AC", "TC", "KC", "9C"],
        &["QH", "QD", "AH", "TH", "KH", "9H"],
        &["AD", "TD", "AS", "TS", "KS", "9S"],
        &["JC", "8D", "8C", "7C", "8H", "7H"],
        &["JH", "7D", "8S", "7S", "JS", "9D"],
    ]);
    let r = score_schwanzer(&hands);
    assert_eq!(r.points, [6, 6, 2, 3, 6]);
    assert_eq!(r.losers, vec![0, 1, 4]);
    assert_eq!(r.scores, [-2, -2, 3, 3, -2]);
    assert_eq!(r.scores.iter().sum::<i16>(), 0);
}
