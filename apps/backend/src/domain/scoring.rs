//! Hand scoring: normal hands and the everyone-passed Schwanzer.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::cards_points;
use crate::domain::rules::{
    schwanzer_payout, DEFENDER_SCHNEIDER_MAX, PICKER_SCHNEIDER_MAX, PLAYERS, SCHNEIDER_MULTIPLIER,
    SCHWARZ_MULTIPLIER, TOTAL_POINTS, WIN_THRESHOLD,
};
use crate::domain::state::{PlayState, Seat};
use crate::domain::{Card, Rank, Suit};

/// Final record of a hand, read by persistence and summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum HandResult {
    Normal(NormalResult),
    Schwanzer(SchwanzerResult),
}

impl HandResult {
    pub fn scores(&self) -> [i16; PLAYERS] {
        match self {
            HandResult::Normal(r) => r.scores,
            HandResult::Schwanzer(r) => r.scores,
        }
    }

    pub fn picker(&self) -> Option<Seat> {
        match self {
            HandResult::Normal(r) => Some(r.picker),
            HandResult::Schwanzer(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalResult {
    pub picker: Seat,
    /// Revealed partner. Equals the picker when the under card was played.
    pub partner: Option<Seat>,
    /// Picker played without a separate partner.
    pub went_alone: bool,
    pub defenders: Vec<Seat>,
    pub picking_points: u8,
    pub defending_points: u8,
    pub picker_wins: bool,
    pub multiplier: i16,
    pub schneider: bool,
    pub schwarz: bool,
    pub buried_points: u8,
    pub seat_points: [u8; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    pub scores: [i16; PLAYERS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchwanzerResult {
    pub points: [u8; PLAYERS],
    pub losers: Vec<Seat>,
    pub scores: [i16; PLAYERS],
}

/// Per-seat trick totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrickTally {
    pub points: [u8; PLAYERS],
    pub tricks: [u8; PLAYERS],
}

/// Score a finished normal hand.
pub fn score_normal_hand(play: &PlayState) -> NormalResult {
    let mut tally = TrickTally::default();
    for trick in &play.completed_tricks {
        tally.points[trick.winner as usize] += trick.points;
        tally.tricks[trick.winner as usize] += 1;
    }
    score_normal(
        play.picker,
        play.partner,
        &tally,
        cards_points(&play.buried),
    )
}

/// Score from trick totals. The buried points belong to the picker.
pub fn score_normal(
    picker: Seat,
    partner: Option<Seat>,
    tally: &TrickTally,
    buried_points: u8,
) -> NormalResult {
    let partner_seat = partner.filter(|&p| p != picker);
    let on_team = |seat: Seat| seat == picker || Some(seat) == partner_seat;

    let mut seat_points = tally.points;
    seat_points[picker as usize] += buried_points;

    let picking_points: u8 = (0..PLAYERS as Seat)
        .filter(|&s| on_team(s))
        .map(|s| seat_points[s as usize])
        .sum();
    let defending_points = TOTAL_POINTS.saturating_sub(picking_points);
    let picking_tricks: u8 = (0..PLAYERS as Seat)
        .filter(|&s| on_team(s))
        .map(|s| tally.tricks[s as usize])
        .sum();
    let defending_tricks: u8 = tally.tricks.iter().sum::<u8>() - picking_tricks;

    let picker_wins = picking_points >= WIN_THRESHOLD;
    let schwarz = if picker_wins {
        defending_tricks == 0
    } else {
        picking_tricks == 0
    };
    let schneider = if picker_wins {
        defending_points <= DEFENDER_SCHNEIDER_MAX
    } else {
        picking_points <= PICKER_SCHNEIDER_MAX
    };
    let multiplier = if schwarz {
        SCHWARZ_MULTIPLIER
    } else if schneider {
        SCHNEIDER_MULTIPLIER
    } else {
        1
    };

    let sign: i16 = if picker_wins { 1 } else { -1 };
    let went_alone = partner_seat.is_none();
    let mut scores = [0i16; PLAYERS];
    let mut defenders = Vec::with_capacity(PLAYERS);
    for seat in 0..PLAYERS as Seat {
        let delta = if seat == picker {
            if went_alone {
                4 * multiplier
            } else {
                2 * multiplier
            }
        } else if Some(seat) == partner_seat {
            multiplier
        } else {
            defenders.push(seat);
            -multiplier
        };
        scores[seat as usize] = sign * delta;
    }

    NormalResult {
        picker,
        partner,
        went_alone,
        defenders,
        picking_points,
        defending_points,
        picker_wins,
        multiplier,
        schneider,
        schwarz,
        buried_points,
        seat_points,
        tricks_won: tally.tricks,
        scores,
    }
}

/// Schwanzer value of a card: Q=3, J=2, other diamonds 1.
pub fn schwanzer_points(card: Card) -> u8 {
    match card.rank {
        Rank::Queen => 3,
        Rank::Jack => 2,
        _ if card.suit == Suit::Diamonds => 1,
        _ => 0,
    }
}

/// Everyone passed: the strongest hand(s) pay.
pub fn score_schwanzer(hands: &[Vec<Card>; PLAYERS]) -> SchwanzerResult {
    let mut points = [0u8; PLAYERS];
    for (seat, hand) in hands.iter().enumerate() {
        points[seat] = hand.iter().map(|&c| schwanzer_points(c)).sum();
    }
    let max = points.iter().copied().max().unwrap_or(0);
    let losers: Vec<Seat> = (0..PLAYERS as Seat)
        .filter(|&s| points[s as usize] == max)
        .collect();

    let (loser_delta, winner_delta) = schwanzer_payout(losers.len());
    let mut scores = [winner_delta; PLAYERS];
    for &seat in &losers {
        scores[seat as usize] = loser_delta;
    }

    SchwanzerResult {
        points,
        losers,
        scores,
    }
}
