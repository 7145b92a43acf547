//! Full-information snapshot of a hand, for the session layer and logs.

use serde::{Deserialize, Serialize};

use crate::domain::calling::{callable_options, CallingOptions};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandResult;
use crate::domain::state::{CompletedTrick, HandState, PartnerCall, Phase, Seat, TrickPlay};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, EffectiveSuit};

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub dealer: Seat,
    pub hands: [Vec<Card>; PLAYERS],
    pub to_act: Option<Seat>,
    /// Legal cards for `to_act` during play; empty otherwise.
    pub legal_plays: Vec<Card>,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Dealing,
    Picking(PickingSnapshot),
    Calling(CallingSnapshot),
    Burying(BuryingSnapshot),
    Playing(PlayingSnapshot),
    Scoring(ScoringSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickingSnapshot {
    pub blind: Vec<Card>,
    pub turn: Seat,
    pub passed: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallingSnapshot {
    pub picker: Seat,
    pub options: CallingOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuryingSnapshot {
    pub picker: Seat,
    pub call: Option<PartnerCall>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayingSnapshot {
    pub picker: Seat,
    pub call: Option<PartnerCall>,
    pub partner: Option<Seat>,
    pub buried: Vec<Card>,
    pub under_card_played: bool,
    pub called_suit_led: bool,
    pub trick_no: u8,
    pub leader: Seat,
    pub lead: Option<EffectiveSuit>,
    pub current_trick: Vec<TrickPlay>,
    pub last_trick: Option<CompletedTrick>,
    pub tricks_won: [u8; PLAYERS],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringSnapshot {
    pub result: HandResult,
    pub buried: Vec<Card>,
    pub blind: Vec<Card>,
    pub completed_tricks: Vec<CompletedTrick>,
}

/// Entry point: produce a snapshot of the current hand state.
pub fn snapshot(state: &HandState) -> HandSnapshot {
    let to_act = state.to_act();
    let legal_plays = match (&state.phase, to_act) {
        (Phase::Playing(_), Some(seat)) => legal_moves(state, seat),
        _ => Vec::new(),
    };

    let phase = match &state.phase {
        Phase::Dealing => PhaseSnapshot::Dealing,
        Phase::Picking(p) => PhaseSnapshot::Picking(PickingSnapshot {
            blind: p.blind.clone(),
            turn: p.turn,
            passed: p.passed,
        }),
        Phase::Calling(c) => PhaseSnapshot::Calling(CallingSnapshot {
            picker: c.picker,
            options: callable_options(state.hand(c.picker)),
        }),
        Phase::Burying(b) => PhaseSnapshot::Burying(BuryingSnapshot {
            picker: b.picker,
            call: b.call,
        }),
        Phase::Playing(p) => PhaseSnapshot::Playing(PlayingSnapshot {
            picker: p.picker,
            call: p.call,
            partner: p.partner,
            buried: p.buried.clone(),
            under_card_played: p.under_card_played,
            called_suit_led: p.called_suit_led,
            trick_no: p.trick_no() as u8,
            leader: p.leader,
            lead: p.lead,
            current_trick: p.current_trick.clone(),
            last_trick: p.completed_tricks.last().cloned(),
            tricks_won: p.tricks_won,
        }),
        Phase::Scoring(s) => PhaseSnapshot::Scoring(ScoringSnapshot {
            result: s.result.clone(),
            buried: s.buried.clone(),
            blind: s.blind.clone(),
            completed_tricks: s.completed_tricks.clone(),
        }),
    };

    HandSnapshot {
        dealer: state.dealer,
        hands: state.hands.clone(),
        to_act,
        legal_plays,
        phase,
    }
}
