//! Player view of a hand - what information is visible to one seat.
//!
//! This is the primary interface between the engine and seat agents
//! ([`crate::ai::AiPlayer`]), and what the session layer sends to a client.
//! Other seats' cards, the blind, the bury and an unrevealed partner are
//! hidden. The under card is known only to the picker; everyone else sees a
//! face-down card when it is played.

use serde::{Deserialize, Serialize};

use crate::domain::calling::{callable_options, CallingOptions};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandResult;
use crate::domain::state::{
    validate_seat, CompletedTrick, HandState, PartnerCall, Phase, PhaseKind, Seat, TrickPlay,
};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, EffectiveSuit, Rank, Suit};
use crate::errors::domain::DomainError;

/// The call as announced to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicCall {
    pub suit: Suit,
    pub rank: Rank,
}

/// A trick card as this seat sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisiblePlay {
    pub seat: Seat,
    /// `None` for a face-down card this seat may not see.
    pub card: Option<Card>,
    pub face_down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleTrick {
    pub plays: Vec<VisiblePlay>,
    pub winner: Seat,
}

/// Information visible to a seat at a decision point.
///
/// ## Key Fields
///
/// - **Your hand**: [`hand`](Self::hand)
/// - **Turn**: [`to_act`](Self::to_act), see [`is_my_turn()`](Self::is_my_turn)
/// - **Calls**: [`calling_options`](Self::calling_options), present when you
///   are the picker and must call
/// - **Trick state**: [`current_trick`](Self::current_trick) and
///   [`lead`](Self::lead)
///
/// Always pick cards from [`legal_plays`](Self::legal_plays) instead of
/// re-implementing the rules; it is only filled in on your turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub dealer: Seat,
    pub phase: PhaseKind,
    pub to_act: Option<Seat>,
    pub hand: Vec<Card>,
    pub hand_counts: [u8; PLAYERS],
    pub blind_count: u8,
    pub passes: u8,
    pub picker: Option<Seat>,
    pub call: Option<PublicCall>,
    pub went_alone: bool,
    /// Picker only.
    pub under_card: Option<Card>,
    /// Picker only.
    pub buried: Option<Vec<Card>>,
    /// Shown once revealed.
    pub partner: Option<Seat>,
    pub lead: Option<EffectiveSuit>,
    pub current_trick: Vec<VisiblePlay>,
    pub completed_tricks: Vec<VisibleTrick>,
    pub tricks_won: [u8; PLAYERS],
    pub calling_options: Option<CallingOptions>,
    pub legal_plays: Vec<Card>,
    pub result: Option<HandResult>,
}

impl PlayerView {
    pub fn is_my_turn(&self) -> bool {
        self.to_act == Some(self.seat)
    }

    pub fn is_picker(&self) -> bool {
        self.picker == Some(self.seat)
    }
}

fn visible_play(play: &TrickPlay, viewer_is_picker: bool) -> VisiblePlay {
    VisiblePlay {
        seat: play.seat,
        card: (!play.is_under || viewer_is_picker).then_some(play.card),
        face_down: play.is_under,
    }
}

fn visible_trick(trick: &CompletedTrick, viewer_is_picker: bool) -> VisibleTrick {
    VisibleTrick {
        plays: trick
            .plays
            .iter()
            .map(|p| visible_play(p, viewer_is_picker))
            .collect(),
        winner: trick.winner,
    }
}

fn public_call(call: &PartnerCall) -> PublicCall {
    PublicCall {
        suit: call.suit,
        rank: call.rank,
    }
}

/// Build the redacted view of `state` for `seat`.
pub fn player_view(state: &HandState, seat: Seat) -> Result<PlayerView, DomainError> {
    validate_seat(seat)?;

    let picker = state.picker();
    let is_picker = picker == Some(seat);
    let to_act = state.to_act();
    let mut hand_counts = [0u8; PLAYERS];
    for (i, h) in state.hands.iter().enumerate() {
        hand_counts[i] = h.len() as u8;
    }

    let mut view = PlayerView {
        seat,
        dealer: state.dealer,
        phase: state.phase.kind(),
        to_act,
        hand: state.hand(seat).to_vec(),
        hand_counts,
        blind_count: 0,
        passes: 0,
        picker,
        call: None,
        went_alone: false,
        under_card: None,
        buried: None,
        partner: None,
        lead: None,
        current_trick: Vec::new(),
        completed_tricks: Vec::new(),
        tricks_won: [0; PLAYERS],
        calling_options: None,
        legal_plays: Vec::new(),
        result: None,
    };

    match &state.phase {
        Phase::Dealing => {}
        Phase::Picking(p) => {
            view.blind_count = p.blind.len() as u8;
            view.passes = p.passed;
        }
        Phase::Calling(_) => {
            if is_picker {
                view.calling_options = Some(callable_options(state.hand(seat)));
            }
        }
        Phase::Burying(b) => {
            view.call = b.call.as_ref().map(public_call);
            view.went_alone = b.call.is_none();
            if is_picker {
                view.under_card = b.call.and_then(|c| c.under_card);
            }
        }
        Phase::Playing(p) => {
            view.call = p.call.as_ref().map(public_call);
            view.went_alone = p.call.is_none();
            view.partner = p.partner;
            view.lead = p.lead;
            view.tricks_won = p.tricks_won;
            view.current_trick = p
                .current_trick
                .iter()
                .map(|t| visible_play(t, is_picker))
                .collect();
            view.completed_tricks = p
                .completed_tricks
                .iter()
                .map(|t| visible_trick(t, is_picker))
                .collect();
            if is_picker {
                view.under_card = p.under_card();
                view.buried = Some(p.buried.clone());
            }
            if to_act == Some(seat) {
                view.legal_plays = legal_moves(state, seat);
            }
        }
        Phase::Scoring(s) => {
            if let HandResult::Normal(r) = &s.result {
                view.partner = r.partner;
                view.went_alone = r.went_alone;
                view.tricks_won = r.tricks_won;
            }
            view.completed_tricks = s
                .completed_tricks
                .iter()
                .map(|t| visible_trick(t, is_picker))
                .collect();
            if is_picker {
                view.buried = Some(s.buried.clone());
            }
            view.result = Some(s.result.clone());
        }
    }

    Ok(view)
}
