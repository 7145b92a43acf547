use crate::domain::cards_logic::{card_beats, cards_points, effective_suit};
use crate::domain::legality::{legal_plays, PlayContext};
use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_normal_hand, HandResult};
use crate::domain::state::{
    next_seat, out_of_turn, phase_mismatch, validate_seat, CompletedTrick, HandState, Phase,
    PhaseKind, PlayState, ScoringState, Seat, TrickPlay,
};
use crate::domain::{Card, EffectiveSuit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (5 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Points in the completed trick.
    pub trick_points: Option<u8>,
    /// Partner identified by this play.
    pub partner_revealed: Option<Seat>,
    pub under_card_played: bool,
    /// All six tricks are done and the hand was scored.
    pub hand_complete: bool,
}

/// Legal cards for `seat` in the current trick, independent of turn
/// enforcement. Empty outside the playing phase.
pub fn legal_moves(state: &HandState, seat: Seat) -> Vec<Card> {
    let Phase::Playing(play) = &state.phase else {
        return Vec::new();
    };
    let Some(hand) = state.hands.get(seat as usize) else {
        return Vec::new();
    };
    legal_moves_in(play, hand, seat)
}

fn legal_moves_in(play: &PlayState, hand: &[Card], seat: Seat) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }
    let is_picker = seat == play.picker;

    // Someone else led the called suit: the under card goes in face down.
    if is_picker && play.under_card_pending() {
        if let (Some(under), Some(call)) = (play.under_card(), play.call.as_ref()) {
            if play.lead == Some(call.called_lead()) && play.leader != seat {
                return vec![under];
            }
        }
    }

    legal_plays(&PlayContext {
        hand,
        lead: play.lead,
        call: play.call.as_ref(),
        called_suit_led: play.called_suit_led,
        is_picker,
    })
}

/// Play a card into the current trick, enforcing phase, turn and legality.
pub fn play_card(
    state: &mut HandState,
    seat: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    validate_seat(seat)?;
    let Phase::Playing(play) = &state.phase else {
        return Err(phase_mismatch(PhaseKind::Playing, &state.phase));
    };
    if play.turn != seat {
        return Err(out_of_turn(seat, play.turn));
    }

    let hand = &state.hands[seat as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} is not in hand"),
        ));
    };
    if !legal_moves_in(play, hand, seat).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            format!("Card {card} cannot be played now"),
        ));
    }

    // Validation done; mutate from here on.
    let removed = state.hands[seat as usize].remove(pos);
    let Phase::Playing(play) = &mut state.phase else {
        return Err(phase_mismatch(PhaseKind::Playing, &state.phase));
    };

    let is_under =
        seat == play.picker && play.under_card_pending() && play.under_card() == Some(removed);
    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_points: None,
        partner_revealed: None,
        under_card_played: is_under,
        hand_complete: false,
    };

    if play.current_trick.is_empty() {
        play.leader = seat;
        play.lead = Some(effective_suit(removed));
    }

    if is_under {
        play.under_card_played = true;
        play.partner = Some(play.picker);
        result.partner_revealed = Some(play.picker);
    } else if let Some(call) = play.call.as_ref() {
        if removed == call.called_card() && play.partner.is_none() {
            play.partner = Some(seat);
            result.partner_revealed = Some(seat);
        }
    }

    play.current_trick.push(TrickPlay {
        seat,
        card: removed,
        is_under,
    });
    play.turn = next_seat(seat);

    if play.current_trick.len() < PLAYERS {
        return Ok(result);
    }

    let lead = play.lead.unwrap_or(EffectiveSuit::Trump);
    let plays = std::mem::take(&mut play.current_trick);
    let winner = resolve_trick(&plays, lead).unwrap_or(play.leader);
    let points = cards_points(&plays.iter().map(|p| p.card).collect::<Vec<_>>());

    // An under card lead leaves its suit unled for the hold rule.
    let under_led = plays.first().is_some_and(|p| p.is_under);
    if !under_led && play.call.is_some_and(|c| c.called_lead() == lead) {
        play.called_suit_led = true;
    }
    play.tricks_won[winner as usize] += 1;
    play.completed_tricks.push(CompletedTrick {
        plays,
        lead,
        winner,
        points,
    });
    play.leader = winner;
    play.turn = winner;
    play.lead = None;

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.trick_points = Some(points);

    if state.hands.iter().all(Vec::is_empty) {
        let Phase::Playing(play) = std::mem::replace(&mut state.phase, Phase::Dealing) else {
            return Err(phase_mismatch(PhaseKind::Playing, &state.phase));
        };
        let normal = score_normal_hand(&play);
        state.phase = Phase::Scoring(ScoringState {
            result: HandResult::Normal(normal),
            completed_tricks: play.completed_tricks,
            buried: play.buried,
            blind: Vec::new(),
        });
        result.hand_complete = true;
    }

    Ok(result)
}

/// Winner of a completed trick. The under card never wins.
pub fn resolve_trick(plays: &[TrickPlay], lead: EffectiveSuit) -> Option<Seat> {
    let mut best: Option<&TrickPlay> = None;
    for play in plays.iter().filter(|p| !p.is_under) {
        best = match best {
            None => Some(play),
            Some(current) if card_beats(play.card, current.card, lead) => Some(play),
            keep => keep,
        };
    }
    best.map(|p| p.seat)
}
