use crate::domain::rules::PLAYERS;
use crate::domain::scoring::{score_schwanzer, HandResult, SchwanzerResult};
use crate::domain::state::{
    next_seat, out_of_turn, phase_mismatch, validate_seat, CallingState, HandState, Phase,
    PhaseKind, ScoringState, Seat,
};
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// Outcome of a pick decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// Seat took the blind and now holds 8 cards.
    Picked { picker: Seat, blind: Vec<Card> },
    /// Seat passed; `next` is asked next.
    Passed { next: Seat },
    /// Fifth pass: the hand was scored as a Schwanzer.
    AllPassed { result: SchwanzerResult },
}

fn require_picking_turn(state: &HandState, seat: Seat) -> Result<(), DomainError> {
    validate_seat(seat)?;
    let Phase::Picking(picking) = &state.phase else {
        return Err(phase_mismatch(PhaseKind::Picking, &state.phase));
    };
    if picking.turn != seat {
        return Err(out_of_turn(seat, picking.turn));
    }
    Ok(())
}

/// Take the blind.
pub fn pick(state: &mut HandState, seat: Seat) -> Result<PickResult, DomainError> {
    require_picking_turn(state, seat)?;
    let Phase::Picking(picking) = &mut state.phase else {
        return Err(phase_mismatch(PhaseKind::Picking, &state.phase));
    };

    let blind = std::mem::take(&mut picking.blind);
    let hand = &mut state.hands[seat as usize];
    hand.extend_from_slice(&blind);
    hand.sort();
    state.phase = Phase::Calling(CallingState { picker: seat });

    Ok(PickResult::Picked {
        picker: seat,
        blind,
    })
}

/// Decline the blind. The fifth pass ends the hand as a Schwanzer.
pub fn pass(state: &mut HandState, seat: Seat) -> Result<PickResult, DomainError> {
    require_picking_turn(state, seat)?;
    let Phase::Picking(picking) = &mut state.phase else {
        return Err(phase_mismatch(PhaseKind::Picking, &state.phase));
    };

    picking.passed += 1;
    if (picking.passed as usize) < PLAYERS {
        picking.turn = next_seat(seat);
        return Ok(PickResult::Passed { next: picking.turn });
    }

    let blind = std::mem::take(&mut picking.blind);
    let result = score_schwanzer(&state.hands);
    state.phase = Phase::Scoring(ScoringState {
        result: HandResult::Schwanzer(result.clone()),
        completed_tricks: Vec::new(),
        buried: Vec::new(),
        blind,
    });
    Ok(PickResult::AllPassed { result })
}
