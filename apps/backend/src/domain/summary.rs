//! Human-readable hand summaries. Display names never influence play.

use std::fmt::Write as _;

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandResult;
use crate::domain::state::Seat;

/// Seat → display name lookup supplied by the session layer.
pub trait SeatNames {
    fn display_name(&self, seat: Seat) -> String;
}

impl SeatNames for [String; PLAYERS] {
    fn display_name(&self, seat: Seat) -> String {
        self.get(seat as usize)
            .cloned()
            .unwrap_or_else(|| format!("Seat {seat}"))
    }
}

/// Default names when the session layer has none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberedSeats;

impl SeatNames for NumberedSeats {
    fn display_name(&self, seat: Seat) -> String {
        format!("Seat {seat}")
    }
}

fn signed(delta: i16) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// One paragraph describing teams, points and per-seat deltas.
pub fn result_summary(result: &HandResult, names: &dyn SeatNames) -> String {
    let mut out = String::new();
    match result {
        HandResult::Normal(r) => {
            let picker = names.display_name(r.picker);
            if r.went_alone {
                let _ = write!(out, "{picker} picked and played alone");
            } else if let Some(partner) = r.partner {
                let _ = write!(
                    out,
                    "{picker} picked with {} as partner",
                    names.display_name(partner)
                );
            } else {
                let _ = write!(out, "{picker} picked");
            }
            let outcome = if r.picker_wins { "won" } else { "lost" };
            let _ = write!(
                out,
                " and {outcome} {}-{}",
                r.picking_points, r.defending_points
            );
            if r.schwarz {
                out.push_str(" (schwarz)");
            } else if r.schneider {
                out.push_str(" (schneider)");
            }
            out.push('.');
        }
        HandResult::Schwanzer(r) => {
            let losers: Vec<String> = r.losers.iter().map(|&s| names.display_name(s)).collect();
            let _ = write!(out, "Everyone passed; {} held the most trump", losers.join(", "));
            out.push('.');
        }
    }

    let deltas: Vec<String> = result
        .scores()
        .iter()
        .enumerate()
        .map(|(seat, &d)| format!("{} {}", names.display_name(seat as Seat), signed(d)))
        .collect();
    let _ = write!(out, " Scores: {}.", deltas.join(", "));
    out
}
