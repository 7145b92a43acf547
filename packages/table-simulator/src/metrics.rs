//! Per-hand metrics and run-level aggregates.

use backend::domain::rules::PLAYERS;
use backend::domain::HandResult;
use serde::Serialize;

use crate::simulator::HandOutcome;

/// One JSONL record per simulated hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandMetrics {
    pub hand_no: u64,
    pub seed: u64,
    pub timestamp: String,
    pub ai_type: String,
    pub dealer: u8,
    pub kind: HandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<u8>,
    pub went_alone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picking_points: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker_wins: Option<bool>,
    pub schneider: bool,
    pub schwarz: bool,
    pub scores: [i16; PLAYERS],
    pub summary: String,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandKind {
    Normal,
    Schwanzer,
}

pub fn build_hand_metrics(
    seed: u64,
    ai_type: &str,
    outcome: &HandOutcome,
    duration_ms: f64,
) -> HandMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let mut metrics = HandMetrics {
        hand_no: outcome.hand_no,
        seed,
        timestamp,
        ai_type: ai_type.to_string(),
        dealer: outcome.dealer,
        kind: HandKind::Schwanzer,
        picker: None,
        partner: None,
        went_alone: false,
        picking_points: None,
        picker_wins: None,
        schneider: false,
        schwarz: false,
        scores: outcome.result.scores(),
        summary: outcome.summary.clone(),
        duration_ms,
    };
    if let HandResult::Normal(r) = &outcome.result {
        metrics.kind = HandKind::Normal;
        metrics.picker = Some(r.picker);
        metrics.partner = r.partner;
        metrics.went_alone = r.went_alone;
        metrics.picking_points = Some(r.picking_points);
        metrics.picker_wins = Some(r.picker_wins);
        metrics.schneider = r.schneider;
        metrics.schwarz = r.schwarz;
    }
    metrics
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatStats {
    pub total_score: i64,
    pub picks: u32,
    pub pick_wins: u32,
    pub alone: u32,
    pub partner: u32,
    pub schwanzer_losses: u32,
}

/// Aggregates across every hand of a run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub hands: u32,
    pub schwanzers: u32,
    pub schneiders: u32,
    pub schwarzes: u32,
    pub seats: [SeatStats; PLAYERS],
}

impl RunStats {
    pub fn record(&mut self, result: &HandResult) {
        self.hands += 1;
        for (seat, delta) in self.seats.iter_mut().zip(result.scores()) {
            seat.total_score += i64::from(delta);
        }

        match result {
            HandResult::Normal(r) => {
                let picker = &mut self.seats[r.picker as usize];
                picker.picks += 1;
                if r.picker_wins {
                    picker.pick_wins += 1;
                }
                if r.went_alone {
                    picker.alone += 1;
                } else if let Some(partner) = r.partner {
                    self.seats[partner as usize].partner += 1;
                }
                if r.schwarz {
                    self.schwarzes += 1;
                } else if r.schneider {
                    self.schneiders += 1;
                }
            }
            HandResult::Schwanzer(r) => {
                self.schwanzers += 1;
                for &loser in &r.losers {
                    self.seats[loser as usize].schwanzer_losses += 1;
                }
            }
        }
    }

    /// Share of picked hands the picker's side won, as a percentage.
    pub fn pick_win_rate(&self) -> f64 {
        let picks: u32 = self.seats.iter().map(|s| s.picks).sum();
        let wins: u32 = self.seats.iter().map(|s| s.pick_wins).sum();
        if picks == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(picks) * 100.0
        }
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub hand_no: u64,
    pub seed: u64,
    pub kind: HandKind,
    pub picker: Option<u8>,
    pub partner: Option<u8>,
    pub picking_points: Option<u8>,
    pub seat0_score: i16,
    pub seat1_score: i16,
    pub seat2_score: i16,
    pub seat3_score: i16,
    pub seat4_score: i16,
}

impl From<&HandMetrics> for CsvSummaryRow {
    fn from(metrics: &HandMetrics) -> Self {
        CsvSummaryRow {
            hand_no: metrics.hand_no,
            seed: metrics.seed,
            kind: metrics.kind,
            picker: metrics.picker,
            partner: metrics.partner,
            picking_points: metrics.picking_points,
            seat0_score: metrics.scores[0],
            seat1_score: metrics.scores[1],
            seat2_score: metrics.scores[2],
            seat3_score: metrics.scores[3],
            seat4_score: metrics.scores[4],
        }
    }
}
