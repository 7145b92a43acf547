use serde::Serialize;
use tracing::info;

use super::GameFlowService;
use crate::domain::rules::PLAYERS;
use crate::domain::summary::result_summary;
use crate::domain::{player_view, snapshot, HandResult, HandSnapshot, PlayerView, Seat};
use crate::error::AppError;
use crate::services::tables::TableId;

/// A freshly dealt hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandStarted {
    /// 1-based hand number at the table.
    pub hand_no: u64,
    pub dealer: Seat,
    /// First seat to decide whether to pick.
    pub to_act: Seat,
}

impl GameFlowService {
    /// Open a table in the registry.
    pub fn create_table(&self, seat_names: [String; PLAYERS]) -> Result<TableId, AppError> {
        Ok(self.registry().create_table(seat_names)?)
    }

    /// Shuffle and deal the next hand at a table.
    ///
    /// Rejected with `HAND_IN_PROGRESS` until the previous hand is scored.
    pub fn start_hand(&self, table_id: TableId) -> Result<HandStarted, AppError> {
        self.with_table(table_id, "start_hand", None, |table| {
            let state = table.deal()?;
            let dealer = state.dealer;
            let to_act = state.to_act().unwrap_or(dealer);
            let started = HandStarted {
                hand_no: table.hands_dealt(),
                dealer,
                to_act,
            };
            info!(%table_id, hand_no = started.hand_no, dealer, to_act, "Hand started");
            Ok(started)
        })
    }

    /// Redacted view of the current hand for one seat.
    pub fn player_view(&self, table_id: TableId, seat: Seat) -> Result<PlayerView, AppError> {
        self.with_table(table_id, "player_view", Some(seat), |table| {
            player_view(table.hand_mut()?, seat)
        })
    }

    /// Full-information view of the current hand.
    pub fn snapshot(&self, table_id: TableId) -> Result<HandSnapshot, AppError> {
        self.with_table(table_id, "snapshot", None, |table| {
            Ok(snapshot(table.hand_mut()?))
        })
    }

    /// Results of every scored hand at the table, oldest first.
    pub fn results(&self, table_id: TableId) -> Result<Vec<HandResult>, AppError> {
        self.with_table(table_id, "results", None, |table| Ok(table.results().to_vec()))
    }

    /// Running per-seat totals across all scored hands.
    pub fn totals(&self, table_id: TableId) -> Result<[i32; PLAYERS], AppError> {
        self.with_table(table_id, "totals", None, |table| Ok(table.totals()))
    }

    /// Readable summary of the most recent scored hand, using the seat names.
    pub fn last_summary(&self, table_id: TableId) -> Result<Option<String>, AppError> {
        self.with_table(table_id, "last_summary", None, |table| {
            Ok(table
                .results()
                .last()
                .map(|result| result_summary(result, &*table)))
        })
    }
}
