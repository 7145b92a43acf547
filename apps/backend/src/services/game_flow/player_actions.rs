use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::summary::result_summary;
use crate::domain::{BuryResult, CallResult, Card, PickResult, PlayCardResult, Seat, Suit};
use crate::error::AppError;
use crate::services::tables::{Table, TableId};

/// Store a finished hand on its table and log the outcome.
fn finish_hand(table: &mut Table) {
    if let Some(result) = table.record_completed() {
        info!(
            table_id = %table.id(),
            next_dealer = table.dealer(),
            summary = %result_summary(&result, &*table),
            "Hand complete"
        );
    }
}

impl GameFlowService {
    /// Pick up the blind for `seat`.
    pub fn pick(&self, table_id: TableId, seat: Seat) -> Result<PickResult, AppError> {
        self.with_table(table_id, "pick", Some(seat), |table| {
            let result = crate::domain::pick(table.hand_mut()?, seat)?;
            info!(%table_id, picker = seat, "Blind picked");
            Ok(result)
        })
    }

    /// Pass for `seat`. The fifth pass ends the hand as a Schwanzer.
    pub fn pass(&self, table_id: TableId, seat: Seat) -> Result<PickResult, AppError> {
        self.with_table(table_id, "pass", Some(seat), |table| {
            let result = crate::domain::pass(table.hand_mut()?, seat)?;
            debug!(%table_id, seat, "Passed");
            if matches!(result, PickResult::AllPassed { .. }) {
                finish_hand(table);
            }
            Ok(result)
        })
    }

    pub fn call_partner(
        &self,
        table_id: TableId,
        seat: Seat,
        suit: Option<Suit>,
        go_alone: bool,
        under_card: Option<Card>,
    ) -> Result<CallResult, AppError> {
        self.with_table(table_id, "call_partner", Some(seat), |table| {
            let result =
                crate::domain::call_partner(table.hand_mut()?, seat, suit, go_alone, under_card)?;
            match &result.call {
                Some(call) => debug!(
                    %table_id,
                    picker = seat,
                    suit = %call.suit,
                    rank = ?call.rank,
                    kind = ?call.kind,
                    "Partner called"
                ),
                None => debug!(%table_id, picker = seat, "Picker goes alone"),
            }
            Ok(result)
        })
    }

    pub fn bury(
        &self,
        table_id: TableId,
        seat: Seat,
        cards: &[Card],
    ) -> Result<BuryResult, AppError> {
        self.with_table(table_id, "bury", Some(seat), |table| {
            let result = crate::domain::bury(table.hand_mut()?, seat, cards)?;
            debug!(
                %table_id,
                picker = seat,
                buried_points = result.buried_points,
                leader = result.leader,
                "Cards buried"
            );
            Ok(result)
        })
    }

    pub fn play_card(
        &self,
        table_id: TableId,
        seat: Seat,
        card: Card,
    ) -> Result<PlayCardResult, AppError> {
        self.with_table(table_id, "play_card", Some(seat), |table| {
            let result = crate::domain::play_card(table.hand_mut()?, seat, card)?;
            debug!(%table_id, seat, %card, "Card played");
            if let Some(partner) = result.partner_revealed {
                info!(%table_id, partner, under = result.under_card_played, "Partner revealed");
            }
            if let Some(winner) = result.trick_winner {
                debug!(%table_id, winner, points = ?result.trick_points, "Trick complete");
            }
            if result.hand_complete {
                finish_hand(table);
            }
            Ok(result)
        })
    }
}
