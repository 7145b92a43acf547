use tracing::debug;

use super::GameFlowService;
use crate::ai::AiPlayer;
use crate::domain::rules::PLAYERS;
use crate::domain::{HandResult, PhaseKind};
use crate::error::AppError;
use crate::services::tables::TableId;

/// Upper bound on decisions in one hand: 5 pick decisions, a call, a bury
/// and 30 plays fit well inside it.
const MAX_DECISIONS: usize = 64;

impl GameFlowService {
    /// Deal a hand and let `agents` (indexed by seat) play it to the end.
    ///
    /// Each decision goes through the same public actions a client would use,
    /// so an agent choosing an illegal action surfaces as a validation error.
    pub fn play_hand_with_agents(
        &self,
        table_id: TableId,
        agents: &[Box<dyn AiPlayer>; PLAYERS],
    ) -> Result<HandResult, AppError> {
        self.start_hand(table_id)?;

        for _ in 0..MAX_DECISIONS {
            let snapshot = self.snapshot(table_id)?;
            let Some(seat) = snapshot.to_act else {
                return self
                    .results(table_id)?
                    .pop()
                    .ok_or_else(|| AppError::internal("Hand finished without a result"));
            };

            let view = self.player_view(table_id, seat)?;
            let agent = &agents[seat as usize];
            match view.phase {
                PhaseKind::Picking => {
                    if agent.choose_pick(&view)? {
                        self.pick(table_id, seat)?;
                    } else {
                        self.pass(table_id, seat)?;
                    }
                }
                PhaseKind::Calling => {
                    let call = agent.choose_call(&view)?;
                    self.call_partner(table_id, seat, call.suit, call.go_alone, call.under_card)?;
                }
                PhaseKind::Burying => {
                    let cards = agent.choose_bury(&view)?;
                    self.bury(table_id, seat, &cards)?;
                }
                PhaseKind::Playing => {
                    let card = agent.choose_play(&view)?;
                    self.play_card(table_id, seat, card)?;
                }
                PhaseKind::Dealing | PhaseKind::Scoring => {
                    return Err(AppError::internal(format!(
                        "Seat {seat} to act during {:?}",
                        view.phase
                    )));
                }
            }
            debug!(%table_id, seat, phase = ?view.phase, "Agent acted");
        }

        Err(AppError::internal(format!(
            "Hand at table {table_id} did not finish within {MAX_DECISIONS} decisions"
        )))
    }
}
