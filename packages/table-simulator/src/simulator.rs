//! In-memory table simulator.
//!
//! Runs hands through the same [`GameFlowService`] a live session uses, with
//! five seeded agents, so every simulated action passes the rule engine's
//! validation.

use std::sync::Arc;

use backend::ai::{create_ai, AiPlayer};
use backend::domain::rules::PLAYERS;
use backend::domain::{derive_agent_seed, HandResult, Seat};
use backend::error::AppError;
use backend::{GameFlowService, TableConfig, TableId, TableRegistry};

/// One finished hand and the context needed to report it.
#[derive(Debug, Clone)]
pub struct HandOutcome {
    pub hand_no: u64,
    pub dealer: Seat,
    pub result: HandResult,
    pub summary: String,
}

pub struct Simulator {
    service: GameFlowService,
    table: TableId,
    agents: [Box<dyn AiPlayer>; PLAYERS],
}

impl Simulator {
    /// A single table whose deals and agents all derive from `seed`.
    pub fn new(seed: u64, ai_type: &str) -> Result<Self, AppError> {
        let registry = TableRegistry::new(TableConfig::seeded(seed).with_max_tables(1));
        let service = GameFlowService::new(Arc::new(registry));
        let names = std::array::from_fn(|seat| format!("{ai_type}-{seat}"));
        let table = service.create_table(names)?;

        let mut agents = Vec::with_capacity(PLAYERS);
        for seat in 0..PLAYERS {
            let config = serde_json::json!({ "seed": derive_agent_seed(seed, seat as u8) });
            let agent = create_ai(ai_type, Some(&config))
                .ok_or_else(|| AppError::config(format!("Unknown AI type: {ai_type}")))?;
            agents.push(agent);
        }
        let agents: [Box<dyn AiPlayer>; PLAYERS] = agents
            .try_into()
            .map_err(|_| AppError::internal("Expected one agent per seat"))?;

        Ok(Self {
            service,
            table,
            agents,
        })
    }

    /// Deal and play one hand to completion.
    pub fn play_hand(&self) -> Result<HandOutcome, AppError> {
        let dealer = self.service.registry().get(self.table)?.lock().dealer();
        let result = self.service.play_hand_with_agents(self.table, &self.agents)?;
        let hand_no = self.service.results(self.table)?.len() as u64;
        let summary = self.service.last_summary(self.table)?.unwrap_or_default();
        Ok(HandOutcome {
            hand_no,
            dealer,
            result,
            summary,
        })
    }

    /// Running per-seat totals at this table.
    pub fn totals(&self) -> Result<[i32; PLAYERS], AppError> {
        self.service.totals(self.table)
    }
}
