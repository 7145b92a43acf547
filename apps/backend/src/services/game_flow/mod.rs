//! Game flow service - bridges the pure rule engine with live tables.
//!
//! Every action locks its table, applies one engine operation and logs the
//! outcome. Engine rejections leave the hand untouched and come back as
//! [`AppError::Validation`](crate::AppError::Validation) with a stable code.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use tracing::{info_span, warn};

pub use round_lifecycle::HandStarted;

use crate::domain::Seat;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::services::tables::{Table, TableId, TableRegistry};

/// Game flow service over an injected [`TableRegistry`].
#[derive(Clone)]
pub struct GameFlowService {
    registry: Arc<TableRegistry>,
}

impl GameFlowService {
    pub fn new(registry: Arc<TableRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// Run `f` against one table under its lock, inside a span carrying the
    /// table id. Rejections are logged and converted to [`AppError`].
    fn with_table<T>(
        &self,
        table_id: TableId,
        action: &'static str,
        seat: Option<Seat>,
        f: impl FnOnce(&mut Table) -> Result<T, DomainError>,
    ) -> Result<T, AppError> {
        let span = info_span!("game_flow", %table_id, action);
        let _entered = span.enter();

        let handle = self.registry.get(table_id).map_err(AppError::from)?;
        let mut table = handle.lock();
        f(&mut table).map_err(|err| {
            let code = ErrorCode::from(&err);
            warn!(%table_id, action, ?seat, code = code.as_str(), error = %err, "Action rejected");
            AppError::from(err)
        })
    }
}
