//! Live table registry owned by the session layer.
//!
//! Each table holds at most one hand in progress behind its own mutex, so
//! every hand has a single writer. The registry itself is a concurrent map and
//! is handed to services explicitly; there is no global instance.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::table::TableConfig;
use crate::domain::rules::PLAYERS;
use crate::domain::summary::SeatNames;
use crate::domain::{
    derive_dealing_seed, start_hand, HandResult, HandState, OsShuffle, SeededShuffle, Seat,
    ShuffleSource,
};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub Uuid);

impl TableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a table's deck permutations come from.
enum DealSource {
    /// Fresh ChaCha20 stream per hand, derived from the configured base seed.
    Derived { base: u64 },
    Source(Box<dyn ShuffleSource>),
}

/// One table: five seats, a rotating dealer and the hand in progress.
pub struct Table {
    id: TableId,
    seq: u64,
    seat_names: [String; PLAYERS],
    dealer: Seat,
    hands_dealt: u64,
    hand: Option<HandState>,
    deal_source: DealSource,
    results: Vec<HandResult>,
}

impl Table {
    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn seat_names(&self) -> &[String; PLAYERS] {
        &self.seat_names
    }

    /// Dealer of the current hand, or of the next hand when none is running.
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn hands_dealt(&self) -> u64 {
        self.hands_dealt
    }

    pub fn hand(&self) -> Option<&HandState> {
        self.hand.as_ref()
    }

    pub fn results(&self) -> &[HandResult] {
        &self.results
    }

    /// Sum of every recorded hand's deltas per seat.
    pub fn totals(&self) -> [i32; PLAYERS] {
        let mut totals = [0i32; PLAYERS];
        for result in &self.results {
            for (total, delta) in totals.iter_mut().zip(result.scores()) {
                *total += i32::from(delta);
            }
        }
        totals
    }

    pub fn hand_in_progress(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| !h.is_complete())
    }

    /// Deal the next hand. Rejected while the previous one is unfinished.
    pub(crate) fn deal(&mut self) -> Result<&mut HandState, DomainError> {
        if self.hand_in_progress() {
            return Err(DomainError::conflict(
                ConflictKind::HandInProgress,
                format!("Table {} already has a hand in progress", self.id),
            ));
        }

        let hand_no = self.hands_dealt + 1;
        let mut state = HandState::new(self.dealer)?;
        match &mut self.deal_source {
            DealSource::Derived { base } => {
                let seed = derive_dealing_seed(*base, self.seq, hand_no);
                start_hand(&mut state, &mut SeededShuffle::new(seed))?;
            }
            DealSource::Source(source) => start_hand(&mut state, source.as_mut())?,
        }
        self.hands_dealt = hand_no;
        debug!(table_id = %self.id, hand_no, dealer = self.dealer, "Hand dealt");
        Ok(self.hand.insert(state))
    }

    pub(crate) fn hand_mut(&mut self) -> Result<&mut HandState, DomainError> {
        let id = self.id;
        self.hand.as_mut().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Hand, format!("Table {id} has no hand dealt"))
        })
    }

    /// Record a completed hand and rotate the dealer. Returns the result.
    pub(crate) fn record_completed(&mut self) -> Option<HandResult> {
        let hand = self.hand.as_ref()?;
        let result = hand.result()?.clone();
        self.dealer = hand.next_dealer();
        self.results.push(result.clone());
        Some(result)
    }
}

impl SeatNames for Table {
    fn display_name(&self, seat: Seat) -> String {
        self.seat_names.display_name(seat)
    }
}

pub type TableHandle = Arc<Mutex<Table>>;

/// Registry of live tables keyed by [`TableId`].
pub struct TableRegistry {
    tables: DashMap<TableId, TableHandle>,
    config: TableConfig,
    next_seq: AtomicU64,
}

impl TableRegistry {
    pub fn new(config: TableConfig) -> Self {
        Self {
            tables: DashMap::new(),
            config,
            next_seq: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Open a table using the configured dealing source. The first dealer is seat 0.
    pub fn create_table(&self, seat_names: [String; PLAYERS]) -> Result<TableId, DomainError> {
        let source = match self.config.deal_seed {
            Some(base) => DealSource::Derived { base },
            None => DealSource::Source(Box::new(OsShuffle)),
        };
        self.insert(seat_names, source)
    }

    /// Open a table that deals from `shuffle` instead of the configured source.
    pub fn create_table_with_shuffle(
        &self,
        seat_names: [String; PLAYERS],
        shuffle: Box<dyn ShuffleSource>,
    ) -> Result<TableId, DomainError> {
        self.insert(seat_names, DealSource::Source(shuffle))
    }

    fn insert(
        &self,
        seat_names: [String; PLAYERS],
        deal_source: DealSource,
    ) -> Result<TableId, DomainError> {
        if self.tables.len() >= self.config.max_tables {
            return Err(DomainError::conflict(
                ConflictKind::TableLimit,
                format!("Table limit of {} reached", self.config.max_tables),
            ));
        }

        let id = TableId::new();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let table = Table {
            id,
            seq,
            seat_names,
            dealer: 0,
            hands_dealt: 0,
            hand: None,
            deal_source,
            results: Vec::new(),
        };
        self.tables.insert(id, Arc::new(Mutex::new(table)));
        info!(table_id = %id, seq, "Table created");
        Ok(id)
    }

    pub fn get(&self, id: TableId) -> Result<TableHandle, DomainError> {
        self.tables
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Table, format!("Table {id} not found"))
            })
    }

    pub fn remove(&self, id: TableId) -> Result<(), DomainError> {
        if self.tables.remove(&id).is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Table,
                format!("Table {id} not found"),
            ));
        }
        info!(table_id = %id, "Table removed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_ids(&self) -> Vec<TableId> {
        self.tables.iter().map(|entry| *entry.key()).collect()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
