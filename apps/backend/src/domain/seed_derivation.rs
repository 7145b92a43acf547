//! RNG seed derivation for reproducible tables.
//!
//! Derives unique-but-deterministic seeds for each table and hand from a
//! single configured base seed.

/// Derive a seed for dealing one hand at one table.
///
/// # Arguments
///
/// * `base_seed` - Configured base seed (`SHEEPSHEAD_DEAL_SEED`)
/// * `table_seq` - Sequence number of the table within its registry
/// * `hand_no` - 1-based hand number at the table
///
/// # Returns
///
/// Derived seed that is unique per (base, table, hand) combination.
pub fn derive_dealing_seed(base_seed: u64, table_seq: u64, hand_no: u64) -> u64 {
    base_seed
        .wrapping_add(table_seq.wrapping_mul(1_000_003))
        .wrapping_add(hand_no.wrapping_mul(7919))
        .wrapping_add(2)
}

/// Derive a per-seat seed for seedable agents.
pub fn derive_agent_seed(base_seed: u64, seat: u8) -> u64 {
    base_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
