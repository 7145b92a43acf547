/// Seats at a Sheepshead table.
pub const PLAYERS: usize = 5;
/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 6;
/// Cards in the blind (and later in the bury).
pub const BLIND_SIZE: usize = 2;
/// Cards in the stripped deck (7 through ace in four suits).
pub const DECK_SIZE: usize = 32;
/// Points in a full deck.
pub const TOTAL_POINTS: u8 = 120;
/// Picking side needs this many points to win.
pub const WIN_THRESHOLD: u8 = 61;
/// Tricks per hand.
pub const TRICKS_PER_HAND: usize = HAND_SIZE;
/// A called suit with this many cards held by the partner frees the lead.
pub const FREE_LEAD_CALLED_COUNT: usize = 4;

/// Losers pay on a schneider when the losing side has at most this many
/// points. The picker's side needs one more than the defenders to avoid it.
pub const DEFENDER_SCHNEIDER_MAX: u8 = 29;
pub const PICKER_SCHNEIDER_MAX: u8 = 30;

pub const SCHNEIDER_MULTIPLIER: i16 = 2;
pub const SCHWARZ_MULTIPLIER: i16 = 3;

/// Schwanzer payouts indexed by loser count: `(each loser, each winner)`.
pub const SCHWANZER_TABLE: [(i16, i16); 6] = [(0, 0), (-4, 1), (-3, 2), (-2, 3), (-1, 4), (0, 0)];

pub fn schwanzer_payout(losers: usize) -> (i16, i16) {
    SCHWANZER_TABLE.get(losers).copied().unwrap_or((0, 0))
}
