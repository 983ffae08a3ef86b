use anchor_lang::prelude::*;

use crate::constants::MAX_GUESS_LEN;

/// One guess inside a batch. The PDA is derived from `(batch_id, player)`,
/// so a player can hold at most one guess per batch.
#[account]
pub struct GuessRecord {
    pub player: Pubkey,
    pub batch_id: u64,
    /// Ingestion index within the batch; the resolution tie-break
    pub sequence: u32,
    pub submitted_at: i64,
    /// Chance weight snapshotted at submission, in basis points
    pub chance_bps: u16,
    pub resolved: bool,
    pub won: bool,
    pub guess: String,
    pub bump: u8,
}

impl GuessRecord {
    // 8 + 32 + 8 + 4 + 8 + 2 + 1 + 1 + (4 + MAX_GUESS_LEN) + 1
    pub const SPACE: usize = 8 + 32 + 8 + 4 + 8 + 2 + 1 + 1 + 4 + MAX_GUESS_LEN + 1;
}
