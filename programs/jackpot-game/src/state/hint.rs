use anchor_lang::prelude::*;

/// Append-only access grant for one (player, hint index) pair. Never
/// revoked. Existence of this account is the on-chain proof of purchase the
/// off-chain hint service checks before releasing content.
#[account]
pub struct HintReceipt {
    pub player: Pubkey,
    pub index: u32,
    pub price_paid: u64,
    pub purchased_at: i64,
    pub bump: u8,
}

impl HintReceipt {
    // 8 + 32 + 4 + 8 + 8 + 1
    pub const LEN: usize = 8 + 32 + 4 + 8 + 8 + 1;
}
