use anchor_lang::prelude::*;

/// The bonding-curve market. The account holds the lamport reserve
/// directly; a token-vault PDA owned by this account holds the token
/// inventory.
#[account]
pub struct BondingMarket {
    pub token_mint: Pubkey,

    /// Tokens currently held by the curve. Decreases by exactly the traded
    /// quantity on a buy, increases by it on a sell.
    pub token_reserve: u64,

    /// Lamports collected from buys and owed to future sells
    pub base_reserve: u64,

    /// Virtual lamport reserve. Sets the price floor of an unseeded curve;
    /// never withdrawable.
    pub virtual_base: u64,

    /// Fee charged on both sides of a trade; routed to the jackpot pool
    pub spread_bps: u64,

    pub paused: bool,

    /// Lifetime volume
    pub total_bought: u64,
    pub total_sold: u64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl BondingMarket {
    // 8 + 32 + 8*6 + 1 + 1 + 1
    pub const LEN: usize = 8 + 32 + 48 + 1 + 1 + 1;
}
