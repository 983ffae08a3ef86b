use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod jackpot_game {
    use super::*;

    // --- ADMIN & CONFIG ---
    pub fn initialize(
        ctx: Context<Initialize>,
        guess_cost: u64,
        hint_cost: u64,
        batch_interval: i64,
        rollover_bps: u64,
    ) -> Result<()> {
        admin::initialize(ctx, guess_cost, hint_cost, batch_interval, rollover_bps)
    }

    pub fn set_secret(
        ctx: Context<SetSecret>,
        secret_hash: [u8; 32],
        salt: [u8; 32],
    ) -> Result<()> {
        admin::set_secret(ctx, secret_hash, salt)
    }

    pub fn set_costs(
        ctx: Context<SetCosts>,
        new_guess_cost: Option<u64>,
        new_hint_cost: Option<u64>,
    ) -> Result<()> {
        admin::set_costs(ctx, new_guess_cost, new_hint_cost)
    }

    pub fn set_batch_interval(ctx: Context<SetBatchInterval>, interval_seconds: i64) -> Result<()> {
        admin::set_batch_interval(ctx, interval_seconds)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        admin::set_pause(ctx, paused)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        admin::transfer_admin(ctx, new_admin)
    }

    pub fn add_hint(ctx: Context<AddHint>) -> Result<()> {
        admin::add_hint(ctx)
    }

    pub fn emit_game_update(
        ctx: Context<EmitGameUpdate>,
        kind: String,
        message: String,
    ) -> Result<()> {
        admin::emit_game_update(ctx, kind, message)
    }

    // --- BONDING MARKET ---
    pub fn init_market(
        ctx: Context<InitMarket>,
        virtual_base: u64,
        spread_bps: u64,
        seed_tokens: u64,
    ) -> Result<()> {
        market::init_market(ctx, virtual_base, spread_bps, seed_tokens)
    }

    pub fn buy(ctx: Context<Buy>, amount: u64, max_cost: u64) -> Result<()> {
        market::buy(ctx, amount, max_cost)
    }

    pub fn sell(ctx: Context<Sell>, amount: u64, min_proceeds: u64) -> Result<()> {
        market::sell(ctx, amount, min_proceeds)
    }

    // --- GUESSING ---
    pub fn submit_guess(ctx: Context<SubmitGuess>, batch_id: u64, guess: String) -> Result<()> {
        game::submit_guess(ctx, batch_id, guess)
    }

    pub fn seal_batch(ctx: Context<SealBatch>, batch_id: u64) -> Result<()> {
        game::seal_batch(ctx, batch_id)
    }

    pub fn resolve_batch<'info>(
        ctx: Context<'_, '_, '_, 'info, ResolveBatch<'info>>,
        batch_id: u64,
    ) -> Result<()> {
        game::resolve_batch(ctx, batch_id)
    }

    pub fn fund_jackpot(ctx: Context<FundJackpot>, amount: u64) -> Result<()> {
        game::fund_jackpot(ctx, amount)
    }

    // --- HINTS ---
    pub fn purchase_hint(ctx: Context<PurchaseHint>) -> Result<()> {
        hints::purchase_hint(ctx)
    }
}
