use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::{BPS_SCALE, SEED_GAME_STATE, SEED_SECRET_VAULT};
use crate::errors::GameError;
use crate::events::GameInitialized;
use crate::state::{GameState, SecretVault};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = GameState::LEN,
        seeds = [SEED_GAME_STATE],
        bump
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        init,
        payer = admin,
        space = SecretVault::LEN,
        seeds = [SEED_SECRET_VAULT],
        bump
    )]
    pub secret_vault: Account<'info, SecretVault>,

    pub token_mint: Account<'info, Mint>,

    /// Token account that collects guess and hint payments
    #[account(constraint = treasury.mint == token_mint.key() @ GameError::NotFound)]
    pub treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<Initialize>,
    guess_cost: u64,
    hint_cost: u64,
    batch_interval: i64,
    rollover_bps: u64,
) -> Result<()> {
    require!(batch_interval >= 0, GameError::InvalidBatch);
    require!(rollover_bps <= BPS_SCALE, GameError::MathOverflow);

    let game_state = &mut ctx.accounts.game_state;
    game_state.admin = ctx.accounts.admin.key();
    game_state.treasury = ctx.accounts.treasury.key();
    game_state.token_mint = ctx.accounts.token_mint.key();
    game_state.guess_cost = guess_cost;
    game_state.hint_cost = hint_cost;
    game_state.batch_interval = batch_interval;
    game_state.rollover_bps = rollover_bps;
    game_state.jackpot_lamports = 0;
    game_state.next_jackpot_lamports = 0;
    game_state.total_guesses = 0;
    game_state.guesses_this_round = 0;
    game_state.unique_players = 0;
    game_state.total_winners = 0;
    game_state.batch_count = 0;
    game_state.open_batch_id = 0;
    game_state.open_batch_closes_at = 0;
    game_state.has_open_batch = false;
    game_state.hint_count = 0;
    game_state.bump = ctx.bumps.game_state;

    let secret_vault = &mut ctx.accounts.secret_vault;
    secret_vault.secret_hash = [0u8; 32];
    secret_vault.salt = [0u8; 32];
    secret_vault.is_set = false;
    secret_vault.round = 0;
    secret_vault.bump = ctx.bumps.secret_vault;

    emit!(GameInitialized {
        admin: game_state.admin,
        treasury: game_state.treasury,
        token_mint: game_state.token_mint,
    });

    Ok(())
}
