use anchor_lang::prelude::*;

use crate::constants::{SEED_GAME_STATE, SEED_SECRET_VAULT};
use crate::errors::GameError;
use crate::events::SecretCommitted;
use crate::state::{GameState, SecretVault};

#[derive(Accounts)]
pub struct SetSecret<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        mut,
        seeds = [SEED_SECRET_VAULT],
        bump = secret_vault.bump
    )]
    pub secret_vault: Account<'info, SecretVault>,
}

/// Replaces the commitment. Guesses still pending resolution are evaluated
/// against whatever secret is active when they resolve, never against the
/// one they were submitted under.
pub fn set_secret(ctx: Context<SetSecret>, secret_hash: [u8; 32], salt: [u8; 32]) -> Result<()> {
    let secret_vault = &mut ctx.accounts.secret_vault;
    secret_vault.secret_hash = secret_hash;
    secret_vault.salt = salt;
    secret_vault.is_set = true;
    secret_vault.round = secret_vault
        .round
        .checked_add(1)
        .ok_or(GameError::MathOverflow)?;

    let game_state = &mut ctx.accounts.game_state;
    game_state.guesses_this_round = 0;

    emit!(SecretCommitted {
        secret_hash,
        salt,
        round: secret_vault.round,
    });

    msg!("Secret committed for round {}", secret_vault.round);

    Ok(())
}
