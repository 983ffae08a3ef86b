use anchor_lang::prelude::*;

use crate::constants::SEED_GAME_STATE;
use crate::errors::GameError;
use crate::events::ConfigUpdated;
use crate::state::GameState;

#[derive(Accounts)]
pub struct SetBatchInterval<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,
}

/// Takes effect for batches opened afterwards; the currently open batch
/// keeps the window it was created with.
pub fn set_batch_interval(ctx: Context<SetBatchInterval>, interval_seconds: i64) -> Result<()> {
    require!(interval_seconds >= 0, GameError::InvalidBatch);

    let game_state = &mut ctx.accounts.game_state;
    game_state.batch_interval = interval_seconds;

    emit!(ConfigUpdated {
        guess_cost: game_state.guess_cost,
        hint_cost: game_state.hint_cost,
        batch_interval: game_state.batch_interval,
    });

    Ok(())
}
