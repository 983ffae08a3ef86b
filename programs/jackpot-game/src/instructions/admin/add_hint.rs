use anchor_lang::prelude::*;

use crate::constants::SEED_GAME_STATE;
use crate::errors::GameError;
use crate::events::HintAdded;
use crate::state::GameState;

#[derive(Accounts)]
pub struct AddHint<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,
}

/// Appends a hint slot. The hint text lives with the off-chain service;
/// only the slot's existence and price are on-chain.
pub fn add_hint(ctx: Context<AddHint>) -> Result<()> {
    let game_state = &mut ctx.accounts.game_state;

    let index = game_state.hint_count;
    game_state.hint_count = index.checked_add(1).ok_or(GameError::MathOverflow)?;

    emit!(HintAdded { index });
    msg!("Hint slot {} added", index);

    Ok(())
}
