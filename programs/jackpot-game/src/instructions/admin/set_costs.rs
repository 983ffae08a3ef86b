use anchor_lang::prelude::*;

use crate::constants::SEED_GAME_STATE;
use crate::errors::GameError;
use crate::events::ConfigUpdated;
use crate::state::GameState;

#[derive(Accounts)]
pub struct SetCosts<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,
}

pub fn set_costs(
    ctx: Context<SetCosts>,
    new_guess_cost: Option<u64>,
    new_hint_cost: Option<u64>,
) -> Result<()> {
    let game_state = &mut ctx.accounts.game_state;

    if let Some(guess_cost) = new_guess_cost {
        game_state.guess_cost = guess_cost;
    }
    if let Some(hint_cost) = new_hint_cost {
        game_state.hint_cost = hint_cost;
    }

    emit!(ConfigUpdated {
        guess_cost: game_state.guess_cost,
        hint_cost: game_state.hint_cost,
        batch_interval: game_state.batch_interval,
    });

    Ok(())
}
