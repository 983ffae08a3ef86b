use anchor_lang::prelude::*;

use crate::constants::{SEED_GAME_STATE, SEED_MARKET};
use crate::errors::GameError;
use crate::events::MarketPauseChanged;
use crate::state::{BondingMarket, GameState};

#[derive(Accounts)]
pub struct SetPause<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        mut,
        seeds = [SEED_MARKET],
        bump = market.bump
    )]
    pub market: Account<'info, BondingMarket>,
}

/// Circuit breaker for trading. Quotes are pure functions of market state
/// and stay readable while paused.
pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let market = &mut ctx.accounts.market;
    market.paused = paused;

    emit!(MarketPauseChanged { paused });
    msg!("Market paused: {}", paused);

    Ok(())
}
