use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::SEED_GAME_STATE;
use crate::errors::GameError;
use crate::events::JackpotFunded;
use crate::state::GameState;

#[derive(Accounts)]
pub struct FundJackpot<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump
    )]
    pub game_state: Account<'info, GameState>,

    pub system_program: Program<'info, System>,
}

/// Additive only. A `rollover_bps` share of every deposit seeds the next
/// round; the rest grows the current pool.
pub fn fund_jackpot(ctx: Context<FundJackpot>, amount: u64) -> Result<()> {
    require!(amount > 0, GameError::AmountZero);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.game_state.to_account_info(),
            },
        ),
        amount,
    )?;

    let (to_current, to_next) = ctx.accounts.game_state.credit_jackpot(amount)?;

    emit!(JackpotFunded {
        funder: ctx.accounts.funder.key(),
        to_current,
        to_next,
    });
    msg!(
        "Jackpot funded: {} to current pool, {} to next round",
        to_current,
        to_next
    );

    Ok(())
}
