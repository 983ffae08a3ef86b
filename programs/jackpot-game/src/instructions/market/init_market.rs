use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{BPS_SCALE, SEED_GAME_STATE, SEED_MARKET, SEED_MARKET_VAULT};
use crate::errors::GameError;
use crate::events::MarketInitialized;
use crate::state::{BondingMarket, GameState};

#[derive(Accounts)]
pub struct InitMarket<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        init,
        payer = admin,
        space = BondingMarket::LEN,
        seeds = [SEED_MARKET],
        bump
    )]
    pub market: Account<'info, BondingMarket>,

    #[account(
        init,
        payer = admin,
        seeds = [SEED_MARKET_VAULT],
        bump,
        token::mint = token_mint,
        token::authority = market,
    )]
    pub market_vault: Account<'info, TokenAccount>,

    #[account(address = game_state.token_mint)]
    pub token_mint: Account<'info, Mint>,

    /// Admin token account the initial reserve is pulled from
    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn init_market(
    ctx: Context<InitMarket>,
    virtual_base: u64,
    spread_bps: u64,
    seed_tokens: u64,
) -> Result<()> {
    require!(virtual_base > 0, GameError::AmountZero);
    require!(seed_tokens > 0, GameError::AmountZero);
    require!(spread_bps < BPS_SCALE, GameError::MathOverflow);

    // Pull the curve's token inventory from the operator
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.market_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        seed_tokens,
    )?;

    let market = &mut ctx.accounts.market;
    market.token_mint = ctx.accounts.token_mint.key();
    market.token_reserve = seed_tokens;
    market.base_reserve = 0;
    market.virtual_base = virtual_base;
    market.spread_bps = spread_bps;
    market.paused = false;
    market.total_bought = 0;
    market.total_sold = 0;
    market.bump = ctx.bumps.market;
    market.vault_bump = ctx.bumps.market_vault;

    emit!(MarketInitialized {
        token_mint: market.token_mint,
        token_reserve: seed_tokens,
        virtual_base,
        spread_bps,
    });

    Ok(())
}
