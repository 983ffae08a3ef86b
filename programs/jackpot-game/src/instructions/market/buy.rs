use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_GAME_STATE, SEED_MARKET, SEED_MARKET_VAULT};
use crate::errors::GameError;
use crate::events::{JackpotFunded, TokensPurchased};
use crate::state::{BondingMarket, GameState};
use crate::utils::curve;

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        mut,
        seeds = [SEED_MARKET],
        bump = market.bump,
        constraint = !market.paused @ GameError::MarketPaused
    )]
    pub market: Account<'info, BondingMarket>,

    #[account(
        mut,
        seeds = [SEED_MARKET_VAULT],
        bump = market.vault_bump,
        token::authority = market,
    )]
    pub market_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = buyer_token_account.mint == market.token_mint @ GameError::NotFound
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// The quote is recomputed here from live reserves, so no trade can slip in
/// between quote and execution. `max_cost` is the lamports the buyer is
/// offering; a quote above it rejects the whole trade.
pub fn buy(ctx: Context<Buy>, amount: u64, max_cost: u64) -> Result<()> {
    let market = &ctx.accounts.market;

    let cost = curve::quote_buy(
        market.base_reserve,
        market.virtual_base,
        market.token_reserve,
        amount,
    )?;
    let fee = curve::spread_fee(cost, market.spread_bps)?;
    let total = cost.checked_add(fee).ok_or(GameError::MathOverflow)?;
    require!(total <= max_cost, GameError::InsufficientPayment);

    // Lamports: buyer -> curve reserve
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.market.to_account_info(),
            },
        ),
        cost,
    )?;

    // Lamports: buyer -> jackpot pool (the spread)
    if fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.game_state.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    // Tokens: vault -> buyer
    let seeds: &[&[u8]] = &[SEED_MARKET, &[ctx.accounts.market.bump]];
    let signer = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.market_vault.to_account_info(),
                to: ctx.accounts.buyer_token_account.to_account_info(),
                authority: ctx.accounts.market.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    let market = &mut ctx.accounts.market;
    market.base_reserve = market
        .base_reserve
        .checked_add(cost)
        .ok_or(GameError::MathOverflow)?;
    market.token_reserve = market
        .token_reserve
        .checked_sub(amount)
        .ok_or(GameError::InsufficientReserve)?;
    market.total_bought = market
        .total_bought
        .checked_add(amount)
        .ok_or(GameError::MathOverflow)?;

    if fee > 0 {
        let game_state = &mut ctx.accounts.game_state;
        let (to_current, to_next) = game_state.credit_jackpot(fee)?;
        emit!(JackpotFunded {
            funder: ctx.accounts.buyer.key(),
            to_current,
            to_next,
        });
    }

    emit!(TokensPurchased {
        buyer: ctx.accounts.buyer.key(),
        amount,
        cost,
        fee,
        token_reserve: ctx.accounts.market.token_reserve,
    });

    Ok(())
}
