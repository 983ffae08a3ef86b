use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_GAME_STATE, SEED_MARKET, SEED_MARKET_VAULT};
use crate::errors::GameError;
use crate::events::{JackpotFunded, TokensSold};
use crate::state::{BondingMarket, GameState};
use crate::utils::curve;

#[derive(Accounts)]
pub struct Sell<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

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
        constraint = seller_token_account.mint == market.token_mint @ GameError::NotFound
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn sell(ctx: Context<Sell>, amount: u64, min_proceeds: u64) -> Result<()> {
    let market = &ctx.accounts.market;

    require!(
        ctx.accounts.seller_token_account.amount >= amount,
        GameError::PaymentRequired
    );

    let proceeds = curve::quote_sell(
        market.base_reserve,
        market.virtual_base,
        market.token_reserve,
        amount,
    )?;
    // The virtual reserve is not withdrawable; sells are bounded by the
    // lamports actually collected from buys.
    require!(
        proceeds <= market.base_reserve,
        GameError::InsufficientLiquidity
    );

    let fee = curve::spread_fee(proceeds, market.spread_bps)?;
    let net = proceeds.checked_sub(fee).ok_or(GameError::MathOverflow)?;
    require!(net >= min_proceeds, GameError::InsufficientPayment);

    // Tokens: seller -> vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.seller_token_account.to_account_info(),
                to: ctx.accounts.market_vault.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
            },
        ),
        amount,
    )?;

    // Lamports: curve reserve -> seller, spread -> jackpot pool. The market
    // account is program-owned, so it is debited directly.
    let market_info = ctx.accounts.market.to_account_info();
    let seller_info = ctx.accounts.seller.to_account_info();
    let game_state_info = ctx.accounts.game_state.to_account_info();
    **market_info.try_borrow_mut_lamports()? -= proceeds;
    **seller_info.try_borrow_mut_lamports()? += net;
    **game_state_info.try_borrow_mut_lamports()? += fee;

    let market = &mut ctx.accounts.market;
    market.base_reserve = market
        .base_reserve
        .checked_sub(proceeds)
        .ok_or(GameError::InsufficientLiquidity)?;
    market.token_reserve = market
        .token_reserve
        .checked_add(amount)
        .ok_or(GameError::MathOverflow)?;
    market.total_sold = market
        .total_sold
        .checked_add(amount)
        .ok_or(GameError::MathOverflow)?;

    if fee > 0 {
        let game_state = &mut ctx.accounts.game_state;
        let (to_current, to_next) = game_state.credit_jackpot(fee)?;
        emit!(JackpotFunded {
            funder: ctx.accounts.seller.key(),
            to_current,
            to_next,
        });
    }

    emit!(TokensSold {
        seller: ctx.accounts.seller.key(),
        amount,
        proceeds,
        fee,
        token_reserve: ctx.accounts.market.token_reserve,
    });

    Ok(())
}
