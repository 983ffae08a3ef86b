use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{SEED_GAME_STATE, SEED_HINT_RECEIPT, SEED_PLAYER};
use crate::errors::GameError;
use crate::events::{HintPurchased, NewPlayer};
use crate::state::{GameState, HintReceipt, PlayerState};

#[derive(Accounts)]
pub struct PurchaseHint<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        init_if_needed,
        payer = player,
        space = PlayerState::LEN,
        seeds = [SEED_PLAYER, player.key().as_ref()],
        bump
    )]
    pub player_state: Box<Account<'info, PlayerState>>,

    /// The grant for the caller's next unpurchased index. Deriving the PDA
    /// from the player's own watermark makes the index monotone per player
    /// and the grant impossible to mint any other way.
    #[account(
        init,
        payer = player,
        space = HintReceipt::LEN,
        seeds = [
            SEED_HINT_RECEIPT,
            player.key().as_ref(),
            player_state.hints_purchased.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub hint_receipt: Box<Account<'info, HintReceipt>>,

    #[account(
        mut,
        constraint = player_token_account.mint == game_state.token_mint @ GameError::NotFound
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = game_state.treasury @ GameError::NotFound
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn purchase_hint(ctx: Context<PurchaseHint>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let player_key = ctx.accounts.player.key();

    let index = ctx.accounts.player_state.hints_purchased;
    require!(
        index < ctx.accounts.game_state.hint_count,
        GameError::NotFound
    );

    let price = ctx.accounts.game_state.hint_cost;
    require!(
        ctx.accounts.player_token_account.amount >= price,
        GameError::PaymentRequired
    );
    if price > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.player_token_account.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.player.to_account_info(),
                },
            ),
            price,
        )?;
    }

    if ctx.accounts.player_state.player == Pubkey::default() {
        let player_state = &mut ctx.accounts.player_state;
        player_state.player = player_key;
        player_state.bump = ctx.bumps.player_state;
        ctx.accounts.game_state.unique_players = ctx
            .accounts
            .game_state
            .unique_players
            .checked_add(1)
            .ok_or(GameError::MathOverflow)?;
        emit!(NewPlayer { player: player_key });
    }

    let receipt = &mut ctx.accounts.hint_receipt;
    receipt.player = player_key;
    receipt.index = index;
    receipt.price_paid = price;
    receipt.purchased_at = now;
    receipt.bump = ctx.bumps.hint_receipt;

    let player_state = &mut ctx.accounts.player_state;
    player_state.hints_purchased = index.checked_add(1).ok_or(GameError::MathOverflow)?;

    emit!(HintPurchased {
        player: player_key,
        index,
        price,
    });

    Ok(())
}
