use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{
    MAX_GUESS_LEN, SEED_BATCH, SEED_GAME_STATE, SEED_GUESS, SEED_PLAYER, SEED_SECRET_VAULT,
};
use crate::errors::GameError;
use crate::events::{BatchOpened, BatchResolved, GuessResolved, GuessSubmitted, NewPlayer};
use crate::instructions::game::payout::award_jackpot;
use crate::state::{Batch, BatchState, GameState, GuessRecord, PlayerState, SecretVault};
use crate::utils::chance;

#[derive(Accounts)]
#[instruction(batch_id: u64)]
pub struct SubmitGuess<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [SEED_SECRET_VAULT],
        bump = secret_vault.bump
    )]
    pub secret_vault: Box<Account<'info, SecretVault>>,

    #[account(
        init_if_needed,
        payer = player,
        space = PlayerState::LEN,
        seeds = [SEED_PLAYER, player.key().as_ref()],
        bump
    )]
    pub player_state: Box<Account<'info, PlayerState>>,

    #[account(
        init_if_needed,
        payer = player,
        space = Batch::LEN,
        seeds = [SEED_BATCH, batch_id.to_le_bytes().as_ref()],
        bump
    )]
    pub batch: Box<Account<'info, Batch>>,

    /// One record per (batch, player); the derivation itself enforces the
    /// one-guess-per-batch policy.
    #[account(
        init,
        payer = player,
        space = GuessRecord::SPACE,
        seeds = [SEED_GUESS, batch_id.to_le_bytes().as_ref(), player.key().as_ref()],
        bump
    )]
    pub guess_record: Box<Account<'info, GuessRecord>>,

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

/// Admits a guess into the active batch, opening one first when none is
/// open. `batch_id` names the batch the client derived the PDAs for: the
/// currently open batch to join it, or `batch_count` to open the next one.
/// With `batch_interval == 0` the fresh singleton batch is resolved against
/// the secret in the same transaction.
pub fn submit_guess(ctx: Context<SubmitGuess>, batch_id: u64, guess: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let player_key = ctx.accounts.player.key();

    require!(guess.len() <= MAX_GUESS_LEN, GameError::GuessTooLong);
    require!(ctx.accounts.secret_vault.is_set, GameError::SecretNotSet);

    let guess_cost = ctx.accounts.game_state.guess_cost;
    require!(
        ctx.accounts.player_token_account.amount >= guess_cost,
        GameError::PaymentRequired
    );
    if guess_cost > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.player_token_account.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.player.to_account_info(),
                },
            ),
            guess_cost,
        )?;
    }

    // First interaction creates the player record
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
    ctx.accounts.player_state.guesses_made = ctx
        .accounts
        .player_state
        .guesses_made
        .checked_add(1)
        .ok_or(GameError::MathOverflow)?;

    // Batch admission: join the open batch or open the next one
    let interval = ctx.accounts.game_state.batch_interval;
    let is_fresh = ctx.accounts.batch.opens_at == 0 && ctx.accounts.batch.guess_count == 0;
    if is_fresh {
        let game_state = &ctx.accounts.game_state;
        require!(batch_id == game_state.batch_count, GameError::InvalidBatch);
        require!(
            !game_state.has_open_batch || now > game_state.open_batch_closes_at,
            GameError::InvalidBatch
        );

        let closes_at = now.checked_add(interval).ok_or(GameError::MathOverflow)?;
        let batch = &mut ctx.accounts.batch;
        batch.id = batch_id;
        batch.opens_at = now;
        batch.closes_at = closes_at;
        batch.state = BatchState::Open;
        batch.guess_count = 0;
        batch.draw_slot = 0;
        batch.secret_round = ctx.accounts.secret_vault.round;
        batch.winner = None;
        batch.bump = ctx.bumps.batch;

        let game_state = &mut ctx.accounts.game_state;
        game_state.batch_count = game_state
            .batch_count
            .checked_add(1)
            .ok_or(GameError::MathOverflow)?;
        if interval > 0 {
            game_state.has_open_batch = true;
            game_state.open_batch_id = batch_id;
            game_state.open_batch_closes_at = closes_at;
        }

        emit!(BatchOpened {
            id: batch_id,
            opens_at: now,
            closes_at,
        });
    } else {
        require!(
            ctx.accounts.batch.accepts_guesses(now),
            GameError::BatchClosed
        );
    }

    let sequence = ctx.accounts.batch.guess_count;
    let chance_bps = chance::guess_chance_bps(ctx.accounts.game_state.guesses_this_round);

    let record = &mut ctx.accounts.guess_record;
    record.player = player_key;
    record.batch_id = batch_id;
    record.sequence = sequence;
    record.submitted_at = now;
    record.chance_bps = chance_bps;
    record.resolved = false;
    record.won = false;
    record.guess = guess.clone();
    record.bump = ctx.bumps.guess_record;

    let batch = &mut ctx.accounts.batch;
    batch.guess_count = sequence.checked_add(1).ok_or(GameError::MathOverflow)?;

    let game_state = &mut ctx.accounts.game_state;
    game_state.total_guesses = game_state
        .total_guesses
        .checked_add(1)
        .ok_or(GameError::MathOverflow)?;
    game_state.guesses_this_round = game_state
        .guesses_this_round
        .checked_add(1)
        .ok_or(GameError::MathOverflow)?;

    emit!(GuessSubmitted {
        player: player_key,
        batch_id,
        sequence,
        chance_bps,
    });

    // Single-step mode: the singleton batch resolves right here. Chance
    // draws are batched-mode only; any randomness visible now existed
    // before submission and could be ground by the submitter.
    if interval == 0 {
        let exact = ctx.accounts.secret_vault.verify(guess.as_bytes());

        let record = &mut ctx.accounts.guess_record;
        record.resolved = true;
        record.won = exact;

        let batch = &mut ctx.accounts.batch;
        batch.state = BatchState::Closed;
        if exact {
            batch.winner = Some(player_key);
        }

        emit!(GuessResolved {
            player: player_key,
            batch_id,
            sequence,
            won: exact,
            exact_match: exact,
        });

        if exact {
            let winner_info = ctx.accounts.player.to_account_info();
            award_jackpot(
                &mut ctx.accounts.game_state,
                &mut ctx.accounts.secret_vault,
                &winner_info,
                player_key,
                &guess,
            )?;
        }

        emit!(BatchResolved {
            id: batch_id,
            winner: ctx.accounts.batch.winner,
        });
    }

    Ok(())
}
