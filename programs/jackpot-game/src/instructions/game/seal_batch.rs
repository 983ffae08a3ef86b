use anchor_lang::prelude::*;

use crate::constants::{DRAW_DELAY_SLOTS, SEED_BATCH, SEED_GAME_STATE};
use crate::errors::GameError;
use crate::events::{BatchResolved, BatchSealed};
use crate::state::{Batch, BatchState, GameState};

#[derive(Accounts)]
#[instruction(batch_id: u64)]
pub struct SealBatch<'info> {
    /// Permissionless crank; the caller just pays the transaction
    pub cranker: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump
    )]
    pub game_state: Account<'info, GameState>,

    #[account(
        mut,
        seeds = [SEED_BATCH, batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Account<'info, Batch>,
}

/// Moves an expired batch to Resolving and fixes the draw slot. The slot
/// whose hash seeds the chance draw does not exist yet, so nothing submitted
/// into the batch could have been chosen with knowledge of it.
pub fn seal_batch(ctx: Context<SealBatch>, _batch_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let batch = &mut ctx.accounts.batch;

    require!(
        batch.ready_to_seal(clock.unix_timestamp),
        GameError::BatchNotReady
    );

    let game_state = &mut ctx.accounts.game_state;
    if game_state.has_open_batch && game_state.open_batch_id == batch.id {
        game_state.has_open_batch = false;
    }

    // An empty batch has nothing to draw for
    if batch.guess_count == 0 {
        batch.state = BatchState::Closed;
        emit!(BatchResolved {
            id: batch.id,
            winner: None,
        });
        return Ok(());
    }

    batch.state = BatchState::Resolving;
    batch.draw_slot = clock
        .slot
        .checked_add(DRAW_DELAY_SLOTS)
        .ok_or(GameError::MathOverflow)?;

    emit!(BatchSealed {
        id: batch.id,
        draw_slot: batch.draw_slot,
    });

    Ok(())
}
