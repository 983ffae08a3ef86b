use anchor_lang::prelude::*;

use crate::errors::GameError;
use crate::events::JackpotWon;
use crate::state::{GameState, SecretVault};

/// Pays the entire current pool to the winner, rolls the next-round seed
/// into the pool and clears the commitment so the operator has to commit a
/// fresh secret before the game continues.
///
/// The pool lamports live on the game-state account itself, which is
/// program-owned, so the debit is plain lamport arithmetic.
pub(crate) fn award_jackpot<'info>(
    game_state: &mut Account<'info, GameState>,
    secret_vault: &mut Account<'info, SecretVault>,
    winner_info: &AccountInfo<'info>,
    winner: Pubkey,
    winning_guess: &str,
) -> Result<u64> {
    let prize = game_state.take_jackpot();
    game_state.total_winners = game_state
        .total_winners
        .checked_add(1)
        .ok_or(GameError::MathOverflow)?;

    secret_vault.is_set = false;

    if prize > 0 {
        let game_info = game_state.to_account_info();
        **game_info.try_borrow_mut_lamports()? -= prize;
        **winner_info.try_borrow_mut_lamports()? += prize;
    }

    emit!(JackpotWon {
        winner,
        amount: prize,
        guess: winning_guess.to_string(),
    });
    msg!("Jackpot of {} lamports paid to {}", prize, winner);

    Ok(prize)
}
