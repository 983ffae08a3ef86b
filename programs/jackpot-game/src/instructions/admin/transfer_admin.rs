use anchor_lang::prelude::*;

use crate::constants::SEED_GAME_STATE;
use crate::errors::GameError;
use crate::events::AdminTransferred;
use crate::state::GameState;

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub current_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == current_admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,
}

pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let game_state = &mut ctx.accounts.game_state;
    let old_admin = game_state.admin;
    game_state.admin = new_admin;

    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });
    msg!("Admin transferred from {} to {}", old_admin, new_admin);

    Ok(())
}
