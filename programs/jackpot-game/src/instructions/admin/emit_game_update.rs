use anchor_lang::prelude::*;

use crate::constants::{MAX_ANNOUNCEMENT_LEN, SEED_GAME_STATE};
use crate::errors::GameError;
use crate::events::SocialAnnouncement;
use crate::state::GameState;

#[derive(Accounts)]
pub struct EmitGameUpdate<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEED_GAME_STATE],
        bump = game_state.bump,
        constraint = game_state.admin == admin.key() @ GameError::Unauthorized
    )]
    pub game_state: Account<'info, GameState>,
}

/// Operator announcement channel consumed by the off-chain social agent.
pub fn emit_game_update(ctx: Context<EmitGameUpdate>, kind: String, message: String) -> Result<()> {
    require!(
        kind.len() <= MAX_ANNOUNCEMENT_LEN && message.len() <= MAX_ANNOUNCEMENT_LEN,
        GameError::AnnouncementTooLong
    );

    msg!("Game update from {}: {}", ctx.accounts.admin.key(), kind);
    emit!(SocialAnnouncement { kind, message });

    Ok(())
}
