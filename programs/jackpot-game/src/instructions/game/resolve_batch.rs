use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::{SEED_BATCH, SEED_GAME_STATE, SEED_GUESS, SEED_SECRET_VAULT};
use crate::errors::GameError;
use crate::events::{BatchResolved, GuessResolved};
use crate::instructions::game::payout::award_jackpot;
use crate::state::{Batch, BatchState, GameState, GuessRecord, SecretVault};
use crate::utils::chance;

#[derive(Accounts)]
#[instruction(batch_id: u64)]
pub struct ResolveBatch<'info> {
    /// Permissionless crank
    pub cranker: Signer<'info>,

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
        mut,
        seeds = [SEED_BATCH, batch_id.to_le_bytes().as_ref()],
        bump = batch.bump
    )]
    pub batch: Box<Account<'info, Batch>>,

    /// CHECK: Address-checked SlotHashes sysvar; raw data is parsed manually
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Resolves a sealed batch. Remaining accounts carry `[guess_record,
/// player_wallet]` pairs for every guess in sequence order; the handler
/// re-derives each record PDA so nothing forged or out of order gets in.
///
/// First exact match in ingestion order wins; with no exact match, each
/// guess rolls against its snapshotted chance weight using the seed derived
/// from the slot hash fixed at seal time. Resolution is a pure function of
/// the batch's guess list and that seed.
pub fn resolve_batch<'info>(
    ctx: Context<'_, '_, '_, 'info, ResolveBatch<'info>>,
    batch_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let batch = &mut ctx.accounts.batch;

    require!(
        batch.state == BatchState::Resolving,
        GameError::BatchNotReady
    );
    require!(clock.slot >= batch.draw_slot, GameError::BatchNotReady);

    let expected = batch.guess_count as usize;
    require!(
        ctx.remaining_accounts.len() == expected * 2,
        GameError::InvalidBatch
    );

    // Pass 1: authenticate and load every record in sequence order
    let mut records: Vec<GuessRecord> = Vec::with_capacity(expected);
    for i in 0..expected {
        let record_info = &ctx.remaining_accounts[i * 2];
        let wallet_info = &ctx.remaining_accounts[i * 2 + 1];

        require!(record_info.owner == &crate::ID, GameError::Unauthorized);
        let record = {
            let data = record_info.try_borrow_data()?;
            GuessRecord::try_deserialize(&mut &data[..])?
        };

        let derived = Pubkey::create_program_address(
            &[
                SEED_GUESS,
                &batch_id.to_le_bytes(),
                record.player.as_ref(),
                &[record.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| GameError::InvalidBatch)?;
        require!(record_info.key() == derived, GameError::InvalidBatch);
        require!(record.batch_id == batch.id, GameError::InvalidBatch);
        require!(record.sequence as usize == i, GameError::InvalidBatch);
        require!(!record.resolved, GameError::AlreadyResolved);
        require!(wallet_info.key() == record.player, GameError::InvalidBatch);

        records.push(record);
    }

    // Guesses resolve against whatever secret is active now, never against
    // a replaced one.
    let entries: Vec<(bool, u16)> = records
        .iter()
        .map(|r| {
            (
                ctx.accounts.secret_vault.verify(r.guess.as_bytes()),
                r.chance_bps,
            )
        })
        .collect();

    let slot_hashes_data = ctx.accounts.slot_hashes.try_borrow_data()?;
    let seed = chance::derive_draw_seed(
        &slot_hashes_data,
        batch.draw_slot,
        batch.id,
        batch.secret_round,
    )?;
    drop(slot_hashes_data);

    let winner = chance::select_winner(&entries, &seed);

    // Pass 2: write every outcome back in place
    for (i, record) in records.iter_mut().enumerate() {
        record.resolved = true;
        record.won = matches!(winner, Some((w, _)) if w == i);

        let record_info = &ctx.remaining_accounts[i * 2];
        let mut data = record_info.try_borrow_mut_data()?;
        let mut serialized: Vec<u8> = Vec::new();
        record.try_serialize(&mut serialized)?;
        require!(serialized.len() <= data.len(), GameError::InvalidBatch);
        data[..serialized.len()].copy_from_slice(&serialized);

        emit!(GuessResolved {
            player: record.player,
            batch_id: batch.id,
            sequence: record.sequence,
            won: record.won,
            exact_match: matches!(winner, Some((w, true)) if w == i),
        });
    }

    batch.state = BatchState::Closed;

    if let Some((w, _)) = winner {
        let winner_key = records[w].player;
        batch.winner = Some(winner_key);
        let wallet_info = &ctx.remaining_accounts[w * 2 + 1];
        award_jackpot(
            &mut ctx.accounts.game_state,
            &mut ctx.accounts.secret_vault,
            wallet_info,
            winner_key,
            &records[w].guess,
        )?;
    }

    emit!(BatchResolved {
        id: ctx.accounts.batch.id,
        winner: ctx.accounts.batch.winner,
    });

    Ok(())
}
