use anchor_lang::prelude::*;

pub const SEED_GAME_STATE: &[u8] = b"game_state";
pub const SEED_SECRET_VAULT: &[u8] = b"secret_vault";
pub const SEED_MARKET: &[u8] = b"bonding_market";
pub const SEED_MARKET_VAULT: &[u8] = b"market_vault";
pub const SEED_BATCH: &[u8] = b"batch";
pub const SEED_GUESS: &[u8] = b"guess";
pub const SEED_PLAYER: &[u8] = b"player";
pub const SEED_HINT_RECEIPT: &[u8] = b"hint_receipt";

pub const DISCRIMINATOR_SIZE: usize = 8;

pub const MAX_GUESS_LEN: usize = 64;
pub const MAX_ANNOUNCEMENT_LEN: usize = 200;

pub const BPS_SCALE: u64 = 10_000;

/// Slots between sealing a batch and the chance draw. The slot hash used as
/// the draw seed must not exist yet while guesses can still be admitted.
pub const DRAW_DELAY_SLOTS: u64 = 5;

/// SlotHashes retains the most recent 512 entries.
pub const SLOT_HASH_WINDOW: usize = 512;
