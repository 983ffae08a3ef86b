use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::constants::{BPS_SCALE, SLOT_HASH_WINDOW};
use crate::errors::GameError;

/// Chance-weight policy, in basis points of a win per draw.
///
/// A flat floor plus a slow ramp over guesses submitted against the current
/// secret: every guess that fails to crack the word makes the round slightly
/// more likely to end by draw, capped at 1%. Replayable from `GameState`
/// alone; the value is snapshotted into each record at submission.
pub const CHANCE_BASE_BPS: u16 = 10;
pub const CHANCE_STEP_GUESSES: u64 = 25;
pub const CHANCE_CAP_BPS: u16 = 100;

pub fn guess_chance_bps(guesses_this_round: u64) -> u16 {
    let ramp = guesses_this_round / CHANCE_STEP_GUESSES;
    let bps = (CHANCE_BASE_BPS as u64).saturating_add(ramp);
    bps.min(CHANCE_CAP_BPS as u64) as u16
}

/// Derives the batch's draw seed from the SlotHashes sysvar.
///
/// Layout of the sysvar data: little-endian u64 entry count, then
/// `(u64 slot, [u8;32] hash)` entries, newest first. The draw slot was
/// fixed when the batch sealed, after every guess was admitted, so no
/// submitter could know the hash it resolves to. A skipped or aged-out draw
/// slot falls back to the newest entry, which still postdates every guess.
pub fn derive_draw_seed(
    slot_hashes_data: &[u8],
    draw_slot: u64,
    batch_id: u64,
    secret_round: u64,
) -> Result<[u8; 32]> {
    require!(slot_hashes_data.len() >= 8, GameError::SlotHashNotFound);
    let count =
        (u64::from_le_bytes(slot_hashes_data[0..8].try_into().unwrap()) as usize).min(SLOT_HASH_WINDOW);
    require!(count > 0, GameError::SlotHashNotFound);

    let mut chosen: Option<[u8; 32]> = None;
    for i in 0..count {
        let off = 8 + i * 40;
        if off + 40 > slot_hashes_data.len() {
            break;
        }
        let slot = u64::from_le_bytes(slot_hashes_data[off..off + 8].try_into().unwrap());
        if slot == draw_slot {
            chosen = Some(slot_hashes_data[off + 8..off + 40].try_into().unwrap());
            break;
        }
    }
    let hash: [u8; 32] = match chosen {
        Some(h) => h,
        None => {
            require!(slot_hashes_data.len() >= 48, GameError::SlotHashNotFound);
            slot_hashes_data[16..48].try_into().unwrap()
        }
    };

    Ok(keccak::hashv(&[
        &hash,
        &draw_slot.to_le_bytes(),
        &batch_id.to_le_bytes(),
        &secret_round.to_le_bytes(),
    ])
    .to_bytes())
}

/// One roll per guess, keyed by the guess's sequence inside the batch.
pub fn chance_roll(seed: &[u8; 32], sequence: u32) -> u16 {
    let digest = keccak::hashv(&[seed, &sequence.to_le_bytes()]).to_bytes();
    let raw = u32::from_le_bytes(digest[0..4].try_into().unwrap());
    (raw % BPS_SCALE as u32) as u16
}

pub fn wins_draw(seed: &[u8; 32], sequence: u32, chance_bps: u16) -> bool {
    chance_roll(seed, sequence) < chance_bps
}

/// Deterministic winner selection for a sealed batch.
///
/// `entries[i]` is `(exact_match, chance_bps)` for the guess with sequence
/// `i`. The first exact match in ingestion order wins outright; otherwise
/// the first successful chance draw wins. Returns `(sequence, exact)`.
pub fn select_winner(entries: &[(bool, u16)], seed: &[u8; 32]) -> Option<(usize, bool)> {
    if let Some(i) = entries.iter().position(|(exact, _)| *exact) {
        return Some((i, true));
    }
    entries
        .iter()
        .enumerate()
        .position(|(i, (_, chance))| wins_draw(seed, i as u32, *chance))
        .map(|i| (i, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sysvar_data(entries: &[(u64, [u8; 32])]) -> Vec<u8> {
        let mut data = (entries.len() as u64).to_le_bytes().to_vec();
        for (slot, hash) in entries {
            data.extend_from_slice(&slot.to_le_bytes());
            data.extend_from_slice(hash);
        }
        data
    }

    #[test]
    fn chance_ramps_and_caps() {
        assert_eq!(guess_chance_bps(0), 10);
        assert_eq!(guess_chance_bps(24), 10);
        assert_eq!(guess_chance_bps(25), 11);
        assert_eq!(guess_chance_bps(250), 20);
        assert_eq!(guess_chance_bps(1_000_000), 100);
    }

    #[test]
    fn draw_is_deterministic() {
        let data = sysvar_data(&[(105, [3u8; 32]), (104, [2u8; 32])]);
        let a = derive_draw_seed(&data, 104, 7, 1).unwrap();
        let b = derive_draw_seed(&data, 104, 7, 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(chance_roll(&a, 0), chance_roll(&b, 0));
    }

    #[test]
    fn seed_binds_batch_and_round() {
        let data = sysvar_data(&[(104, [2u8; 32])]);
        let a = derive_draw_seed(&data, 104, 7, 1).unwrap();
        let b = derive_draw_seed(&data, 104, 8, 1).unwrap();
        let c = derive_draw_seed(&data, 104, 7, 2).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn missing_slot_falls_back_to_newest() {
        let data = sysvar_data(&[(200, [9u8; 32]), (199, [8u8; 32])]);
        // Slot 150 aged out; the newest entry (slot 200) is used instead.
        let seed = derive_draw_seed(&data, 150, 1, 1).unwrap();
        let expected = keccak::hashv(&[
            &[9u8; 32],
            &150u64.to_le_bytes(),
            &1u64.to_le_bytes(),
            &1u64.to_le_bytes(),
        ])
        .to_bytes();
        assert_eq!(seed, expected);
    }

    #[test]
    fn empty_sysvar_is_rejected() {
        assert!(derive_draw_seed(&[], 1, 1, 1).is_err());
        assert!(derive_draw_seed(&0u64.to_le_bytes(), 1, 1, 1).is_err());
    }

    #[test]
    fn exact_match_beats_every_draw() {
        let seed = [0xAB; 32];
        let entries = vec![(false, 10_000u16), (true, 0), (true, 10_000)];
        assert_eq!(select_winner(&entries, &seed), Some((1, true)));
    }

    #[test]
    fn first_successful_draw_wins_in_order() {
        let seed = [0xCD; 32];
        // Certain draws: the earliest sequence must take it.
        let entries = vec![(false, 10_000u16), (false, 10_000)];
        assert_eq!(select_winner(&entries, &seed), Some((0, false)));
    }

    #[test]
    fn zero_chance_never_wins() {
        let seed = [0xEF; 32];
        let entries = vec![(false, 0u16); 64];
        assert_eq!(select_winner(&entries, &seed), None);
    }

    #[test]
    fn draw_rate_tracks_the_weight() {
        // ~1% weight over many rolls should land well inside [0.2%, 5%].
        let seed = [0x11; 32];
        let wins = (0..20_000u32)
            .filter(|i| wins_draw(&seed, *i, 100))
            .count();
        assert!(wins > 40 && wins < 1_000, "wins={wins}");
    }
}
