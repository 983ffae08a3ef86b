use anchor_lang::prelude::*;

use crate::constants::BPS_SCALE;

/// Singleton game configuration, counters and the jackpot pool.
///
/// The account itself holds the pool lamports; `jackpot_lamports` and
/// `next_jackpot_lamports` track the logical split on top of the
/// rent-exempt floor paid at initialization.
#[account]
pub struct GameState {
    /// Operator allowed to commit secrets, add hints and tune costs
    pub admin: Pubkey,

    /// Token account that collects guess and hint payments
    pub treasury: Pubkey,

    /// The external game-token mint. Never minted or burned here.
    pub token_mint: Pubkey,

    /// Cost of one guess, in token base units
    pub guess_cost: u64,
    /// Cost of one hint, in token base units
    pub hint_cost: u64,

    /// Seconds a batch stays open. 0 = single-step mode.
    pub batch_interval: i64,

    /// Share of every jackpot deposit that seeds the next round
    pub rollover_bps: u64,

    /// Paid out entirely on a win
    pub jackpot_lamports: u64,
    /// Rolls into `jackpot_lamports` when a round is won
    pub next_jackpot_lamports: u64,

    /// Stats, maintained incrementally
    pub total_guesses: u64,
    pub guesses_this_round: u64,
    pub unique_players: u64,
    pub total_winners: u64,

    /// Batch bookkeeping
    pub batch_count: u64,
    pub open_batch_id: u64,
    pub open_batch_closes_at: i64,
    pub has_open_batch: bool,

    pub hint_count: u32,

    pub bump: u8,
}

impl GameState {
    // 8 + 32*3 + 8*13 + 1 + 4 + 1
    pub const LEN: usize = 8 + 96 + 104 + 1 + 4 + 1;

    /// Splits a jackpot deposit between the current pool and the seed for
    /// the next round. `rollover_bps` must be <= BPS_SCALE.
    pub fn split_deposit(&self, amount: u64) -> (u64, u64) {
        let to_next = ((amount as u128) * (self.rollover_bps as u128) / (BPS_SCALE as u128)) as u64;
        (amount - to_next, to_next)
    }

    /// Credits a deposit to the pool, returning the (current, next) portions.
    pub fn credit_jackpot(&mut self, amount: u64) -> Result<(u64, u64)> {
        let (to_current, to_next) = self.split_deposit(amount);
        self.jackpot_lamports = self
            .jackpot_lamports
            .checked_add(to_current)
            .ok_or(crate::errors::GameError::MathOverflow)?;
        self.next_jackpot_lamports = self
            .next_jackpot_lamports
            .checked_add(to_next)
            .ok_or(crate::errors::GameError::MathOverflow)?;
        Ok((to_current, to_next))
    }

    /// Empties the current pool and rolls the next-round seed into it.
    /// Returns the amount owed to the winner.
    pub fn take_jackpot(&mut self) -> u64 {
        let prize = self.jackpot_lamports;
        self.jackpot_lamports = self.next_jackpot_lamports;
        self.next_jackpot_lamports = 0;
        prize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rollover_bps: u64) -> GameState {
        GameState {
            admin: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            guess_cost: 0,
            hint_cost: 0,
            batch_interval: 0,
            rollover_bps,
            jackpot_lamports: 0,
            next_jackpot_lamports: 0,
            total_guesses: 0,
            guesses_this_round: 0,
            unique_players: 0,
            total_winners: 0,
            batch_count: 0,
            open_batch_id: 0,
            open_batch_closes_at: 0,
            has_open_batch: false,
            hint_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn deposit_split_is_exact() {
        let g = game(1_000); // 10% seeds the next round
        let (current, next) = g.split_deposit(1_000_000);
        assert_eq!(current, 900_000);
        assert_eq!(next, 100_000);
        assert_eq!(current + next, 1_000_000);
    }

    #[test]
    fn deposit_split_rounds_toward_current() {
        let g = game(1_000);
        let (current, next) = g.split_deposit(9);
        assert_eq!(next, 0);
        assert_eq!(current, 9);
    }

    #[test]
    fn winning_rolls_next_into_current() {
        let mut g = game(1_000);
        g.credit_jackpot(1_000_000).unwrap();
        let prize = g.take_jackpot();
        assert_eq!(prize, 900_000);
        assert_eq!(g.jackpot_lamports, 100_000);
        assert_eq!(g.next_jackpot_lamports, 0);
    }

    #[test]
    fn funding_is_additive() {
        let mut g = game(0);
        g.credit_jackpot(10).unwrap();
        g.credit_jackpot(20).unwrap();
        assert_eq!(g.jackpot_lamports, 30);
    }
}
