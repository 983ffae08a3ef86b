use anchor_lang::prelude::*;

/// Per-player counters, created lazily on first interaction.
#[account]
pub struct PlayerState {
    pub player: Pubkey,
    pub guesses_made: u64,
    /// Number of hints this player has purchased; grants cover exactly the
    /// indexes below this watermark
    pub hints_purchased: u32,
    pub bump: u8,
}

impl PlayerState {
    // 8 + 32 + 8 + 4 + 1
    pub const LEN: usize = 8 + 32 + 8 + 4 + 1;

    /// The membership predicate the off-chain hint service trusts.
    /// Pure read; satisfiable only by a confirmed purchase, since
    /// `hints_purchased` moves only in `purchase_hint`.
    pub fn has_hint_access(&self, index: u32) -> bool {
        index < self.hints_purchased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_covers_exactly_the_purchased_prefix() {
        let state = PlayerState {
            player: Pubkey::new_unique(),
            guesses_made: 0,
            hints_purchased: 2,
            bump: 255,
        };
        assert!(state.has_hint_access(0));
        assert!(state.has_hint_access(1));
        assert!(!state.has_hint_access(2));
        assert!(!state.has_hint_access(u32::MAX));
    }

    #[test]
    fn access_is_idempotent_without_a_purchase() {
        let state = PlayerState {
            player: Pubkey::new_unique(),
            guesses_made: 3,
            hints_purchased: 0,
            bump: 255,
        };
        for _ in 0..4 {
            assert!(!state.has_hint_access(0));
        }
    }
}
