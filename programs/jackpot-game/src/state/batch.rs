use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Open,
    Resolving,
    Closed,
}

/// A time-boxed window of guesses resolved together.
///
/// Lifecycle: Open -> Resolving -> Closed. With `batch_interval == 0` the
/// batch is a singleton (`closes_at == opens_at`) that opens, admits one
/// guess and closes inside a single transaction.
#[account]
pub struct Batch {
    pub id: u64,
    pub opens_at: i64,
    pub closes_at: i64,
    pub state: BatchState,
    pub guess_count: u32,
    /// Slot whose hash seeds the chance draw; fixed when the batch seals
    pub draw_slot: u64,
    /// Secret round active when the batch opened
    pub secret_round: u64,
    pub winner: Option<Pubkey>,
    pub bump: u8,
}

impl Batch {
    // 8 + 8 + 8 + 8 + 1 + 4 + 8 + 8 + (1 + 32) + 1
    pub const LEN: usize = 8 + 8 + 8 + 8 + 1 + 4 + 8 + 8 + 33 + 1;

    /// A guess at `closes_at` exactly is still in the window; one unit later
    /// belongs to the next batch.
    pub fn accepts_guesses(&self, now: i64) -> bool {
        self.state == BatchState::Open && now <= self.closes_at
    }

    pub fn ready_to_seal(&self, now: i64) -> bool {
        self.state == BatchState::Open && now > self.closes_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(opens_at: i64, interval: i64) -> Batch {
        Batch {
            id: 0,
            opens_at,
            closes_at: opens_at + interval,
            state: BatchState::Open,
            guess_count: 0,
            draw_slot: 0,
            secret_round: 1,
            winner: None,
            bump: 255,
        }
    }

    #[test]
    fn window_membership_is_inclusive_of_close() {
        let b = batch(1_000, 60);
        assert!(b.accepts_guesses(1_000));
        assert!(b.accepts_guesses(1_059));
        assert!(b.accepts_guesses(1_060));
        assert!(!b.accepts_guesses(1_061));
    }

    #[test]
    fn sealing_waits_for_the_window_to_pass() {
        let b = batch(1_000, 60);
        assert!(!b.ready_to_seal(1_060));
        assert!(b.ready_to_seal(1_061));
    }

    #[test]
    fn closed_batch_rejects_guesses() {
        let mut b = batch(1_000, 60);
        b.state = BatchState::Closed;
        assert!(!b.accepts_guesses(1_010));
    }
}
