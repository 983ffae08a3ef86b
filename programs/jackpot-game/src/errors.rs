use anchor_lang::prelude::*;

#[error_code]
pub enum GameError {
    #[msg("Caller lacks the required role.")]
    Unauthorized,
    #[msg("Insufficient token balance or approval for this charge.")]
    PaymentRequired,
    #[msg("Trade size exceeds the market token reserve.")]
    InsufficientReserve,
    #[msg("Offered payment does not cover the quoted price.")]
    InsufficientPayment,
    #[msg("Market base reserve cannot cover the sale proceeds.")]
    InsufficientLiquidity,
    #[msg("The batch is closed to new guesses.")]
    BatchClosed,
    #[msg("The batch is not ready for this transition.")]
    BatchNotReady,
    #[msg("Market trading is paused.")]
    MarketPaused,
    #[msg("Referenced hint or batch does not exist.")]
    NotFound,
    #[msg("No secret is currently committed.")]
    SecretNotSet,
    #[msg("Guess has already been resolved.")]
    AlreadyResolved,
    #[msg("Guess exceeds the maximum length.")]
    GuessTooLong,
    #[msg("Announcement exceeds the maximum length.")]
    AnnouncementTooLong,
    #[msg("Batch id does not match the admissible batch.")]
    InvalidBatch,
    #[msg("Trade amount must be positive.")]
    AmountZero,
    #[msg("Math operation overflow.")]
    MathOverflow,
    #[msg("SlotHashes sysvar is empty or unreadable.")]
    SlotHashNotFound,
}
