pub mod fund_jackpot;
pub mod payout;
pub mod resolve_batch;
pub mod seal_batch;
pub mod submit_guess;

pub use fund_jackpot::*;
pub use resolve_batch::*;
pub use seal_batch::*;
pub use submit_guess::*;
