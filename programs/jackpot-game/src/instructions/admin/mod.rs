pub mod add_hint;
pub mod emit_game_update;
pub mod initialize;
pub mod set_batch_interval;
pub mod set_costs;
pub mod set_pause;
pub mod set_secret;
pub mod transfer_admin;

pub use add_hint::*;
pub use emit_game_update::*;
pub use initialize::*;
pub use set_batch_interval::*;
pub use set_costs::*;
pub use set_pause::*;
pub use set_secret::*;
pub use transfer_admin::*;
