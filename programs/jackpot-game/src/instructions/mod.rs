pub mod admin;
pub mod game;
pub mod hints;
pub mod market;

pub use admin::*;
pub use game::*;
pub use hints::*;
pub use market::*;
