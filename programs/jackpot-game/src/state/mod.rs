pub mod batch;
pub mod game;
pub mod guess;
pub mod hint;
pub mod market;
pub mod player;
pub mod secret;

pub use batch::*;
pub use game::*;
pub use guess::*;
pub use hint::*;
pub use market::*;
pub use player::*;
pub use secret::*;
