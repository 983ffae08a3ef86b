pub mod purchase_hint;

pub use purchase_hint::*;
