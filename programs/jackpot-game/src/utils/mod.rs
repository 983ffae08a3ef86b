pub mod chance;
pub mod curve;
