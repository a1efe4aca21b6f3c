pub mod generator;
pub mod laws;
