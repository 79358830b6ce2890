pub mod rng;
pub mod text;
pub mod vector;
