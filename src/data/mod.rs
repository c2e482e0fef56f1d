//! Data generation helpers.

pub mod sample;

pub use sample::generate_answers;
