//! Output models used for printing and JSON serialization.

pub mod output;

pub use output::{HeightBucket, PlayerView, TeamView};
