//! Type-safe wrappers for values entered on the command line.

pub mod height;
pub mod ids;

pub use height::Height;
pub use ids::PlayerNumber;
