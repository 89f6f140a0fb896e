//! Player and team balancing engine
//!
//! - `player`: player value type and ability score
//! - `team`: team roster and roster statistics
//! - `roster`: the `League` session enforcing league-wide rules
//! - `balancer`: greedy redistribution of the pool across teams
//! - `fairness`: per-team and league fairness report
//! - `seed`: the default pool and the fairness calibration constant

pub mod balancer;
pub mod fairness;
pub mod player;
pub mod roster;
pub mod seed;
pub mod team;


pub use balancer::optimize_teams;
pub use fairness::{fairness_report, fairness_score, FairnessReport, TeamFairness};
pub use player::{Player, EXPERIENCE_BONUS};
pub use roster::League;
pub use seed::{high_discrepancy, seed_players};
pub use team::Team;
