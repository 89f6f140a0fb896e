//! League-wide settings.

/// Roster cap used when none is configured.
pub const DEFAULT_MAX_PLAYERS_PER_TEAM: usize = 11;

/// Settings a [`League`](crate::league::League) is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueConfig {
    pub max_players_per_team: usize,
}

impl LeagueConfig {
    pub fn new(max_players_per_team: usize) -> Self {
        Self {
            max_players_per_team: max_players_per_team.max(1),
        }
    }

    /// `ceil(pool_size / max_players_per_team)`.
    pub fn max_teams(&self, pool_size: usize) -> usize {
        pool_size.div_ceil(self.max_players_per_team)
    }
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PLAYERS_PER_TEAM)
    }
}
