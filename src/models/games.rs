use serde::{Deserialize, Serialize};

/// Number of stars on the level display.
pub const MAX_LEVEL_STARS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub personal_best: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub points: u32,
    pub level: u32,
    /// Consecutive days played.
    pub streak: u32,
}

impl UserStats {
    /// Lit stars on the five-star level display.
    pub fn stars_lit(&self) -> u32 {
        self.level.min(MAX_LEVEL_STARS)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub game: String,
    pub description: String,
    pub reward: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_cap_at_five() {
        let stats = UserStats { points: 9000, level: 8, streak: 1 };
        assert_eq!(stats.stars_lit(), 5);
        let stats = UserStats { points: 10, level: 2, streak: 0 };
        assert_eq!(stats.stars_lit(), 2);
    }
}
