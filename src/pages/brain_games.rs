//! Mente Ativa: cognitive games with points, levels and a daily challenge.

use serde::Serialize;
use thiserror::Error;

use crate::models::{DailyChallenge, Game, UserStats, MAX_LEVEL_STARS};
use crate::repository::BrainGamesRepository;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrainGamesError {
    #[error("Game not found: {0}")]
    UnknownGame(String),
}

#[derive(Debug, Serialize)]
pub struct BrainGamesView<'a> {
    pub stats: UserStats,
    pub stars_lit: u32,
    pub stars_total: u32,
    pub challenge: &'a DailyChallenge,
    pub challenge_accepted: bool,
    pub games: &'a [Game],
}

pub struct BrainGamesPage {
    stats: UserStats,
    games: Vec<Game>,
    challenge: DailyChallenge,
    challenge_accepted: bool,
}

impl BrainGamesPage {
    pub fn new(repo: &dyn BrainGamesRepository) -> Self {
        Self {
            stats: repo.user_stats(),
            games: repo.games(),
            challenge: repo.daily_challenge(),
            challenge_accepted: false,
        }
    }

    pub fn stats(&self) -> UserStats {
        self.stats
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn accept_challenge(&mut self) {
        if !self.challenge_accepted {
            tracing::debug!(game = %self.challenge.game, "Daily challenge accepted");
            self.challenge_accepted = true;
        }
    }

    /// Record a finished round. Higher is better; returns whether the
    /// score is a new personal best.
    pub fn record_score(&mut self, game_id: &str, score: u32) -> Result<bool, BrainGamesError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or_else(|| BrainGamesError::UnknownGame(game_id.to_string()))?;

        match game.personal_best {
            Some(best) if best >= score => Ok(false),
            _ => {
                tracing::info!(game = %game.name, score, "New personal best");
                game.personal_best = Some(score);
                Ok(true)
            }
        }
    }

    pub fn view(&self) -> BrainGamesView<'_> {
        BrainGamesView {
            stats: self.stats,
            stars_lit: self.stats.stars_lit(),
            stars_total: MAX_LEVEL_STARS,
            challenge: &self.challenge,
            challenge_accepted: self.challenge_accepted,
            games: &self.games,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureStore;

    #[test]
    fn view_reflects_fixture_stats() {
        let page = BrainGamesPage::new(&FixtureStore);
        let view = page.view();
        assert_eq!(view.stats.points, 1250);
        assert_eq!(view.stars_lit, 5);
        assert_eq!(view.stars_total, 5);
        assert_eq!(view.games.len(), 6);
        assert!(!view.challenge_accepted);
    }

    #[test]
    fn record_score_keeps_highest() {
        let mut page = BrainGamesPage::new(&FixtureStore);
        assert_eq!(page.record_score("1", 30), Ok(false));
        assert_eq!(page.game("1").unwrap().personal_best, Some(45));
        assert_eq!(page.record_score("1", 50), Ok(true));
        assert_eq!(page.game("1").unwrap().personal_best, Some(50));
        assert_eq!(page.record_score("1", 50), Ok(false));
    }

    #[test]
    fn first_score_sets_best() {
        let mut page = BrainGamesPage::new(&FixtureStore);
        assert_eq!(page.record_score("5", 0), Ok(true));
        assert_eq!(page.game("5").unwrap().personal_best, Some(0));
    }

    #[test]
    fn unknown_game_is_error() {
        let mut page = BrainGamesPage::new(&FixtureStore);
        assert_eq!(
            page.record_score("7", 10),
            Err(BrainGamesError::UnknownGame("7".into()))
        );
    }

    #[test]
    fn accepting_challenge_is_idempotent() {
        let mut page = BrainGamesPage::new(&FixtureStore);
        page.accept_challenge();
        page.accept_challenge();
        assert!(page.view().challenge_accepted);
    }
}
