//! Running score and high score
//!
//! The score is a float that grows with survival time and destroyed
//! asteroids and shrinks with every shot. It is shown and persisted as
//! `trunc(score) * 100`.

use crate::config::GameConfig;
use crate::consts::SCORE_DISPLAY_SCALE;
use crate::persistence::{ScoreLogError, ScoreStore};

#[derive(Debug, Clone)]
pub struct Scoreboard {
    score: f32,
    /// Best persisted score (already display-scaled); `None` until one exists
    high_score: Option<u64>,
    asteroid_value: f32,
    time_value: f32,
    shot_penalty: f32,
}

impl Scoreboard {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0.0,
            high_score: None,
            asteroid_value: config.asteroid_value,
            time_value: config.time_value,
            shot_penalty: config.laser_penalty,
        }
    }

    /// Award an asteroid kill; smaller asteroids are worth more
    pub fn add_size(&mut self, radius: f32) {
        self.score += self.asteroid_value / radius;
    }

    /// Award survival time
    pub fn add_time(&mut self, dt: f32) {
        self.score += self.time_value * dt;
    }

    /// Charge for one shot (may take the score below zero)
    pub fn remove_shoot(&mut self) {
        self.score -= self.shot_penalty;
    }

    pub fn reset(&mut self) {
        self.score = 0.0;
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn high_score(&self) -> Option<u64> {
        self.high_score
    }

    /// Score as shown on the HUD and written to the log
    pub fn display_score(&self) -> i64 {
        self.score.trunc() as i64 * SCORE_DISPLAY_SCALE
    }

    /// True while the current run beats every persisted score
    pub fn is_new_high(&self) -> bool {
        self.display_score() > self.high_score.map_or(0, |h| h as i64)
    }

    /// Reload the high score from the store
    ///
    /// An unreadable store counts as having no prior scores.
    pub fn load(&mut self, store: &dyn ScoreStore) {
        match store.load_all() {
            Ok(scores) => {
                if let Some(best) = scores.iter().copied().max() {
                    self.high_score = Some(self.high_score.map_or(best, |h| h.max(best)));
                }
                log::info!(
                    "Loaded {} past scores, high score {:?}",
                    scores.len(),
                    self.high_score
                );
            }
            Err(e) => log::warn!("{e}; treating as no prior scores"),
        }
    }

    /// Append the current score if positive
    ///
    /// Returns the value written, if any.
    pub fn save(&self, store: &mut dyn ScoreStore) -> Result<Option<u64>, ScoreLogError> {
        if self.score <= 0.0 {
            log::debug!("Not saving non-positive score {}", self.score);
            return Ok(None);
        }
        let value = self.display_score().max(0) as u64;
        store.append(value)?;
        log::info!("Saved score {value}");
        Ok(Some(value))
    }

    /// HUD line for the current score
    pub fn score_text(&self) -> String {
        format!("Score: {:09}", self.display_score())
    }

    /// HUD line for the high score
    pub fn high_score_text(&self) -> String {
        format!("Highscore: {:09}", self.high_score.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryScores;

    fn board() -> Scoreboard {
        Scoreboard::new(&GameConfig::default())
    }

    #[test]
    fn test_score_moves_in_the_right_direction() {
        let mut sb = board();
        sb.add_size(7.0);
        let after_kill = sb.score();
        assert!(after_kill > 0.0);
        assert!((after_kill - 100.0 / 7.0).abs() < 1e-4);

        sb.add_time(0.5);
        assert!(sb.score() > after_kill);

        let before_shot = sb.score();
        sb.remove_shoot();
        assert!(sb.score() < before_shot);
    }

    #[test]
    fn test_smaller_asteroids_are_worth_more() {
        let mut small = board();
        let mut big = board();
        small.add_size(7.0);
        big.add_size(16.0);
        assert!(small.score() > big.score());
    }

    #[test]
    fn test_display_truncates_then_scales() {
        let mut sb = board();
        sb.add_time(1.27); // 12.7 points
        assert_eq!(sb.display_score(), 1200);
        assert_eq!(sb.score_text(), "Score: 000001200");
    }

    #[test]
    fn test_save_skips_non_positive() {
        let mut store = MemoryScores::new();
        let mut sb = board();
        assert_eq!(sb.save(&mut store).unwrap(), None);

        sb.remove_shoot();
        assert_eq!(sb.save(&mut store).unwrap(), None);
        assert!(store.entries.is_empty());
    }

    #[test]
    fn test_save_appends_one_scaled_line() {
        let mut store = MemoryScores::new();
        let mut sb = board();
        sb.add_time(4.25); // 42.5 points
        assert_eq!(sb.save(&mut store).unwrap(), Some(4200));
        assert_eq!(store.entries, vec![4200]);
    }

    #[test]
    fn test_load_takes_maximum() {
        let store = MemoryScores {
            entries: vec![300, 9100, 1200],
        };
        let mut sb = board();
        assert_eq!(sb.high_score(), None);
        sb.load(&store);
        assert_eq!(sb.high_score(), Some(9100));
        assert_eq!(sb.high_score_text(), "Highscore: 000009100");
    }

    #[test]
    fn test_new_high_detection() {
        let store = MemoryScores { entries: vec![500] };
        let mut sb = board();
        sb.load(&store);
        sb.add_time(0.5); // 5 points -> 500
        assert!(!sb.is_new_high());
        sb.add_time(0.1);
        assert!(sb.is_new_high());
    }
}
