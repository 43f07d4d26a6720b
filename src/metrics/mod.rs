//! In-session round statistics. Nothing here is persisted across runs.

use std::time::{Duration, Instant};

pub struct SessionStats {
    round_start: Instant,
    elapsed: Duration,
    pub best_score: u32,
    pub rounds_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            rounds_played: 0,
        }
    }

    /// Recompute the elapsed round time. Called once per rendered frame.
    pub fn refresh(&mut self) {
        self.elapsed = self.round_start.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.rounds_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut stats = SessionStats::new();

        stats.on_round_over(10);
        assert_eq!(stats.best_score, 10);
        assert_eq!(stats.rounds_played, 1);

        stats.on_round_over(5);
        assert_eq!(stats.best_score, 10); // Should not decrease

        stats.on_round_over(15);
        assert_eq!(stats.best_score, 15);
        assert_eq!(stats.rounds_played, 3);
    }

    #[test]
    fn test_round_start_resets_clock() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(30));
        stats.refresh();
        assert!(stats.elapsed.as_millis() >= 30);

        stats.on_round_start();
        assert_eq!(stats.elapsed, Duration::ZERO);
    }
}
