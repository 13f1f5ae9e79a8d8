//! Session score and best score
//!
//! The best score survives restarts but only lives in memory; closing the
//! page (or process) forgets it.

/// Running score for the current session plus the best finished session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTracker {
    score: f32,
    top: f32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delta: f32) {
        self.score += delta;
    }

    /// Zero the session score; the best score is kept
    pub fn reset(&mut self) {
        self.score = 0.0;
    }

    /// Fold the finished session into the best score
    pub fn record_session_end(&mut self) {
        self.top = self.top.max(self.score);
    }

    pub fn current(&self) -> f32 {
        self.score
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// Whole points shown in the HUD
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    pub fn display_top(&self) -> u64 {
        self.top.floor() as u64
    }
}

/// HUD text and the score overlay built when the page lacks one
pub mod hud {
    pub const SCORE_ID: &str = "score";
    /// Top-left white label on a translucent panel
    pub const SCORE_STYLE: &str = "position: absolute; top: 10px; left: 10px; \
        color: white; font-size: 20px; background-color: rgba(0, 0, 0, 0.5); \
        padding: 5px;";

    pub fn score_label(score: u64) -> String {
        format!("Score: {}", score)
    }

    pub fn current_score_label(score: u64) -> String {
        format!("Current Score: {}", score)
    }

    pub fn top_score_label(score: u64) -> String {
        format!("Top Score: {}", score)
    }
}
