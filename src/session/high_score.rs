//! High-score storage seam.
//!
//! The engine does not own persistence. A collaborator supplies a store; the
//! session reads it once when created and writes it every time the score
//! climbs past the remembered best.

/// Get/set access to one externally stored integer.
pub trait HighScoreStore {
    /// Current stored high score.
    fn load(&self) -> u64;

    /// Replace the stored high score.
    fn store(&mut self, score: u64);
}

/// Process-local store. Forgets everything when dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    best: u64,
}

impl MemoryHighScore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously saved value.
    #[must_use]
    pub fn with_value(best: u64) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u64 {
        self.best
    }

    fn store(&mut self, score: u64) {
        self.best = score;
    }
}
