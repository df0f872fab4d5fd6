//! Game session: move pipeline, events, high score, snapshots.
//!
//! This is the layer a UI talks to. Everything below it is passive.

pub mod events;
pub mod game;
pub mod high_score;
pub mod snapshot;

pub use events::SessionEvent;
pub use game::{GameSession, PlacementOutcome, SessionBuilder, SessionStatus};
pub use high_score::{HighScoreStore, MemoryHighScore};
pub use snapshot::{OfferedPiece, SessionSnapshot};
