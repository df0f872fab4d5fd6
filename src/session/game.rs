//! The game session - one game from first deal to game over.
//!
//! `GameSession` owns the board, the piece supply, the RNG, and the score.
//! A move is one transactional step: placement, scoring, line clears, level,
//! refill, and game-over detection all happen inside `attempt_placement`, so
//! no caller ever sees points for an unconfirmed placement or a full line that
//! has not been cleared yet.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::events::SessionEvent;
use super::high_score::{HighScoreStore, MemoryHighScore};
use crate::board::{Board, LineSet};
use crate::core::{
    level_for_score, line_clear_points, placement_points, BoardError, ConfigError, GameRng,
    GameRngState, SessionConfig, SessionError,
};
use crate::shapes::{ShapeCatalog, ShapeId};
use crate::supply::{PieceId, PieceSupply};

/// Whether the session still accepts moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    /// Terminal. Only `reset` leaves this state.
    Ended,
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// The piece that was placed (no longer offered).
    pub piece: PieceId,
    pub shape: ShapeId,
    pub row: usize,
    pub col: usize,

    /// Cells filled by the piece.
    pub blocks_placed: usize,
    pub placement_points: u64,

    /// Rows and columns cleared by this move.
    pub lines_cleared: LineSet,
    pub line_points: u64,

    /// `placement_points + line_points`.
    pub points_awarded: u64,

    /// Score and level after the move.
    pub score: u64,
    pub level: u32,

    pub leveled_up: bool,
    /// A new round of pieces was dealt.
    pub refilled: bool,
    /// The move left no legal placement; the session is now `Ended`.
    pub ended: bool,
    pub new_high_score: bool,
}

/// A single-player game.
///
/// ## Example
///
/// ```
/// use block_blast::core::SessionConfig;
/// use block_blast::session::{GameSession, SessionStatus};
///
/// let mut session = GameSession::new(SessionConfig::default().with_seed(42)).unwrap();
///
/// let piece = session.supply().current()[0].id();
/// let outcome = session.attempt_placement(piece, 0, 0).unwrap();
///
/// assert!(outcome.points_awarded > 0);
/// assert_eq!(session.score(), outcome.score);
/// assert_eq!(session.status(), SessionStatus::Active);
/// ```
pub struct GameSession {
    config: SessionConfig,
    catalog: Arc<ShapeCatalog>,
    starting_board: Board,
    board: Board,
    supply: PieceSupply,
    rng: GameRng,

    score: u64,
    level: u32,
    status: SessionStatus,

    high_score: u64,
    high_score_store: Box<dyn HighScoreStore>,

    events: Vec<SessionEvent>,
}

/// Builder for creating a [`GameSession`].
pub struct SessionBuilder {
    config: SessionConfig,
    catalog: Option<Arc<ShapeCatalog>>,
    starting_board: Option<Board>,
    high_score_store: Option<Box<dyn HighScoreStore>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            catalog: None,
            starting_board: None,
            high_score_store: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.config.grid_size = size;
        self
    }

    pub fn pieces_per_round(mut self, count: usize) -> Self {
        self.config.pieces_per_round = count;
        self
    }

    pub fn level_threshold(mut self, threshold: u64) -> Self {
        self.config.level_threshold = threshold;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Draw from a custom catalog instead of [`ShapeCatalog::standard`].
    pub fn catalog(mut self, catalog: impl Into<Arc<ShapeCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Start (and restart) from a prepared board instead of an empty one.
    ///
    /// The board must match the configured grid size. Rows and columns that
    /// are already full are cleared without scoring before the first deal.
    pub fn starting_board(mut self, board: Board) -> Self {
        self.starting_board = Some(board);
        self
    }

    /// Read and write the high score through `store`.
    pub fn high_score_store(mut self, store: impl HighScoreStore + 'static) -> Self {
        self.high_score_store = Some(Box::new(store));
        self
    }

    /// Validate the configuration and deal the first round.
    pub fn build(self) -> Result<GameSession, SessionError> {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(ShapeCatalog::standard()));
        self.config.validate(&catalog)?;

        let starting_board = match self.starting_board {
            Some(board) if board.size() != self.config.grid_size => {
                return Err(ConfigError::BoardSizeMismatch {
                    expected: self.config.grid_size,
                    found: board.size(),
                }
                .into());
            }
            Some(mut board) => {
                let full = board.detect_completed_lines();
                if !full.is_empty() {
                    board.clear_lines(&full)?;
                    log::debug!("starting board had {} full lines, cleared unscored", full.len());
                }
                board
            }
            None => Board::new(self.config.grid_size),
        };

        let rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let high_score_store = self
            .high_score_store
            .unwrap_or_else(|| Box::new(MemoryHighScore::new()));
        let high_score = high_score_store.load();

        let mut session = GameSession {
            board: starting_board.clone(),
            starting_board,
            supply: PieceSupply::new(),
            rng,
            score: 0,
            level: 1,
            status: SessionStatus::Active,
            high_score,
            high_score_store,
            events: Vec::new(),
            config: self.config,
            catalog,
        };
        session.deal_first_round()?;

        log::debug!(
            "new session: {0}x{0} grid, {1} pieces per round, seed {2}",
            session.config.grid_size,
            session.config.pieces_per_round,
            session.rng.seed()
        );
        Ok(session)
    }
}

impl GameSession {
    /// Create a session with the standard catalog.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        SessionBuilder::new().config(config).build()
    }

    /// Create a session from the three game parameters, seeded from entropy.
    pub fn create(
        grid_size: usize,
        pieces_per_round: usize,
        level_threshold: u64,
    ) -> Result<Self, SessionError> {
        Self::new(SessionConfig::new(grid_size, pieces_per_round, level_threshold))
    }

    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn supply(&self) -> &PieceSupply {
        &self.supply
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Best score seen by this session, including the stored value it
    /// started from.
    #[must_use]
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// RNG position, for reproducing the rest of the deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Whether any offered piece fits anywhere on the board.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.board.any_placement_exists(self.supply.masks())
    }

    /// Events queued since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Moves ===

    /// Place an offered piece with its top-left mask corner at `(row, col)`.
    ///
    /// On `PlacementRejected` nothing changes; the caller should tell the
    /// player the move is invalid. Any accepted move scores, clears, levels,
    /// refills, and checks for game over before returning.
    pub fn attempt_placement(
        &mut self,
        piece_id: PieceId,
        row: usize,
        col: usize,
    ) -> Result<PlacementOutcome, SessionError> {
        if self.status == SessionStatus::Ended {
            return Err(SessionError::SessionEnded);
        }

        let Some(piece) = self.supply.get(piece_id) else {
            log::warn!("placement requested for {piece_id}, which is not offered");
            return Err(SessionError::UnknownPiece(piece_id));
        };
        let shape = Arc::clone(piece.shape());

        let blocks_placed = self
            .board
            .place(&shape.mask, row, col, shape.color)
            .map_err(|err| match err {
                BoardError::PlacementRejected { .. } => SessionError::PlacementRejected {
                    piece: piece_id,
                    row,
                    col,
                },
                other => other.into(),
            })?;

        let placement_points = placement_points(blocks_placed);
        self.score += placement_points;
        self.supply.consume(piece_id)?;
        self.events.push(SessionEvent::PiecePlaced {
            piece: piece_id,
            shape: shape.id,
            row,
            col,
            blocks: blocks_placed,
            points: placement_points,
        });
        log::debug!("placed {} at ({row}, {col}) for {placement_points}", shape.key);

        let lines_cleared = self.board.detect_completed_lines();
        let line_points = line_clear_points(self.board.clear_lines(&lines_cleared)?);
        self.score += line_points;
        if !lines_cleared.is_empty() {
            log::debug!(
                "cleared rows {:?} cols {:?} for {line_points}",
                lines_cleared.rows(),
                lines_cleared.cols()
            );
            self.events.push(SessionEvent::LinesCleared {
                lines: lines_cleared.clone(),
                points: line_points,
            });
        }

        let new_high_score = self.record_high_score();

        let previous_level = self.level;
        self.level = level_for_score(self.score, self.config.level_threshold).max(previous_level);
        let leveled_up = self.level > previous_level;
        if leveled_up {
            log::info!("level up: {}", self.level);
            self.events.push(SessionEvent::LevelUp { level: self.level });
        }

        let refilled = self.refill_supply()?;

        let ended = !self.can_continue();
        if ended {
            self.end();
        }

        Ok(PlacementOutcome {
            piece: piece_id,
            shape: shape.id,
            row,
            col,
            blocks_placed,
            placement_points,
            lines_cleared,
            line_points,
            points_awarded: placement_points + line_points,
            score: self.score,
            level: self.level,
            leveled_up,
            refilled,
            ended,
            new_high_score,
        })
    }

    /// Start over with the same configuration.
    ///
    /// A seeded configuration reseeds the RNG, so the first deal repeats.
    /// Pending events are dropped; the high score is kept.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if let Some(seed) = self.config.seed {
            self.rng = GameRng::new(seed);
        }
        self.board.clone_from(&self.starting_board);
        self.supply.clear();
        self.score = 0;
        self.level = 1;
        self.status = SessionStatus::Active;
        self.events.clear();

        log::info!("session reset");
        self.deal_first_round()
    }

    // === Internals ===

    fn deal_first_round(&mut self) -> Result<(), SessionError> {
        self.refill_supply()?;
        if !self.can_continue() {
            self.end();
        }
        Ok(())
    }

    fn refill_supply(&mut self) -> Result<bool, SessionError> {
        let refilled = self
            .supply
            .refill(&self.catalog, self.config.pieces_per_round, &mut self.rng)?;
        if refilled {
            log::debug!("dealt a new round of {} pieces", self.supply.len());
            self.events.push(SessionEvent::SupplyRefilled {
                pieces: self.supply.current().iter().map(|p| p.id()).collect(),
            });
        }
        Ok(refilled)
    }

    fn record_high_score(&mut self) -> bool {
        if self.score <= self.high_score {
            return false;
        }
        self.high_score = self.score;
        self.high_score_store.store(self.score);
        log::debug!("new high score {}", self.score);
        self.events.push(SessionEvent::HighScore { score: self.score });
        true
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("game over, final score {}", self.score);
        self.events.push(SessionEvent::GameOver {
            final_score: self.score,
        });
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("status", &self.status)
            .field("high_score", &self.high_score)
            .field("supply", &self.supply)
            .field("board", &format_args!("\n{}", self.board))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Color, ShapeMask};

    /// Catalog with exactly the given shapes, so every deal offers all of them.
    fn catalog_of(shapes: &[(&str, &[&[u8]])]) -> ShapeCatalog {
        let mut catalog = ShapeCatalog::new();
        for &(key, rows) in shapes {
            catalog.register_auto(key, key, ShapeMask::from_rows(rows).unwrap(), Color(0x123456));
        }
        catalog
    }

    fn piece_by_key(session: &GameSession, key: &str) -> PieceId {
        session
            .supply()
            .current()
            .iter()
            .find(|p| p.shape().key == key)
            .map(|p| p.id())
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = GameSession::new(SessionConfig::default().with_seed(1)).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.supply().len(), 3);
        assert_eq!(session.board().filled_count(), 0);
        assert!(session.can_continue());
        assert!(matches!(
            session.pending_events(),
            [SessionEvent::SupplyRefilled { .. }]
        ));
    }

    #[test]
    fn test_invalid_config() {
        let err = GameSession::create(0, 3, 1000).unwrap_err();
        assert_eq!(err, SessionError::Config(ConfigError::ZeroGridSize));

        let err = GameSession::builder()
            .grid_size(6)
            .starting_board(Board::new(8))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Config(ConfigError::BoardSizeMismatch { expected: 6, found: 8 })
        );
    }

    #[test]
    fn test_square_scores_forty() {
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]]), ("dot", &[&[1]]), ("bar", &[&[1, 1]])]);
        let mut session = GameSession::builder().catalog(catalog).seed(3).build().unwrap();

        let sq = piece_by_key(&session, "sq");
        let outcome = session.attempt_placement(sq, 0, 0).unwrap();

        assert_eq!(outcome.blocks_placed, 4);
        assert_eq!(outcome.placement_points, 40);
        assert!(outcome.lines_cleared.is_empty());
        assert_eq!(outcome.line_points, 0);
        assert_eq!(outcome.score, 40);
        assert_eq!(session.score(), 40);
        assert!(!outcome.refilled);
        assert!(!outcome.ended);
        assert_eq!(session.supply().len(), 2);
        assert!(!session.supply().contains(sq));
    }

    #[test]
    fn test_rejected_placement_changes_nothing() {
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]]), ("dot", &[&[1]]), ("bar", &[&[1, 1]])]);
        let mut session = GameSession::builder().catalog(catalog).seed(3).build().unwrap();
        session.drain_events();

        let sq = piece_by_key(&session, "sq");
        let before = session.snapshot();

        let err = session.attempt_placement(sq, 7, 7).unwrap_err();
        assert_eq!(err, SessionError::PlacementRejected { piece: sq, row: 7, col: 7 });
        assert!(err.is_recoverable());
        assert_eq!(session.snapshot(), before);
        assert!(session.pending_events().is_empty());
    }

    #[test]
    fn test_unknown_piece() {
        let mut session = GameSession::new(SessionConfig::default().with_seed(1)).unwrap();
        let err = session.attempt_placement(PieceId::new(999), 0, 0).unwrap_err();
        assert_eq!(err, SessionError::UnknownPiece(PieceId::new(999)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_row_clear_bonus() {
        let catalog = catalog_of(&[("dot", &[&[1]]), ("line", &[&[1, 1, 1]]), ("col", &[&[1], &[1]])]);
        let mut board = Board::new(4);
        let dot = ShapeMask::from_rows(&[[1u8]]).unwrap();
        for col in 0..3 {
            board.place(&dot, 3, col, Color(0)).unwrap();
        }

        let mut session = GameSession::builder()
            .grid_size(4)
            .catalog(catalog)
            .starting_board(board)
            .seed(9)
            .build()
            .unwrap();

        let dot = piece_by_key(&session, "dot");
        let outcome = session.attempt_placement(dot, 3, 3).unwrap();

        assert_eq!(outcome.lines_cleared.rows(), &[3]);
        assert_eq!(outcome.line_points, 100);
        assert_eq!(outcome.points_awarded, 110);
        assert_eq!(session.score(), 110);
        assert_eq!(session.board().filled_count(), 0);
    }

    #[test]
    fn test_full_lines_on_starting_board_are_cleared_unscored() {
        let catalog = catalog_of(&[("dot", &[&[1]]), ("pair", &[&[1, 1]]), ("tri", &[&[1, 1, 1]])]);
        let mut board = Board::new(8);
        board.place(&ShapeMask::from_rows(&[[1u8; 4]]).unwrap(), 0, 0, Color(0)).unwrap();
        board.place(&ShapeMask::from_rows(&[[1u8; 4]]).unwrap(), 0, 4, Color(0)).unwrap();
        board.place(&ShapeMask::from_rows(&[[1u8]]).unwrap(), 3, 3, Color(0)).unwrap();

        let mut session = GameSession::builder()
            .catalog(catalog)
            .starting_board(board)
            .seed(9)
            .build()
            .unwrap();
        assert_eq!(session.board().filled_count(), 1);

        let dot = piece_by_key(&session, "dot");
        let outcome = session.attempt_placement(dot, 5, 5).unwrap();
        assert!(outcome.lines_cleared.is_empty());
        assert_eq!(outcome.points_awarded, 10);

        session.reset().unwrap();
        assert_eq!(session.board().filled_count(), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_full_starting_board_is_playable() {
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]])]);
        let mut board = Board::new(2);
        board.place(&ShapeMask::from_rows(&[[1u8, 1], [1, 1]]).unwrap(), 0, 0, Color(0)).unwrap();

        let session = GameSession::builder()
            .grid_size(2)
            .pieces_per_round(1)
            .catalog(catalog)
            .starting_board(board)
            .seed(2)
            .build()
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.board().filled_count(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_oversized_grid_is_a_config_error() {
        let err = GameSession::create(1 << 33, 3, 1000).unwrap_err();
        assert_eq!(
            err,
            SessionError::Config(ConfigError::GridTooLarge {
                size: 1 << 33,
                max: crate::core::MAX_GRID_SIZE,
            })
        );
    }

    #[test]
    fn test_last_piece_triggers_refill_before_end_check() {
        let catalog = catalog_of(&[("dot", &[&[1]])]);
        let mut session = GameSession::builder()
            .grid_size(2)
            .pieces_per_round(1)
            .catalog(catalog)
            .seed(2)
            .build()
            .unwrap();

        let first = session.supply().current()[0].id();
        let outcome = session.attempt_placement(first, 0, 0).unwrap();

        assert!(outcome.refilled);
        assert!(!outcome.ended);
        assert_eq!(session.supply().len(), 1);
        assert_ne!(session.supply().current()[0].id(), first);
    }

    #[test]
    fn test_game_over_and_session_ended() {
        // A 2x2 board that only ever offers 2x2 squares: the first square
        // fills the board and clears two rows and two columns.
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]]), ("bar", &[&[1, 1, 1]])]);
        let mut session = GameSession::builder()
            .grid_size(2)
            .pieces_per_round(2)
            .catalog(catalog)
            .seed(5)
            .build()
            .unwrap();

        let sq = piece_by_key(&session, "sq");
        let outcome = session.attempt_placement(sq, 0, 0).unwrap();
        assert_eq!(outcome.lines_cleared.len(), 4);
        assert_eq!(outcome.score, 40 + 400);

        // Only the 1x3 bar is left and it can never fit on a 2x2 board.
        assert!(outcome.ended);
        assert_eq!(session.status(), SessionStatus::Ended);

        let bar = piece_by_key(&session, "bar");
        assert_eq!(session.attempt_placement(bar, 0, 0), Err(SessionError::SessionEnded));
        assert_eq!(session.score(), 440);
        assert!(matches!(
            session.pending_events().last(),
            Some(SessionEvent::GameOver { final_score: 440 })
        ));
    }

    #[test]
    fn test_starts_ended_when_nothing_fits() {
        let catalog = catalog_of(&[("bar", &[&[1, 1, 1]])]);
        let mut session = GameSession::builder()
            .grid_size(2)
            .pieces_per_round(1)
            .catalog(catalog)
            .seed(5)
            .build()
            .unwrap();

        assert_eq!(session.status(), SessionStatus::Ended);
        let bar = session.supply().current()[0].id();
        assert_eq!(session.attempt_placement(bar, 0, 0), Err(SessionError::SessionEnded));
    }

    #[test]
    fn test_level_up() {
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]]), ("dot", &[&[1]]), ("bar", &[&[1, 1]])]);
        let mut session = GameSession::builder()
            .catalog(catalog)
            .level_threshold(50)
            .seed(3)
            .build()
            .unwrap();

        let sq = piece_by_key(&session, "sq");
        let outcome = session.attempt_placement(sq, 0, 0).unwrap();
        assert!(!outcome.leveled_up);
        assert_eq!(outcome.level, 1);

        let bar = piece_by_key(&session, "bar");
        let outcome = session.attempt_placement(bar, 4, 4).unwrap();
        assert!(outcome.leveled_up);
        assert_eq!(outcome.level, 2);
        assert!(session
            .pending_events()
            .contains(&SessionEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_high_score_written_through() {
        use std::cell::Cell as StdCell;
        use std::rc::Rc;

        struct Shared(Rc<StdCell<u64>>);

        impl HighScoreStore for Shared {
            fn load(&self) -> u64 {
                self.0.get()
            }
            fn store(&mut self, score: u64) {
                self.0.set(score);
            }
        }

        let saved = Rc::new(StdCell::new(30));
        let catalog = catalog_of(&[("dot", &[&[1]]), ("sq", &[&[1, 1], &[1, 1]]), ("bar", &[&[1, 1]])]);
        let mut session = GameSession::builder()
            .catalog(catalog)
            .high_score_store(Shared(Rc::clone(&saved)))
            .seed(8)
            .build()
            .unwrap();
        assert_eq!(session.high_score(), 30);

        let dot = piece_by_key(&session, "dot");
        let outcome = session.attempt_placement(dot, 0, 0).unwrap();
        assert!(!outcome.new_high_score);
        assert_eq!(saved.get(), 30);

        let sq = piece_by_key(&session, "sq");
        let outcome = session.attempt_placement(sq, 2, 2).unwrap();
        assert!(outcome.new_high_score);
        assert_eq!(saved.get(), 50);
        assert_eq!(session.high_score(), 50);
    }

    #[test]
    fn test_reset_with_seed_replays_deal() {
        let mut session = GameSession::new(SessionConfig::default().with_seed(77)).unwrap();
        let first_deal: Vec<_> = session.supply().current().iter().map(|p| p.shape_id()).collect();

        let piece = session.supply().current()[0].id();
        let origin = session
            .board()
            .first_legal_origin(session.supply().current()[0].mask())
            .unwrap();
        session.attempt_placement(piece, origin.0, origin.1).unwrap();
        assert!(session.score() > 0);

        session.reset().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.board().filled_count(), 0);
        assert!(session.high_score() > 0);

        let replay: Vec<_> = session.supply().current().iter().map(|p| p.shape_id()).collect();
        assert_eq!(first_deal, replay);
    }

    #[test]
    fn test_reset_after_game_over() {
        let catalog = catalog_of(&[("sq", &[&[1, 1], &[1, 1]]), ("bar", &[&[1, 1, 1]])]);
        let mut session = GameSession::builder()
            .grid_size(2)
            .pieces_per_round(2)
            .catalog(catalog)
            .seed(5)
            .build()
            .unwrap();
        let sq = piece_by_key(&session, "sq");
        session.attempt_placement(sq, 0, 0).unwrap();
        assert_eq!(session.status(), SessionStatus::Ended);

        session.reset().unwrap();
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.score(), 0);
        assert_eq!(session.supply().len(), 2);
    }

    #[test]
    fn test_debug_output() {
        let session = GameSession::new(SessionConfig::default().with_seed(1)).unwrap();
        let debug = format!("{:?}", session);
        assert!(debug.contains("GameSession"));
        assert!(debug.contains("........"));
    }
}
