//! Game state module - the reducer at the heart of the game
//!
//! [`GameState`] is an immutable snapshot. Every action is applied with
//! [`GameState::apply_action`], which either returns the next snapshot or
//! `None` when the action is rejected. Nothing is mutated in place, so a
//! caller holding an older snapshot never sees it change.

use log::debug;

use crate::board::Board;
use crate::collision::{
    blocked_on_entry, cannot_descend, cannot_rotate, cannot_slide, is_end_game,
};
use crate::pieces::Piece;
use crate::rng::RandomSequence;
use crate::scoring::{level_for_score, score_for_rows};
use crate::types::{Action, STARTING_LEVEL};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    game_end: bool,
    board: Board,
    active: Piece,
    /// Preview, kept in its catalog layout until it enters play
    next: Piece,
    held: Option<Piece>,
    hold_used: bool,
    random: RandomSequence,
    score: u32,
    high_score: u32,
    level: u32,
    lines: u32,
}

impl GameState {
    /// Beginning state for a seed: empty board, first two draws as the active
    /// and preview pieces.
    pub fn new(seed: u32) -> Self {
        let first = RandomSequence::new(seed);
        let random = first.next();

        Self {
            game_end: false,
            board: Board::new(),
            active: Piece::spawn(first.kind()),
            next: Piece::new(random.kind()),
            held: None,
            hold_used: false,
            random,
            score: 0,
            high_score: 0,
            level: STARTING_LEVEL,
            lines: 0,
        }
    }

    /// Same state carrying a high score forward
    #[must_use]
    pub fn with_high_score(&self, high_score: u32) -> Self {
        Self {
            high_score: self.high_score.max(high_score),
            ..*self
        }
    }

    /// Same state with a different board (fixtures, puzzles)
    #[must_use]
    pub fn with_board(&self, board: Board) -> Self {
        Self { board, ..*self }
    }

    /// Same state with a different active piece (fixtures, puzzles)
    #[must_use]
    pub fn with_active(&self, active: Piece) -> Self {
        Self { active, ..*self }
    }

    /// Same state with a different score; level follows the score
    #[must_use]
    pub fn with_score(&self, score: u32) -> Self {
        Self {
            score,
            level: level_for_score(score),
            ..*self
        }
    }

    pub fn game_end(&self) -> bool {
        self.game_end
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn random(&self) -> RandomSequence {
        self.random
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Apply an action.
    ///
    /// Returns the next state, or `None` when the action is rejected. Once the
    /// game has ended only `Reset` is accepted.
    pub fn apply_action(&self, action: Action) -> Option<GameState> {
        if self.game_end && action != Action::Reset {
            return None;
        }

        match action {
            Action::Tick(level) if level == self.level => Some(self.move_down()),
            Action::Tick(_) => None,
            Action::MoveLeft => self.move_sideways(-1),
            Action::MoveRight => self.move_sideways(1),
            Action::MoveDown => Some(self.move_down()),
            Action::Rotate => self.rotate(),
            Action::Hold => self.hold(),
            Action::Reset => self.reset(),
        }
    }

    /// Apply an action, keeping the current state when it is rejected
    pub fn reduce(&self, action: Action) -> GameState {
        self.apply_action(action).unwrap_or_else(|| self.clone())
    }

    fn move_sideways(&self, dx: i8) -> Option<GameState> {
        let shifted = self.active.shifted(dx, 0);
        if cannot_slide(&self.board, &shifted) {
            return None;
        }
        Some(Self {
            active: shifted,
            ..*self
        })
    }

    fn rotate(&self) -> Option<GameState> {
        let rotated = self.active.rotated();
        if cannot_rotate(&self.board, &rotated) {
            return None;
        }
        Some(Self {
            active: rotated,
            ..*self
        })
    }

    fn move_down(&self) -> GameState {
        if is_end_game(&self.board, &self.active) || blocked_on_entry(&self.board, &self.active) {
            return self.ended();
        }

        let moved = self.active.shifted(0, 1);
        if !cannot_descend(&self.board, &moved) {
            return Self {
                active: moved,
                ..*self
            };
        }

        self.lock()
    }

    /// Game over snapshot; the board and pieces stay as they are.
    fn ended(&self) -> GameState {
        let high_score = self.high_score.max(self.score);
        debug!(
            "game over: score={} high_score={} lines={}",
            self.score, high_score, self.lines
        );
        Self {
            game_end: true,
            high_score,
            ..*self
        }
    }

    /// Burn the active piece into the board, clear rows and promote the preview.
    ///
    /// When the promoted piece already overlaps the stack the game ends here.
    fn lock(&self) -> GameState {
        let next = self.settle();
        if blocked_on_entry(&next.board, &next.active) {
            return next.ended();
        }
        next
    }

    fn settle(&self) -> GameState {
        let merged = self.board.merge(&self.active);
        let full_rows = merged.full_rows();
        let random = self.random.next();

        let locked = Self {
            board: merged,
            active: self.next.shifted(0, -1),
            next: Piece::new(random.kind()),
            hold_used: false,
            random,
            ..*self
        };

        if full_rows.is_empty() {
            debug!("locked {:?}, no rows cleared", self.active.kind());
            return locked;
        }

        let cleared = full_rows.len();
        let score = self.score.saturating_add(score_for_rows(cleared));
        let level = level_for_score(score);
        debug!(
            "locked {:?}, cleared rows {:?}: score {} -> {}, level {}",
            self.active.kind(),
            full_rows.as_slice(),
            self.score,
            score,
            level
        );

        Self {
            board: merged.remove_rows(&full_rows),
            score,
            level,
            lines: self.lines.saturating_add(cleared as u32),
            ..locked
        }
    }

    fn hold(&self) -> Option<GameState> {
        if self.hold_used {
            return None;
        }

        // Held pieces always come back in their spawn orientation
        let stored = Piece::new(self.active.kind());

        let (active, random) = match self.held {
            Some(held) => (held, self.random),
            None => {
                let random = self.random.next();
                (Piece::new(random.kind()), random)
            }
        };
        if blocked_on_entry(&self.board, &active) {
            return None;
        }

        Some(Self {
            active,
            held: Some(stored),
            hold_used: true,
            random,
            ..*self
        })
    }

    fn reset(&self) -> Option<GameState> {
        if !self.game_end {
            return None;
        }
        debug!("reset, carrying high score {}", self.high_score);
        Some(Self::new(self.random.seed()).with_high_score(self.high_score))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
