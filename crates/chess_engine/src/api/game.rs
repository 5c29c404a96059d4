//! Move-selection session
//!
//! [`GameSession`] is the boundary the presentation layer talks to. It owns
//! the one mutable "current position" cell and replaces it wholesale on every
//! committed move; all rules work is delegated to the pure functions in
//! `move_gen` and `api`.
//!
//! Illegal input is an expected input class, not an error: selecting an empty
//! square, tapping a destination that was not offered, or moving after the
//! game ended simply returns nothing and leaves the session untouched.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut session = GameSession::new();
//! let offered = session.select_square(52);      // e2 pawn
//! assert!(offered.contains_key(&36));           // e4 is offered
//! let outcome = session.attempt_move(36).unwrap();
//! assert_eq!(outcome.status, GameStatus::Playing);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::moves::apply_move;
use super::state::game_status;
use crate::board::square_name;
use crate::move_gen::generate_legal_moves;
use crate::position::Position;
use crate::types::*;
use crate::uci::move_to_uci;

/// Result of a committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as played, promotion piece resolved
    pub played: Move,
    pub position: Position,
    pub status: GameStatus,
}

/// Interactive game state: current position, status and selection
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    status: GameStatus,
    player_color: Color,
    selected: Option<Square>,
    offered: BTreeMap<Square, Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl GameSession {
    /// New game from the initial position, human playing White
    pub fn new() -> Self {
        GameSession::from_position(Position::initial())
    }

    /// Session continuing from an arbitrary position
    pub fn from_position(position: Position) -> Self {
        GameSession {
            status: game_status(&position),
            position,
            player_color: Color::White,
            selected: None,
            offered: BTreeMap::new(),
        }
    }

    /// Set which side the local player controls
    #[must_use]
    pub fn with_player_color(mut self, color: Color) -> Self {
        self.player_color = color;
        self
    }

    /// Reset to the initial position, keeping the player color
    pub fn new_game(&mut self) {
        let player_color = self.player_color;
        *self = GameSession::new().with_player_color(player_color);
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_color(&self) -> Color {
        self.player_color
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Moves offered for the current selection, keyed by destination
    pub fn offered_moves(&self) -> &BTreeMap<Square, Move> {
        &self.offered
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the local player is the side to move
    pub fn is_player_turn(&self) -> bool {
        self.position.side_to_move == self.player_color
    }

    /// Select a square and return the legal moves of the piece on it
    ///
    /// Selecting a piece of the side to move offers its legal moves.
    /// Selecting the already-selected square deselects. Anything else, or any
    /// selection once the game is over, clears the selection.
    pub fn select_square(&mut self, square: Square) -> &BTreeMap<Square, Move> {
        let reselect = self.selected == Some(square);
        self.clear_selection();

        if self.is_over() || reselect || square >= 64 {
            return &self.offered;
        }

        let Some(piece) = self.position.board.piece_at(square) else {
            return &self.offered;
        };
        if piece.color != self.position.side_to_move {
            return &self.offered;
        }

        self.offered = generate_legal_moves(square, piece, &self.position)
            .into_iter()
            .map(|mv| (mv.to, mv))
            .collect();
        self.selected = Some(square);

        debug!(
            square = %square_name(square),
            moves = self.offered.len(),
            "selected {:?}",
            piece.kind
        );
        &self.offered
    }

    /// Play the offered move landing on `destination`
    ///
    /// Promotions default to a Queen. Returns `None` (and changes nothing) if
    /// `destination` was not offered or the game is over.
    pub fn attempt_move(&mut self, destination: Square) -> Option<MoveOutcome> {
        let mv = *self.offered.get(&destination)?;
        self.commit(mv)
    }

    /// Play the offered promotion landing on `destination` with a chosen piece
    ///
    /// Rejected when the offered move is not a promotion or `kind` is a King
    /// or Pawn.
    pub fn attempt_move_with_promotion(
        &mut self,
        destination: Square,
        kind: PieceKind,
    ) -> Option<MoveOutcome> {
        let mv = *self.offered.get(&destination)?;
        if !mv.is_promotion || !kind.is_promotion_target() {
            return None;
        }
        self.commit(mv.with_promotion(kind))
    }

    /// Commit a move coming from the external engine
    ///
    /// The move is accepted only if a legal move with the same squares exists
    /// for the piece on `mv.from`; its flags are taken from the generator and
    /// only the promotion choice is carried over.
    pub fn apply_engine_move(&mut self, mv: Move) -> Option<MoveOutcome> {
        if self.is_over() || mv.from >= 64 || mv.to >= 64 {
            return None;
        }
        let piece = self.position.board.piece_at(mv.from)?;
        let legal = generate_legal_moves(mv.from, piece, &self.position)
            .into_iter()
            .find(|candidate| candidate.to == mv.to)?;

        let chosen = match mv.promotion_piece {
            Some(kind) if legal.is_promotion && kind.is_promotion_target() => {
                legal.with_promotion(kind)
            }
            _ => legal,
        };
        self.clear_selection();
        self.commit(chosen)
    }

    fn commit(&mut self, mv: Move) -> Option<MoveOutcome> {
        if self.is_over() {
            return None;
        }

        let played = if mv.is_promotion && mv.promotion_piece.is_none() {
            mv.with_promotion(PieceKind::Queen)
        } else {
            mv
        };

        let position = apply_move(&self.position, &played);
        let status = game_status(&position);

        info!(mv = %move_to_uci(&played), ?status, "move played");

        self.position = position;
        self.status = status;
        self.clear_selection();

        Some(MoveOutcome {
            played,
            position,
            status,
        })
    }

    /// Drop the current selection, if any
    ///
    /// Call before [`select_square`](Self::select_square) when driving the
    /// session from move text, so a leftover selection is not toggled off.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.offered.clear();
    }
}
