//! Perft (performance test) node counting
//!
//! Counts the leaf nodes of the legal move tree to a fixed depth. Comparing the
//! counts with published reference values is the standard way to validate a
//! move generator: every special rule (castling through check, en-passant
//! discovered checks, promotions) shows up in the totals.
//!
//! The generator emits one move per promotion destination; perft expands each
//! into the four promotion pieces so the totals match the reference tables.

use crate::api::apply_move;
use crate::move_gen::legal_moves_for_side;
use crate::position::Position;
use crate::types::*;
use crate::uci::move_to_uci;

/// Legal moves with every promotion expanded to Q, R, B and N
pub fn expanded_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for mv in legal_moves_for_side(position) {
        if mv.is_promotion {
            moves.extend(PROMOTION_KINDS.iter().map(|&kind| mv.with_promotion(kind)));
        } else {
            moves.push(mv);
        }
    }
    moves
}

/// Number of leaf nodes `depth` plies below `position`
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = expanded_legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&apply_move(position, mv), depth - 1))
        .sum()
}

/// Per-move breakdown of [`perft`], sorted by move text
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut rows: Vec<(String, u64)> = expanded_legal_moves(position)
        .iter()
        .map(|mv| {
            let nodes = perft(&apply_move(position, mv), depth - 1);
            (move_to_uci(mv), nodes)
        })
        .collect();
    rows.sort();
    rows
}
