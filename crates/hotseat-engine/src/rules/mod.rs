//! Rule set abstraction.
//!
//! The [`Game`](crate::Game) state machine never decides legality itself; it
//! asks a [`RuleSet`]. [`HotseatRules`] is the rule set the game ships with.

mod hotseat;

pub use hotseat::{is_valid_move, HotseatRules};

use hotseat_core::{Board, Cell, Color, Square};

/// Returns true if the cell holds a white piece.
#[inline]
pub fn is_white_piece(cell: Cell) -> bool {
    cell.is_color(Color::White)
}

/// Returns true if the cell holds a black piece.
#[inline]
pub fn is_black_piece(cell: Cell) -> bool {
    cell.is_color(Color::Black)
}

/// Trait for the move rules a game is played under.
///
/// # Example
///
/// ```
/// use hotseat_core::Square;
/// use hotseat_engine::{HotseatRules, RuleSet};
///
/// let board = HotseatRules.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let e4 = Square::from_algebraic("e4").unwrap();
/// assert!(HotseatRules.is_valid_move(&board, e2, e4));
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns true if the piece on `from` may move to `to`.
    ///
    /// Must not panic: an empty origin or any other impossible request is
    /// simply `false`.
    fn is_valid_move(&self, board: &Board, from: Square, to: Square) -> bool;

    /// Returns the board after the move, or `None` if the move is not valid.
    fn try_move(&self, board: &Board, from: Square, to: Square) -> Option<Board> {
        if self.is_valid_move(board, from, to) {
            Some(board.with_move(from, to))
        } else {
            None
        }
    }
}
