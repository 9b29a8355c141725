//! Turn and selection state driven by square taps.
//!
//! A [`Game`] is a two-state machine: either nothing is selected, or one of
//! the side to move's pieces is. Every tap either selects a piece, does
//! nothing, or (when something is selected) attempts a move and clears the
//! selection whatever the result.

use crate::rules::{HotseatRules, RuleSet};
use hotseat_core::{Board, Color, Piece, Square};
use tracing::{debug, trace};

/// What a single tap did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped piece is now selected.
    Selected(Square),
    /// Nothing was selected and the tap did not select anything.
    Ignored,
    /// The selected piece moved and the turn passed to the other side.
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The move from the selected square was not valid. The selection is gone.
    Rejected { from: Square, to: Square },
}

/// A hotseat game between two local players.
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = HotseatRules> {
    board: Board,
    side_to_move: Color,
    selection: Option<Square>,
    rules: R,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting position, white to move.
    pub fn new() -> Self {
        Self::with_rules(HotseatRules)
    }

    /// Creates a game from an arbitrary board and side to move.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            selection: None,
            rules: HotseatRules,
        }
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game played under the given rules.
    pub fn with_rules(rules: R) -> Self {
        Game {
            board: rules.initial_board(),
            side_to_move: Color::White,
            selection: None,
            rules,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the color whose pieces may currently be selected.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the square awaiting a destination tap, if any.
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Returns the rules this game is played under.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Handles a tap on `(row, col)`.
    ///
    /// Coordinates outside the board are ignored and leave the state untouched.
    pub fn tap(&mut self, row: u8, col: u8) -> TapOutcome {
        match Square::new(row, col) {
            Some(square) => self.on_square_tapped(square),
            None => {
                trace!(row, col, "tap outside the board");
                TapOutcome::Ignored
            }
        }
    }

    /// Handles a tap on `square`.
    pub fn on_square_tapped(&mut self, square: Square) -> TapOutcome {
        let Some(from) = self.selection.take() else {
            return self.select(square);
        };

        match self.rules.try_move(&self.board, from, square) {
            Some(board) => {
                let captured = self.board.get(square).piece();
                self.board = board;
                self.side_to_move = self.side_to_move.opposite();
                debug!(
                    %from,
                    to = %square,
                    captured = ?captured,
                    next = %self.side_to_move,
                    "move committed"
                );
                TapOutcome::Moved {
                    from,
                    to: square,
                    captured,
                }
            }
            None => {
                trace!(%from, to = %square, "move rejected");
                TapOutcome::Rejected { from, to: square }
            }
        }
    }

    /// Puts the game back to the starting position, white to move.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.side_to_move = Color::White;
        self.selection = None;
        debug!("game reset");
    }

    fn select(&mut self, square: Square) -> TapOutcome {
        if self.board.get(square).is_color(self.side_to_move) {
            self.selection = Some(square);
            debug!(%square, side = %self.side_to_move, "piece selected");
            TapOutcome::Selected(square)
        } else {
            trace!(%square, side = %self.side_to_move, "tap ignored");
            TapOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_core::{Cell, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.selection(), None);
        assert_eq!(*game.board(), Board::startpos());
    }

    #[test]
    fn select_own_piece() {
        let mut game = Game::new();
        assert_eq!(game.tap(6, 4), TapOutcome::Selected(sq(6, 4)));
        assert_eq!(game.selection(), Some(sq(6, 4)));
        assert_eq!(*game.board(), Board::startpos());
    }

    #[test]
    fn opponent_piece_is_not_selected() {
        let mut game = Game::new();
        assert_eq!(game.tap(0, 0), TapOutcome::Ignored);
        assert_eq!(game.selection(), None);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn empty_square_is_not_selected() {
        let mut game = Game::new();
        assert_eq!(game.tap(4, 4), TapOutcome::Ignored);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn pawn_double_step() {
        let mut game = Game::new();
        game.tap(6, 4);
        let outcome = game.tap(4, 4);

        assert_eq!(
            outcome,
            TapOutcome::Moved {
                from: sq(6, 4),
                to: sq(4, 4),
                captured: None
            }
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.selection(), None);
        assert!(game.board().get(sq(6, 4)).is_empty());
        assert_eq!(
            game.board().get(sq(4, 4)),
            Cell::from(Piece::white(PieceKind::Pawn))
        );
    }

    #[test]
    fn second_own_piece_clears_selection() {
        let mut game = Game::new();
        game.tap(6, 4);
        assert_eq!(
            game.tap(6, 3),
            TapOutcome::Rejected {
                from: sq(6, 4),
                to: sq(6, 3)
            }
        );
        assert_eq!(game.selection(), None);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(*game.board(), Board::startpos());
    }

    #[test]
    fn illegal_move_keeps_turn() {
        let mut game = Game::new();
        game.tap(6, 4);
        game.tap(3, 4);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.selection(), None);
        assert_eq!(*game.board(), Board::startpos());

        // Third tap is a fresh selection.
        assert_eq!(game.tap(6, 4), TapOutcome::Selected(sq(6, 4)));
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        game.tap(6, 4);
        game.tap(4, 4);
        assert_eq!(game.side_to_move(), Color::Black);

        // White can no longer select.
        assert_eq!(game.tap(6, 3), TapOutcome::Ignored);

        game.tap(1, 4);
        game.tap(3, 4);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn capture_reports_piece() {
        let board = Board::from_placement("8/8/8/8/3p4/8/8/3R4").unwrap();
        let mut game = Game::from_board(board, Color::White);
        game.tap(7, 3);
        assert_eq!(
            game.tap(4, 3),
            TapOutcome::Moved {
                from: sq(7, 3),
                to: sq(4, 3),
                captured: Some(Piece::black(PieceKind::Pawn))
            }
        );
        assert_eq!(game.board().pieces().count(), 1);
    }

    #[test]
    fn tap_outside_board_is_ignored() {
        let mut game = Game::new();
        assert_eq!(game.tap(8, 0), TapOutcome::Ignored);
        game.tap(6, 4);
        assert_eq!(game.tap(0, 9), TapOutcome::Ignored);
        assert_eq!(game.selection(), Some(sq(6, 4)));
    }

    #[test]
    fn snapshots_survive_moves() {
        let mut game = Game::new();
        let before = *game.board();
        game.tap(7, 6);
        game.tap(5, 5);
        assert_eq!(before, Board::startpos());
        assert_ne!(*game.board(), before);
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        game.tap(6, 4);
        game.tap(4, 4);
        game.tap(1, 0);
        game.reset();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.selection(), None);
        assert_eq!(*game.board(), Board::startpos());
    }

    /// A rule set under which nothing may ever move.
    struct Frozen;

    impl RuleSet for Frozen {
        fn initial_board(&self) -> Board {
            Board::startpos()
        }

        fn is_valid_move(&self, _board: &Board, _from: Square, _to: Square) -> bool {
            false
        }
    }

    #[test]
    fn game_consults_its_rules() {
        let mut game = Game::with_rules(Frozen);
        game.tap(6, 4);
        assert!(matches!(game.tap(4, 4), TapOutcome::Rejected { .. }));
        assert_eq!(game.side_to_move(), Color::White);
    }
}
