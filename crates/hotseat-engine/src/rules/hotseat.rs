//! The hotseat rule set.

use super::RuleSet;
use hotseat_core::{Board, Cell, Color, Piece, PieceKind, Square};

/// The rules the hotseat game is played under.
///
/// Piece movement follows chess shapes with these differences:
/// - no check, castling, en passant or promotion
/// - a pawn captures diagonally only when the target is an enemy pawn
/// - a pawn's double step from its starting row ignores the square it passes
/// - a queen is not blocked by pieces between its origin and destination
#[derive(Debug, Clone, Copy, Default)]
pub struct HotseatRules;

impl RuleSet for HotseatRules {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn is_valid_move(&self, board: &Board, from: Square, to: Square) -> bool {
        is_valid_move(board, from, to)
    }
}

/// Returns true if the piece on `from` may move to `to`.
///
/// Moving onto a square held by a piece of the same color is never valid,
/// which also rules out "moving" a piece onto its own square. An empty origin
/// is never valid.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from).piece() else {
        return false;
    };
    let target = board.get(to);
    if target.is_color(piece.color) {
        return false;
    }

    let delta = Delta::between(from, to);
    match piece.kind {
        PieceKind::Pawn => pawn_move(piece.color, from, target, delta),
        PieceKind::Knight => knight_move(delta),
        PieceKind::Bishop => delta.is_diagonal() && path_is_clear(board, from, delta),
        PieceKind::Rook => delta.is_straight() && path_is_clear(board, from, delta),
        PieceKind::Queen => delta.is_diagonal() || delta.is_straight(),
        PieceKind::King => delta.rows.abs() <= 1 && delta.cols.abs() <= 1,
    }
}

/// Signed row/column distance from origin to destination.
#[derive(Debug, Clone, Copy)]
struct Delta {
    rows: i8,
    cols: i8,
}

impl Delta {
    fn between(from: Square, to: Square) -> Self {
        Delta {
            rows: to.row() as i8 - from.row() as i8,
            cols: to.col() as i8 - from.col() as i8,
        }
    }

    fn is_straight(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn is_diagonal(self) -> bool {
        self.rows.abs() == self.cols.abs()
    }
}

fn pawn_move(color: Color, from: Square, target: Cell, delta: Delta) -> bool {
    let forward = color.pawn_direction();

    let single_step = delta.cols == 0 && delta.rows == forward && target.is_empty();
    let capture = delta.cols.abs() == 1
        && delta.rows == forward
        && target == Cell::Occupied(Piece::new(PieceKind::Pawn, color.opposite()));
    let double_step = from.row() == color.pawn_row()
        && delta.cols == 0
        && delta.rows == 2 * forward
        && target.is_empty();

    single_step || capture || double_step
}

fn knight_move(delta: Delta) -> bool {
    matches!(
        (delta.rows.abs(), delta.cols.abs()),
        (2, 1) | (1, 2)
    )
}

/// Checks that every square strictly between origin and destination is empty.
///
/// Only meaningful for straight or diagonal deltas.
fn path_is_clear(board: &Board, from: Square, delta: Delta) -> bool {
    let steps = delta.rows.abs().max(delta.cols.abs());
    let (step_row, step_col) = (delta.rows.signum(), delta.cols.signum());
    (1..steps)
        .filter_map(|i| from.offset(i * step_row, i * step_col))
        .all(|sq| board.get(sq).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    fn valid(board: &Board, from: (u8, u8), to: (u8, u8)) -> bool {
        is_valid_move(board, sq(from.0, from.1), sq(to.0, to.1))
    }

    #[test]
    fn empty_origin_is_invalid() {
        let start = Board::startpos();
        assert!(!valid(&start, (4, 4), (3, 4)));
        assert!(!valid(&start, (4, 4), (4, 4)));
    }

    #[test]
    fn own_square_is_invalid() {
        let start = Board::startpos();
        for (square, _) in start.pieces() {
            assert!(!is_valid_move(&start, square, square));
        }
    }

    #[test]
    fn self_capture_is_invalid() {
        let start = Board::startpos();
        // Queen sliding onto own pawn, knight jumping onto own pawn, king stepping onto own queen.
        assert!(!valid(&start, (7, 3), (6, 3)));
        assert!(!valid(&start, (7, 1), (6, 3)));
        assert!(!valid(&start, (7, 4), (7, 3)));
        assert!(!valid(&start, (0, 4), (0, 3)));
    }

    #[test]
    fn white_pawn_single_and_double_step() {
        let start = Board::startpos();
        assert!(valid(&start, (6, 4), (5, 4)));
        assert!(valid(&start, (6, 4), (4, 4)));
        assert!(!valid(&start, (6, 4), (3, 4)));
        assert!(!valid(&start, (6, 4), (7, 4)));
        assert!(!valid(&start, (6, 4), (5, 5)));
    }

    #[test]
    fn pawn_double_step_only_from_starting_row() {
        let b = board("8/8/8/8/8/4P3/8/8");
        assert!(valid(&b, (5, 4), (4, 4)));
        assert!(!valid(&b, (5, 4), (3, 4)));

        let b = board("8/8/4p3/8/8/8/8/8");
        assert!(valid(&b, (2, 4), (3, 4)));
        assert!(!valid(&b, (2, 4), (4, 4)));
    }

    #[test]
    fn pawn_forward_needs_empty_square() {
        let b = board("8/8/8/8/8/4n3/4P3/8");
        assert!(!valid(&b, (6, 4), (5, 4)));

        let b = board("8/8/8/8/4n3/8/4P3/8");
        assert!(!valid(&b, (6, 4), (4, 4)));
    }

    #[test]
    fn pawn_double_step_jumps_occupied_square() {
        let b = board("8/8/8/8/8/4n3/4P3/8");
        assert!(valid(&b, (6, 4), (4, 4)));

        let b = board("8/4p3/4N3/8/8/8/8/8");
        assert!(valid(&b, (1, 4), (3, 4)));
    }

    #[test]
    fn pawn_captures_only_pawns() {
        let b = board("8/8/8/8/8/3p1n2/4P3/8");
        assert!(valid(&b, (6, 4), (5, 3)));
        assert!(!valid(&b, (6, 4), (5, 5)));

        let b = board("8/4p3/3P1N2/8/8/8/8/8");
        assert!(valid(&b, (1, 4), (2, 3)));
        assert!(!valid(&b, (1, 4), (2, 5)));
    }

    #[test]
    fn pawn_never_captures_straight_or_backwards() {
        let b = board("8/8/8/8/8/4p3/4P3/8");
        assert!(!valid(&b, (6, 4), (5, 4)));

        let b = board("8/8/8/8/8/8/4P3/3p4");
        assert!(!valid(&b, (6, 4), (7, 3)));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let start = Board::startpos();
        assert!(valid(&start, (1, 3), (2, 3)));
        assert!(valid(&start, (1, 3), (3, 3)));
        assert!(!valid(&start, (1, 3), (0, 3)));
        assert!(!valid(&start, (1, 3), (4, 3)));
    }

    #[test]
    fn knight_shapes() {
        let b = board("8/8/8/3N4/8/8/8/8");
        let targets: Vec<(u8, u8)> = Square::all()
            .filter(|&to| is_valid_move(&b, sq(3, 3), to))
            .map(|to| to.coords())
            .collect();
        assert_eq!(
            targets,
            vec![(1, 2), (1, 4), (2, 1), (2, 5), (4, 1), (4, 5), (5, 2), (5, 4)]
        );
    }

    #[test]
    fn knight_jumps_from_start() {
        let start = Board::startpos();
        assert!(valid(&start, (7, 1), (5, 0)));
        assert!(valid(&start, (7, 1), (5, 2)));
        assert!(valid(&start, (0, 6), (2, 5)));
        assert!(!valid(&start, (7, 1), (5, 1)));
    }

    #[test]
    fn rook_lines_and_blocking() {
        let b = board("8/8/8/8/3R4/8/8/8");
        assert!(valid(&b, (4, 3), (4, 0)));
        assert!(valid(&b, (4, 3), (4, 7)));
        assert!(valid(&b, (4, 3), (0, 3)));
        assert!(valid(&b, (4, 3), (7, 3)));
        assert!(!valid(&b, (4, 3), (5, 4)));

        let blocked = board("8/8/8/8/3R1p2/8/8/8");
        assert!(valid(&blocked, (4, 3), (4, 5)));
        assert!(!valid(&blocked, (4, 3), (4, 6)));
    }

    #[test]
    fn rook_blocked_at_start() {
        let start = Board::startpos();
        assert!(!valid(&start, (7, 0), (4, 0)));
        assert!(!valid(&start, (0, 0), (3, 0)));
    }

    #[test]
    fn bishop_diagonals_and_blocking() {
        let b = board("8/8/8/8/3B4/8/8/8");
        assert!(valid(&b, (4, 3), (0, 7)));
        assert!(valid(&b, (4, 3), (7, 0)));
        assert!(valid(&b, (4, 3), (1, 0)));
        assert!(!valid(&b, (4, 3), (4, 5)));
        assert!(!valid(&b, (4, 3), (2, 2)));

        let blocked = board("8/8/5P2/8/3B4/8/8/8");
        assert!(!valid(&blocked, (4, 3), (1, 6)));
        assert!(valid(&blocked, (4, 3), (3, 4)));
    }

    #[test]
    fn queen_ignores_blockers() {
        let start = Board::startpos();
        // Straight through the d2 pawn and on to capture the black queen.
        assert!(valid(&start, (7, 3), (0, 3)));
        assert!(valid(&start, (7, 3), (4, 3)));
        // Diagonal through the e2 pawn.
        assert!(valid(&start, (7, 3), (3, 7)));
        assert!(!valid(&start, (7, 3), (5, 4)));
    }

    #[test]
    fn king_single_steps() {
        let b = board("8/8/8/3K4/8/8/8/8");
        let targets = Square::all()
            .filter(|&to| is_valid_move(&b, sq(3, 3), to))
            .count();
        assert_eq!(targets, 8);
        assert!(!valid(&b, (3, 3), (1, 3)));
    }

    #[test]
    fn king_may_step_into_attack() {
        let b = board("8/8/3r4/8/3K4/8/8/8");
        assert!(valid(&b, (4, 3), (3, 3)));
    }

    #[test]
    fn captures_any_enemy_piece() {
        let b = board("3k4/8/8/8/8/8/8/3R4");
        assert!(valid(&b, (7, 3), (0, 3)));
    }

    #[test]
    fn rules_trait_delegates() {
        let start = HotseatRules.initial_board();
        assert_eq!(start, Board::startpos());
        assert_eq!(
            HotseatRules.is_valid_move(&start, sq(6, 0), sq(4, 0)),
            is_valid_move(&start, sq(6, 0), sq(4, 0))
        );
    }
}
