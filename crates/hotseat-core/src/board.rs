//! Board snapshots and the placement notation.

use crate::{Cell, Color, Piece, PieceKind, Square};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a board placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid placement: row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("invalid placement: unexpected character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// An 8×8 board snapshot.
///
/// `Board` is a plain value: every change produces a new board, so a snapshot
/// taken before a move stays valid after it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// Placement string of the standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// The standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn startpos() -> Self {
        let mut cells = [[Cell::Empty; 8]; 8];
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in Self::BACK_RANK.iter().enumerate() {
                cells[back][col] = Cell::Occupied(Piece::new(*kind, color));
                cells[pawns][col] = Cell::Occupied(Piece::new(PieceKind::Pawn, color));
            }
        }
        Board { cells }
    }

    /// Returns the content of a square.
    #[inline]
    pub const fn get(&self, square: Square) -> Cell {
        self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns a copy of this board with one square replaced.
    #[must_use]
    pub const fn with_cell(mut self, square: Square, cell: Cell) -> Self {
        self.cells[square.row() as usize][square.col() as usize] = cell;
        self
    }

    /// Returns a copy of this board with the content of `from` moved onto `to`.
    ///
    /// Whatever stood on `to` is overwritten and `from` becomes empty. No rule
    /// checking happens here.
    #[must_use]
    pub const fn with_move(self, from: Square, to: Square) -> Self {
        let moving = self.get(from);
        self.with_cell(from, Cell::Empty).with_cell(to, moving)
    }

    /// Returns the rows, row 0 first.
    #[inline]
    pub const fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).piece().map(|p| (sq, p)))
    }

    /// Parses a placement string such as [`Board::STARTPOS`].
    ///
    /// Rows are separated by `/`, starting with row 0. Pieces use the letters
    /// `KQRBNP` (white) and `kqrbnp` (black); digits 1-8 stand for runs of
    /// empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut cells = [[Cell::Empty; 8]; 8];
        for (r, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_letter(ch) {
                    if col < 8 {
                        cells[r][col] = Cell::Occupied(piece);
                    }
                    col += 1;
                } else {
                    return Err(BoardError::InvalidCharacter { row: r, ch });
                }
            }
            if col != 8 {
                return Err(BoardError::RowLength { row: r, len: col });
            }
        }

        Ok(Board { cells })
    }

    /// Writes the placement string for this board.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for cell in row {
                match cell.piece() {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Cell {
        &self.cells[square.row() as usize][square.col() as usize]
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Draws the board as eight lines of letters, row 0 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.letter()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
