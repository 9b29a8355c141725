//! Piece and cell representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece of a given kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Piece::new(kind, Color::White)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Piece::new(kind, Color::Black)
    }

    /// Returns the Unicode chess glyph (♔ through ♟).
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Returns the letter form: uppercase for white, lowercase for black.
    pub const fn letter(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a letter (`KQRBNP` or `kqrbnp`) into a piece.
    pub const fn from_letter(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// The content of one board square: a piece, or nothing.
///
/// There are exactly 13 cell values, listed in [`Cell::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Every cell value: the twelve pieces followed by `Empty`.
    pub const ALL: [Cell; 13] = [
        Cell::Occupied(Piece::white(PieceKind::Pawn)),
        Cell::Occupied(Piece::white(PieceKind::Knight)),
        Cell::Occupied(Piece::white(PieceKind::Bishop)),
        Cell::Occupied(Piece::white(PieceKind::Rook)),
        Cell::Occupied(Piece::white(PieceKind::Queen)),
        Cell::Occupied(Piece::white(PieceKind::King)),
        Cell::Occupied(Piece::black(PieceKind::Pawn)),
        Cell::Occupied(Piece::black(PieceKind::Knight)),
        Cell::Occupied(Piece::black(PieceKind::Bishop)),
        Cell::Occupied(Piece::black(PieceKind::Rook)),
        Cell::Occupied(Piece::black(PieceKind::Queen)),
        Cell::Occupied(Piece::black(PieceKind::King)),
        Cell::Empty,
    ];

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the piece in this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty => None,
        }
    }

    /// Returns the color of the piece in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(piece) => Some(piece.color),
            Cell::Empty => None,
        }
    }

    /// Returns true if this cell holds a piece of `color`.
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        match self {
            Cell::Occupied(piece) => piece.color as u8 == color as u8,
            Cell::Empty => false,
        }
    }

    /// Returns the Unicode glyph, or a space for an empty cell.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Occupied(piece) => piece.glyph(),
            Cell::Empty => ' ',
        }
    }

    /// Returns the letter form, or `.` for an empty cell.
    pub const fn letter(self) -> char {
        match self {
            Cell::Occupied(piece) => piece.letter(),
            Cell::Empty => '.',
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Cell::Empty, Cell::Occupied)
    }
}
