//! JSON snapshots of the game state for external renderers.

use crate::config::GlyphStyle;
use hotseat_core::{Board, Color, Square};
use serde::Serialize;

/// Read-only view of the game: board rows, side to move and selection.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snapshot {
    /// Eight strings of eight symbols, row 0 first. Empty squares are spaces
    /// with Unicode glyphs and `.` with letters.
    pub board: Vec<String>,
    /// "white" or "black".
    pub side_to_move: &'static str,
    /// `[row, col]` of the selected square, or null.
    pub selection: Option<[u8; 2]>,
}

impl Snapshot {
    pub fn capture(
        board: &Board,
        side_to_move: Color,
        selection: Option<Square>,
        glyphs: GlyphStyle,
    ) -> Self {
        let board = board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match glyphs {
                        GlyphStyle::Unicode => cell.glyph(),
                        GlyphStyle::Letters => cell.letter(),
                    })
                    .collect()
            })
            .collect();

        Snapshot {
            board,
            side_to_move: side_to_move.as_str(),
            selection: selection.map(|sq| [sq.row(), sq.col()]),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
