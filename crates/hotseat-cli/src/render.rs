//! Text rendering of the game state.

use crate::config::{DisplayConfig, GlyphStyle};
use hotseat_core::{Board, Cell, Color, Square};
use hotseat_engine::TapOutcome;
use std::fmt::Write;

/// Draws the status line and the board.
///
/// The selected square is bracketed and empty dark squares are dotted.
pub fn render_board(
    board: &Board,
    side_to_move: Color,
    selection: Option<Square>,
    display: &DisplayConfig,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current player: {}", side_to_move);
    out.push('\n');

    if display.coordinates {
        out.push_str("   ");
        for col in 0..8 {
            let _ = write!(out, " {} ", col);
        }
        out.push('\n');
    }

    for square in Square::all() {
        if square.col() == 0 && display.coordinates {
            let _ = write!(out, "{}  ", square.row());
        }

        let symbol = cell_symbol(board.get(square), square, display.glyphs);
        if selection == Some(square) {
            let _ = write!(out, "[{}]", symbol);
        } else {
            let _ = write!(out, " {} ", symbol);
        }

        if square.col() == 7 {
            out.push('\n');
        }
    }
    out
}

fn cell_symbol(cell: Cell, square: Square, glyphs: GlyphStyle) -> char {
    match (cell.piece(), glyphs) {
        (Some(piece), GlyphStyle::Unicode) => piece.glyph(),
        (Some(piece), GlyphStyle::Letters) => piece.letter(),
        (None, _) if square.is_light() => ' ',
        (None, _) => '·',
    }
}

/// Describes the result of a tap in one line.
pub fn describe_outcome(outcome: &TapOutcome) -> String {
    match outcome {
        TapOutcome::Selected(square) => {
            format!("Selected {} ({} {}).", square, square.row(), square.col())
        }
        TapOutcome::Ignored => "Nothing of yours to select there.".to_string(),
        TapOutcome::Moved {
            from,
            to,
            captured: None,
        } => format!("Moved {} to {}.", from, to),
        TapOutcome::Moved {
            from,
            to,
            captured: Some(piece),
        } => format!("Moved {} to {}, capturing {}.", from, to, piece),
        TapOutcome::Rejected { from, to } => {
            format!("{} to {} is not allowed. Select a piece again.", from, to)
        }
    }
}
