//! Move rules and turn state machine for two-player hotseat chess.
//!
//! This crate provides:
//! - [`is_valid_move`] - the per-piece legality predicate
//! - [`RuleSet`] - trait the state machine checks moves through, with
//!   [`HotseatRules`] as the shipped implementation
//! - [`Game`] - board, side to move and selection, driven by square taps
//!
//! The rules are deliberately narrower than standard chess: there is no check
//! detection, castling, en passant or promotion. A pawn only captures enemy
//! pawns, a queen is not blocked by pieces in its path, and a pawn's double
//! step may jump over an occupied square.
//!
//! # Example
//!
//! ```
//! use hotseat_core::Color;
//! use hotseat_engine::{Game, TapOutcome};
//!
//! let mut game = Game::new();
//! assert!(matches!(game.tap(6, 4), TapOutcome::Selected(_)));
//! assert!(matches!(game.tap(4, 4), TapOutcome::Moved { .. }));
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.selection(), None);
//! ```

mod game;
pub mod rules;

pub use game::{Game, TapOutcome};
pub use rules::{is_black_piece, is_valid_move, is_white_piece, HotseatRules, RuleSet};
