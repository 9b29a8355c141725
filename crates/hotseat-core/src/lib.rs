//! Core types for hotseat chess.
//!
//! This crate provides the value types shared by the rule engine and any
//! front end that renders the game:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece identity
//! - [`Cell`], the 13-value content of a single board square
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Board`], an immutable 8×8 snapshot, and its placement notation

mod board;
mod color;
mod piece;
mod square;

pub use board::{Board, BoardError};
pub use color::Color;
pub use piece::{Cell, Piece, PieceKind};
pub use square::Square;
