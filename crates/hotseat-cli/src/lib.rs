//! Terminal front end for hotseat chess.
//!
//! The front end owns no rules: it draws whatever the [`Game`] reports and
//! forwards each entered square as a tap.
//!
//! [`Game`]: hotseat_engine::Game

pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod snapshot;
