//! The read-tap-render loop.

use crate::config::DisplayConfig;
use crate::input::{parse_line, Command, HELP};
use crate::render::{describe_outcome, render_board};
use crate::snapshot::Snapshot;
use hotseat_engine::Game;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Output options for a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub display: DisplayConfig,
    /// Emit one JSON snapshot per line instead of drawing the board.
    pub json: bool,
}

/// Plays one game, reading commands from `input` until it ends or `quit`.
pub fn run<I: BufRead, O: Write>(input: I, output: &mut O, options: &SessionOptions) -> io::Result<()> {
    let mut game = Game::new();
    info!(json = options.json, "session started");
    show(&game, output, options)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                debug!(%line, error = %e, "bad input");
                if options.json {
                    warn!("{}", e);
                } else {
                    writeln!(output, "{}", e)?;
                }
                continue;
            }
        };

        match command {
            Command::Tap(square) => {
                let outcome = game.on_square_tapped(square);
                if !options.json {
                    writeln!(output, "{}", describe_outcome(&outcome))?;
                }
            }
            Command::Reset => game.reset(),
            Command::Help => {
                if !options.json {
                    writeln!(output, "{}", HELP)?;
                }
                continue;
            }
            Command::Quit => break,
        }
        show(&game, output, options)?;
    }

    info!("session ended");
    output.flush()
}

fn show<O: Write>(game: &Game, output: &mut O, options: &SessionOptions) -> io::Result<()> {
    if options.json {
        let snapshot = Snapshot::capture(
            game.board(),
            game.side_to_move(),
            game.selection(),
            options.display.glyphs,
        );
        let json = snapshot.to_json().map_err(io::Error::other)?;
        writeln!(output, "{}", json)?;
    } else {
        let text = render_board(
            game.board(),
            game.side_to_move(),
            game.selection(),
            &options.display,
        );
        write!(output, "\n{}", text)?;
    }
    output.flush()
}
