use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Position, Rules};
use tracing::{info, instrument};

/// Moves a piece, if legal.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The pieces on the board, e.g. `Pe2,pd3`.
    board: Board,

    /// The square of the piece to move.
    whence: Position,

    /// The square to move the piece to.
    whither: Position,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        let mut board = self.board.with_rules(rules);
        let id = board
            .id_at(self.whence)?
            .with_context(|| format!("there is no piece on `{}`", self.whence))?;

        match board.play(id, self.whither)? {
            Some(captured) => info!(%captured),
            None => info!("no capture"),
        }

        let pieces = Vec::from_iter(board.iter().map(|(_, p)| p.to_string()));
        info!(board = %pieces.join(","));

        Ok(())
    }
}
