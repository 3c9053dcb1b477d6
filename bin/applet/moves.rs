use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Position, Rules};
use tracing::{info, instrument};

/// Lists the squares a piece may move to.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The pieces on the board, e.g. `Pe2,pd3`.
    board: Board,

    /// The square of the piece to move.
    whence: Position,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        let board = self.board.with_rules(rules);
        let piece = board
            .piece_at(self.whence)?
            .with_context(|| format!("there is no piece on `{}`", self.whence))?;

        let destinations = piece.destinations(&board);
        let destinations = Vec::from_iter(destinations.iter().map(|p| p.to_string()));
        info!(%piece, destinations = %destinations.join(" "));

        Ok(())
    }
}
