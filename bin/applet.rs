use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;
use lib::chess::Rules;

mod moves;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Moves(moves::Moves),
    Play(play::Play),
}

impl Applet {
    pub fn execute(self, rules: Rules) -> Result<(), Anyhow> {
        match self {
            Applet::Moves(a) => a.execute(rules),
            Applet::Play(a) => a.execute(rules),
        }
    }
}
