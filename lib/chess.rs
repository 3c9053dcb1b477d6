mod board;
mod color;
mod pawn;
mod piece;
mod position;
mod role;
mod rules;

pub use board::*;
pub use color::*;
pub use pawn::*;
pub use piece::*;
pub use position::*;
pub use role::*;
pub use rules::*;
