/// Chess domain types.
pub mod chess;
