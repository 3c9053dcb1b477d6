use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The rank increment of a step toward the opponent's side.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank this side's pawns start on.
    #[inline(always)]
    pub fn home_rank(&self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The last rank in this side's forward direction.
    #[inline(always)]
    pub fn farthest_rank(&self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn opposing_sides_move_in_opposite_directions(c: Color) {
        assert_eq!(c.forward(), -(!c).forward());
    }

    #[proptest]
    fn farthest_rank_is_seven_steps_ahead_of_the_first(c: Color) {
        assert_eq!(c.farthest_rank(), (!c).farthest_rank() + 7 * c.forward());
    }

    #[proptest]
    fn home_rank_is_one_step_ahead_of_the_first(c: Color) {
        assert_eq!(c.home_rank(), (!c).farthest_rank() + c.forward());
    }

    #[test]
    fn color_is_printed_in_lower_case() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }
}
