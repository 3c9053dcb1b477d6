use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// A coordinate on the chess board, counting files and ranks from 1.
///
/// Any pair of coordinates can be represented, so that requests for squares
/// outside of the grid can be expressed and rejected by the [`Board`].
///
/// [`Board`]: crate::chess::Board
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Position {
    #[cfg_attr(test, strategy(1i8..=Position::SIZE))]
    file: i8,
    #[cfg_attr(test, strategy(1i8..=Position::SIZE))]
    rank: i8,
}

impl Position {
    /// The number of files and ranks on the board.
    pub const SIZE: i8 = 8;

    /// Constructs [`Position`] from a pair of file and rank.
    #[inline(always)]
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    /// This position's file, `1` being the `a`-file.
    #[inline(always)]
    pub fn file(&self) -> i8 {
        self.file
    }

    /// This position's rank.
    #[inline(always)]
    pub fn rank(&self) -> i8 {
        self.rank
    }

    /// Whether this position lies within the 8x8 grid.
    #[inline(always)]
    pub fn is_on_board(&self) -> bool {
        (1..=Self::SIZE).contains(&self.file) && (1..=Self::SIZE).contains(&self.rank)
    }

    /// The position reached by moving across some files and ranks.
    ///
    /// The result is not guaranteed to be on the board.
    #[inline(always)]
    pub fn shift(&self, files: i8, ranks: i8) -> Self {
        Position::new(
            self.file.saturating_add(files),
            self.rank.saturating_add(ranks),
        )
    }

    /// An iterator over all positions on the board, rank by rank.
    pub fn iter() -> impl Iterator<Item = Self> {
        (1..=Self::SIZE).flat_map(|r| (1..=Self::SIZE).map(move |f| Position::new(f, r)))
    }
}

/// Prints positions on the board in algebraic notation, others as a pair.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + (self.file - 1) as u8);
            write!(f, "{}{}", file, self.rank)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

/// The reason why parsing [`Position`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParsePositionError {
    #[display(fmt = "failed to parse position, expected letter in the range `(a..=h)`")]
    InvalidFile,
    #[display(fmt = "failed to parse position, expected digit in the range `(1..=8)`")]
    InvalidRank,
    #[display(fmt = "failed to parse position, expected a file followed by a rank")]
    InvalidLength,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParsePositionError::InvalidLength);
        };

        let file = match f {
            'a'..='h' => (f as u8 - b'a') as i8 + 1,
            _ => return Err(ParsePositionError::InvalidFile),
        };

        let rank = match r {
            '1'..='8' => (r as u8 - b'0') as i8,
            _ => return Err(ParsePositionError::InvalidRank),
        };

        Ok(Position::new(file, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_strategy::proptest;

    #[proptest]
    fn new_constructs_position_from_pair_of_file_and_rank(f: i8, r: i8) {
        let p = Position::new(f, r);
        assert_eq!((p.file(), p.rank()), (f, r));
    }

    #[proptest]
    fn positions_are_equal_if_file_and_rank_match(a: Position, b: Position) {
        assert_eq!(a == b, (a.file(), a.rank()) == (b.file(), b.rank()));
    }

    #[proptest]
    fn arbitrary_position_is_on_the_board(p: Position) {
        assert!(p.is_on_board());
    }

    #[proptest]
    fn position_is_off_the_board_if_file_out_of_range(
        #[filter(!(1..=8).contains(&#f))] f: i8,
        #[strategy(1i8..=8)] r: i8,
    ) {
        assert!(!Position::new(f, r).is_on_board());
    }

    #[proptest]
    fn position_is_off_the_board_if_rank_out_of_range(
        #[strategy(1i8..=8)] f: i8,
        #[filter(!(1..=8).contains(&#r))] r: i8,
    ) {
        assert!(!Position::new(f, r).is_on_board());
    }

    #[proptest]
    fn shifting_position_adds_files_and_ranks(
        p: Position,
        #[strategy(-8i8..=8)] files: i8,
        #[strategy(-8i8..=8)] ranks: i8,
    ) {
        assert_eq!(
            p.shift(files, ranks),
            Position::new(p.file() + files, p.rank() + ranks)
        );
    }

    #[proptest]
    fn shifting_position_saturates(files: i8, ranks: i8) {
        let p = Position::new(i8::MAX, i8::MIN).shift(files.max(0), ranks.min(0));
        assert_eq!(p, Position::new(i8::MAX, i8::MIN));
    }

    #[test]
    fn iter_visits_every_position_on_the_board_once() {
        let positions = BTreeSet::from_iter(Position::iter());
        assert_eq!(positions.len(), 64);
        assert!(positions.iter().all(Position::is_on_board));
    }

    #[test]
    fn position_on_the_board_is_printed_in_algebraic_notation() {
        assert_eq!(Position::new(1, 1).to_string(), "a1");
        assert_eq!(Position::new(5, 4).to_string(), "e4");
        assert_eq!(Position::new(8, 8).to_string(), "h8");
    }

    #[test]
    fn position_off_the_board_is_printed_as_a_pair() {
        assert_eq!(Position::new(4, 9).to_string(), "(4, 9)");
        assert_eq!(Position::new(0, 4).to_string(), "(0, 4)");
    }

    #[proptest]
    fn parsing_printed_position_is_an_identity(p: Position) {
        assert_eq!(p.to_string().parse(), Ok(p));
    }

    #[proptest]
    fn parsing_position_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        #[strategy(1i8..=8)] r: i8,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Position>(),
            Err(ParsePositionError::InvalidFile)
        );
    }

    #[proptest]
    fn parsing_position_fails_if_rank_invalid(
        #[strategy("[a-h]")] f: String,
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(
            [f, c.to_string()].concat().parse::<Position>(),
            Err(ParsePositionError::InvalidRank)
        );
    }

    #[proptest]
    fn parsing_position_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert_eq!(s.parse::<Position>(), Err(ParsePositionError::InvalidLength));
    }
}
