use crate::chess::{Board, Color, Pawn, ParsePositionError, ParseRoleError, Position, Role};
use arrayvec::ArrayVec;
use derive_more::{Display, Error, From};
use std::hash::{Hash, Hasher};
use std::{fmt, str::FromStr};

/// The squares a [`Piece`] may currently move to.
///
/// The capacity is enough for every implemented [`Role`].
pub type Destinations = ArrayVec<Position, 4>;

/// Represents an illegal move of a [`Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "moving from `{}` to `{}` is illegal", whence, whither)]
pub struct IllegalMove {
    pub whence: Position,
    pub whither: Position,
}

/// The [`Role`] specific state of a [`Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    Pawn(Pawn),
}

impl Kind {
    /// This kind's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        match self {
            Kind::Pawn(_) => Role::Pawn,
        }
    }
}

/// A chess piece of a certain [`Color`] standing on a [`Position`].
///
/// Pieces compare equal if they have the same [`Role`], [`Color`] and
/// [`Position`], regardless of any other state.
#[derive(Debug, Copy, Clone)]
pub struct Piece {
    color: Color,
    position: Position,
    kind: Kind,
}

impl Piece {
    /// Constructs a [`Piece`] of some [`Role`] in its initial state.
    pub fn new(role: Role, color: Color, position: Position) -> Self {
        let kind = match role {
            Role::Pawn => Kind::Pawn(Pawn::new(color, position)),
        };

        Piece {
            color,
            position,
            kind,
        }
    }

    /// Constructs a pawn.
    #[inline(always)]
    pub fn pawn(color: Color, position: Position) -> Self {
        Self::new(Role::Pawn, color, position)
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's current [`Position`].
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.kind.role()
    }

    /// This piece's [`Role`] specific state.
    #[inline(always)]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The squares this piece may currently move to on a [`Board`].
    pub fn destinations(&self, board: &Board) -> Destinations {
        match &self.kind {
            Kind::Pawn(pawn) => pawn.destinations(self.color, self.position, board),
        }
    }

    /// Moves this piece if legal, returning the captured piece, if any.
    ///
    /// The [`Board`] is left untouched if the move is illegal.
    pub(crate) fn play(
        &mut self,
        whither: Position,
        board: &mut Board,
    ) -> Result<Option<Piece>, IllegalMove> {
        let captured = match &mut self.kind {
            Kind::Pawn(pawn) => pawn.play(self.color, self.position, whither, board)?,
        };

        self.position = whither;
        Ok(captured)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        (self.role(), self.color, self.position) == (other.role(), other.color, other.position)
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.role(), self.color, self.position).hash(state);
    }
}

/// Prints the piece's letter, in upper case for white, followed by its position.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = self.role().to_string();

        match self.color {
            Color::White => f.write_str(&role.to_ascii_uppercase())?,
            Color::Black => f.write_str(&role)?,
        }

        fmt::Display::fmt(&self.position, f)
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePieceError {
    #[display(fmt = "failed to parse piece")]
    InvalidRole(ParseRoleError),
    #[display(fmt = "failed to parse piece")]
    InvalidPosition(ParsePositionError),
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        let (letter, position) = s.split_at(i);
        let lower = letter.to_ascii_lowercase();

        let color = if letter == lower {
            Color::Black
        } else {
            Color::White
        };

        Ok(Piece::new(lower.parse()?, color, position.parse()?))
    }
}
