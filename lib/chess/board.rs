use crate::chess::{Color, Destinations, IllegalMove, ParsePieceError, Piece, Position, Rules};
use derive_more::{Display, Error, From};
use std::str::FromStr;
use tracing::{debug, instrument};

/// The identity of a [`Piece`] placed on a [`Board`].
///
/// Identities are never reused, even after the piece is captured.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "#{}", _0)]
pub struct PieceId(usize);

/// Represents a [`Position`] outside of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "position `{}` is out of bounds", _0)]
pub struct OutOfBounds(#[error(not(source))] pub Position);

/// The reason why [`Board::play`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum MoveError {
    #[display(fmt = "{}", _0)]
    OutOfBounds(#[error(not(source))] OutOfBounds),
    #[display(fmt = "{}", _0)]
    IllegalMove(#[error(not(source))] IllegalMove),
    #[display(fmt = "piece `{}` is not on the board", _0)]
    #[from(ignore)]
    NotOnBoard(#[error(not(source))] PieceId),
}

/// The reason why [`Board::remove_piece_at`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum RemovePieceError {
    #[display(fmt = "{}", _0)]
    OutOfBounds(#[error(not(source))] OutOfBounds),
    #[display(fmt = "there is no piece on `{}`", _0)]
    #[from(ignore)]
    Vacant(#[error(not(source))] Position),
}

/// The chess board.
///
/// The board owns every piece in play and is the only authority on which
/// [`Position`] each one occupies.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    pieces: Vec<Option<Piece>>,
    squares: [Option<PieceId>; 64],
    rules: Rules,
}

/// The pawns on their home ranks.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        for c in [Color::White, Color::Black] {
            for f in 1..=Position::SIZE {
                board.insert(Piece::pawn(c, Position::new(f, c.home_rank())));
            }
        }

        board
    }
}

impl Board {
    /// A board without pieces.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            squares: [None; 64],
            rules: Rules::default(),
        }
    }

    /// Places pieces on an empty board, in order.
    ///
    /// The pieces are expected to stand on distinct squares.
    pub fn new<I: IntoIterator<Item = Piece>>(pieces: I) -> Result<Self, OutOfBounds> {
        let mut board = Board::empty();

        for p in pieces {
            board.spawn(p)?;
        }

        Ok(board)
    }

    /// Replaces this board's [`Rules`].
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// The [`Rules`] pieces move by on this board.
    #[inline(always)]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Places a piece on a vacant square.
    pub fn spawn(&mut self, piece: Piece) -> Result<PieceId, OutOfBounds> {
        Self::index(piece.position())?;
        Ok(self.insert(piece))
    }

    /// The [`Piece`] with some [`PieceId`], if still on the board.
    #[inline(always)]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)?.as_ref()
    }

    /// The [`PieceId`] of the piece on a [`Position`], if any.
    #[inline(always)]
    pub fn id_at(&self, position: Position) -> Result<Option<PieceId>, OutOfBounds> {
        Ok(self.squares[Self::index(position)?])
    }

    /// The [`Piece`] on a [`Position`], if any.
    #[inline(always)]
    pub fn piece_at(&self, position: Position) -> Result<Option<&Piece>, OutOfBounds> {
        Ok(self.id_at(position)?.and_then(|id| self.get(id)))
    }

    /// Whether a [`Position`] is on the board and not occupied.
    #[inline(always)]
    pub fn is_vacant(&self, position: Position) -> bool {
        matches!(self.piece_at(position), Ok(None))
    }

    /// Whether a piece equal to the given one is on the board.
    pub fn contains(&self, piece: &Piece) -> bool {
        self.iter().any(|(_, p)| p == piece)
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, p)| Some((PieceId(i), p.as_ref()?)))
    }

    /// The number of pieces on the board.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether there are no pieces on the board.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The squares a piece may currently move to, if it is on the board.
    pub fn destinations(&self, id: PieceId) -> Option<Destinations> {
        Some(self.get(id)?.destinations(self))
    }

    /// Removes the piece on a [`Position`].
    ///
    /// Fails if the square is vacant, in which case the board is left untouched.
    #[instrument(level = "trace", skip(self), err)]
    pub fn remove_piece_at(&mut self, position: Position) -> Result<Piece, RemovePieceError> {
        let i = Self::index(position)?;

        match self.squares[i].take().and_then(|id| self.pieces[id.0].take()) {
            None => Err(RemovePieceError::Vacant(position)),
            Some(piece) => {
                debug!(%piece, "removed");
                Ok(piece)
            }
        }
    }

    /// Moves a piece if legal, returning the captured piece, if any.
    ///
    /// The board is left untouched if the move fails.
    #[instrument(level = "debug", skip(self), err)]
    pub fn play(&mut self, id: PieceId, whither: Position) -> Result<Option<Piece>, MoveError> {
        Self::index(whither)?;

        let mut piece = *self.get(id).ok_or(MoveError::NotOnBoard(id))?;
        let whence = piece.position();
        let captured = piece.play(whither, self)?;
        self.relocate(id, piece);

        debug!(%piece, %whence, "moved");
        Ok(captured)
    }

    fn index(position: Position) -> Result<usize, OutOfBounds> {
        if position.is_on_board() {
            Ok(Self::square(position))
        } else {
            Err(OutOfBounds(position))
        }
    }

    #[inline(always)]
    fn square(position: Position) -> usize {
        debug_assert!(position.is_on_board());
        ((position.rank() - 1) * Position::SIZE + position.file() - 1) as usize
    }

    fn insert(&mut self, piece: Piece) -> PieceId {
        let i = Self::square(piece.position());
        debug_assert!(self.squares[i].is_none(), "`{}` is occupied", piece.position());

        let id = PieceId(self.pieces.len());
        self.pieces.push(Some(piece));
        if let Some(PieceId(displaced)) = self.squares[i].replace(id) {
            self.pieces[displaced] = None;
        }

        id
    }

    fn relocate(&mut self, id: PieceId, piece: Piece) {
        if let Some(p) = self.pieces[id.0].replace(piece) {
            self.squares[Self::square(p.position())] = None;
        }

        self.squares[Self::square(piece.position())] = Some(id);
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "failed to parse board")]
    InvalidPiece(ParsePieceError),
    #[display(fmt = "failed to parse board")]
    OutOfBounds(OutOfBounds),
    #[display(fmt = "failed to parse board, `{}` is occupied by more than one piece", _0)]
    #[from(ignore)]
    Occupied(#[error(not(source))] Position),
}

/// Parses a list of pieces separated by commas or whitespace, e.g. `Pe2,pd7`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();

        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }

            let piece: Piece = token.parse()?;
            if !board.is_vacant(piece.position()) {
                return Err(ParseBoardError::Occupied(piece.position()));
            }

            board.spawn(piece)?;
        }

        Ok(board)
    }
}
