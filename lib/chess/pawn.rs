use crate::chess::{Board, Color, Destinations, IllegalMove, Piece, Position};

/// The state of a pawn.
///
/// A pawn may advance two ranks at once only until it first moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pawn {
    double_step: bool,
}

impl Pawn {
    /// Constructs a pawn standing on some [`Position`].
    ///
    /// The pawn may double step if and only if it stands on its side's home rank.
    #[inline(always)]
    pub fn new(color: Color, whence: Position) -> Self {
        Pawn {
            double_step: whence.rank() == color.home_rank(),
        }
    }

    /// Whether this pawn may still advance two ranks at once.
    #[inline(always)]
    pub fn can_double_step(&self) -> bool {
        self.double_step
    }

    /// The squares this pawn may currently move to.
    pub fn destinations(&self, color: Color, whence: Position, board: &Board) -> Destinations {
        let mut destinations = Destinations::new();

        let ahead = whence.shift(0, color.forward());
        if board.is_vacant(ahead) {
            destinations.push(ahead);

            let twice = ahead.shift(0, color.forward());
            if self.double_step && board.is_vacant(twice) {
                destinations.push(twice);
            }
        }

        for side in [-1, 1] {
            let diagonal = ahead.shift(side, 0);
            if let Ok(Some(p)) = board.piece_at(diagonal) {
                if p.color() != color || board.rules().capture_own_color {
                    destinations.push(diagonal);
                }
            }
        }

        destinations
    }

    /// Moves this pawn if legal, returning the captured piece, if any.
    pub(crate) fn play(
        &mut self,
        color: Color,
        whence: Position,
        whither: Position,
        board: &mut Board,
    ) -> Result<Option<Piece>, IllegalMove> {
        let illegal = IllegalMove { whence, whither };

        if !self.destinations(color, whence, board).contains(&whither) {
            return Err(illegal);
        }

        // Straight ahead squares are never captured, diagonals are only ever captured.
        let captured = match (whither.file() == whence.file(), board.is_vacant(whither)) {
            (true, true) => None,
            (false, false) => {
                let captured = board.remove_piece_at(whither);
                debug_assert!(captured.is_ok(), "`{}` is vacant", whither);
                captured.ok()
            }
            _ => return Err(illegal),
        };

        self.double_step = false;
        Ok(captured)
    }
}
