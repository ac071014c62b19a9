//! Left-right mirror symmetry of positions and moves

use super::board::{Board, Move, Pawn, SIZE};

fn mirror_column(x: i8) -> i8 {
    SIZE - 1 - x
}

impl Pawn {
    /// Reflect the pawn across the centre column
    pub fn mirror(self) -> Pawn {
        self.at(mirror_column(self.x), self.y)
    }
}

impl Move {
    /// Reflect the pawn and its destination the same way [`Board::mirror`]
    /// reflects a board
    pub fn mirror(self) -> Move {
        Move::new(self.pawn.mirror(), mirror_column(self.x), self.y)
    }
}

impl Board {
    /// Reflect every pawn across the centre column, keeping turn and ply
    #[must_use = "mirror returns a new board; the original is unchanged"]
    pub fn mirror(&self) -> Board {
        Board {
            white: self.white.iter().map(|pawn| pawn.mirror()).collect(),
            black: self.black.iter().map(|pawn| pawn.mirror()).collect(),
            turn: self.turn,
            ply: self.ply,
        }
    }

    /// Whether the position is its own mirror image.
    ///
    /// Used by move generation to skip moves that only mirror other moves.
    pub fn is_self_mirror_symmetric(&self) -> bool {
        *self == self.mirror()
    }

    /// Whether `other` is the mirror image of this position
    pub fn is_mirror_of(&self, other: &Board) -> bool {
        self.mirror() == *other
    }

    /// Equal or mirror-equal. Two such positions need only one diagram.
    pub fn is_equivalent(&self, other: &Board) -> bool {
        self == other || self.is_mirror_of(other)
    }
}
