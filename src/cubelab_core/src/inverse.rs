use crate::notation::{Algorithm, MoveToken};

/// The algorithm that undoes `moves`: reversed, with every token inverted.
pub fn invert(moves: &[MoveToken]) -> Algorithm {
    moves.iter().rev().map(MoveToken::inverse).collect()
}

impl Algorithm {
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        invert(self)
    }
}
