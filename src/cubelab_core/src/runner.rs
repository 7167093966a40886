use crate::{
    inverse::invert,
    notation::{MoveToken, parse},
    rotation::apply_move,
    state::Cube,
};

/// Parse `text` leniently and apply every move to `state` in order.
pub fn run(state: &Cube, text: &str) -> Cube {
    run_algorithm(state, &parse(text))
}

/// Apply already parsed moves to `state` in order.
pub fn run_algorithm(state: &Cube, moves: &[MoveToken]) -> Cube {
    moves.iter().fold(*state, |cube, token| apply_move(&cube, token))
}

/// The state a technique is meant to be performed on: its inverse applied to
/// a solved cube.
pub fn setup_state(text: &str) -> Cube {
    run_algorithm(&Cube::solved(), &invert(&parse(text)))
}

impl Cube {
    #[must_use]
    pub fn run(&self, text: &str) -> Cube {
        run(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_identity() {
        let solved = Cube::solved();
        assert_eq!(run(&solved, ""), solved);
        assert_eq!(setup_state(""), solved);
    }

    #[test]
    fn folds_left_to_right() {
        let solved = Cube::solved();
        let stepwise = solved.run("R").run("U");
        assert_eq!(run(&solved, "R U"), stepwise);
        assert_ne!(run(&solved, "U R"), stepwise);
    }

    #[test]
    fn setup_then_technique_solves() {
        let sune = "R U R' U (R U2 R')";
        let case = setup_state(sune);
        assert!(!case.is_solved());
        assert_eq!(case.run(sune), Cube::solved());
    }
}
