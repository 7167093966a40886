use log::{debug, trace};

use crate::{
    notation::{MoveToken, Turn},
    state::{Cube, Cubie, Face},
};

/// An axis of rotation through the center of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Direction of a quarter turn, looking at the puzzle from the positive end
/// of its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Clockwise seen from the positive side: R, U, F
    Positive,
    /// Clockwise seen from the negative side: L, D, B
    Negative,
}

/// Everything a quarter turn needs besides its membership rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnFamily {
    pub axis: Axis,
    pub sense: Sense,
    /// The color on `cycle[i]` moves onto `cycle[i + 1]`.
    pub cycle: [Face; 4],
}

const R_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::X,
    sense: Sense::Positive,
    cycle: [Face::U, Face::B, Face::D, Face::F],
};

const L_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::X,
    sense: Sense::Negative,
    cycle: [Face::U, Face::F, Face::D, Face::B],
};

const U_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::Y,
    sense: Sense::Positive,
    cycle: [Face::F, Face::L, Face::B, Face::R],
};

const D_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::Y,
    sense: Sense::Negative,
    cycle: [Face::F, Face::R, Face::B, Face::L],
};

const F_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::Z,
    sense: Sense::Positive,
    cycle: [Face::U, Face::R, Face::D, Face::L],
};

const B_FAMILY: TurnFamily = TurnFamily {
    axis: Axis::Z,
    sense: Sense::Negative,
    cycle: [Face::U, Face::L, Face::D, Face::R],
};

impl Turn {
    pub fn family(self) -> TurnFamily {
        match self {
            Turn::R | Turn::X => R_FAMILY,
            Turn::L | Turn::M => L_FAMILY,
            Turn::U | Turn::Y => U_FAMILY,
            Turn::D | Turn::E => D_FAMILY,
            Turn::F | Turn::S | Turn::Z => F_FAMILY,
            Turn::B => B_FAMILY,
        }
    }

    /// Whether a cubie at `(x, y, z)` takes part in this turn.
    pub fn moves_position(self, wide: bool, (x, y, z): (i8, i8, i8)) -> bool {
        let (coord, outer) = match self {
            Turn::X | Turn::Y | Turn::Z => return true,
            Turn::M => return x == 0,
            Turn::E => return y == 0,
            Turn::S => return z == 0,
            Turn::R => (x, 1),
            Turn::L => (x, -1),
            Turn::U => (y, 1),
            Turn::D => (y, -1),
            Turn::F => (z, 1),
            Turn::B => (z, -1),
        };

        coord == outer || (wide && self.has_wide_form() && coord == 0)
    }
}

impl TurnFamily {
    /// Rotate a position a quarter turn about the family's axis.
    ///
    /// With `(a, b)` the pair of coordinates perpendicular to the axis, taken
    /// as `(y, z)`, `(z, x)` or `(x, y)`, a positive turn maps `(a, b)` to
    /// `(b, -a)` and a negative turn maps it to `(-b, a)`.
    pub fn rotate_position(self, (x, y, z): (i8, i8, i8)) -> (i8, i8, i8) {
        let step = |a: i8, b: i8| match self.sense {
            Sense::Positive => (b, -a),
            Sense::Negative => (-b, a),
        };

        match self.axis {
            Axis::X => {
                let (y, z) = step(y, z);
                (x, y, z)
            }
            Axis::Y => {
                let (z, x) = step(z, x);
                (x, y, z)
            }
            Axis::Z => {
                let (x, y) = step(x, y);
                (x, y, z)
            }
        }
    }

    fn quarter_step(self, cubie: &mut Cubie) {
        (cubie.x, cubie.y, cubie.z) = self.rotate_position(cubie.position());
        cubie.stickers.cycle(self.cycle);
    }
}

/// Apply a single move, returning the new state. The input is not modified.
///
/// Tokens with an unrecognized letter leave the state as it was.
pub fn apply_move(state: &Cube, token: &MoveToken) -> Cube {
    let Some(turn) = token.turn() else {
        debug!("Ignoring unrecognized move `{token}`");
        return *state;
    };

    trace!("Applying `{token}`");

    let family = turn.family();
    let times = token.modifier.quarter_turns();

    let mut cubies = *state.cubies();
    for cubie in &mut cubies {
        if !turn.moves_position(token.wide, cubie.position()) {
            continue;
        }
        for _ in 0..times {
            family.quarter_step(cubie);
        }
    }

    Cube::from_placed(cubies)
}

impl Cube {
    #[must_use]
    pub fn apply_move(&self, token: &MoveToken) -> Cube {
        apply_move(self, token)
    }
}
