//! A kinematic simulator for the 3x3x3 cube.
//!
//! States are immutable `Cube` snapshots. Text in standard notation is parsed
//! into an `Algorithm`, optionally inverted, and folded over a state one move
//! at a time.

pub mod catalog;
pub mod inverse;
pub mod notation;
pub mod rotation;
pub mod runner;
pub mod scramble;
pub mod session;
pub mod state;

pub use inverse::invert;
pub use notation::{Algorithm, Letter, Modifier, MoveToken, NotationError, Turn, parse, parse_strict};
pub use rotation::apply_move;
pub use runner::{run, run_algorithm, setup_state};
pub use state::{Color, Cube, Cubie, Face, SOLVED_COLORS};

/// The solved puzzle in the standard orientation.
pub fn create_solved_cube() -> Cube {
    Cube::solved()
}
