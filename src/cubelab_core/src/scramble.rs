use fastrand::Rng;

use crate::{
    notation::{Algorithm, Modifier, MoveToken, Turn},
    rotation::Axis,
};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

const FACES: [Turn; 6] = [Turn::R, Turn::L, Turn::U, Turn::D, Turn::F, Turn::B];
const MODIFIERS: [Modifier; 3] = [Modifier::None, Modifier::Prime, Modifier::Double];

/// A random sequence of outer face turns.
///
/// No face is turned twice in a row and no axis is used three times in a
/// row, so adjacent moves never trivially cancel or commute into each other.
pub fn generate_scramble(length: usize, rng: &mut Rng) -> Algorithm {
    let mut moves: Vec<MoveToken> = Vec::with_capacity(length);

    for _ in 0..length {
        let last = moves.last().and_then(MoveToken::turn);
        let second_last = moves
            .len()
            .checked_sub(2)
            .and_then(|i| moves[i].turn());

        let turn = loop {
            let candidate = FACES[rng.usize(..FACES.len())];
            let axis = candidate.family().axis;

            let repeats_face = last == Some(candidate);
            let third_on_axis = last.map(|turn| turn.family().axis) == Some(axis)
                && second_last.map(|turn| turn.family().axis) == Some(axis);

            if !repeats_face && !third_on_axis {
                break candidate;
            }
        };

        moves.push(MoveToken::new(turn, MODIFIERS[rng.usize(..MODIFIERS.len())]));
    }

    Algorithm::new(moves)
}

/// Whether every adjacent pair and triple of `moves` obeys the scramble rules.
pub fn follows_scramble_rules(moves: &[MoveToken]) -> bool {
    let axis = |token: &MoveToken| -> Option<Axis> { token.turn().map(|t| t.family().axis) };

    let no_repeated_face = moves.windows(2).all(|pair| pair[0].turn() != pair[1].turn());
    let no_axis_triple = moves.windows(3).all(|triple| {
        let [a, b, c] = [&triple[0], &triple[1], &triple[2]].map(axis);
        !(a == b && b == c)
    });

    no_repeated_face && no_axis_triple
}

#[cfg(test)]
mod tests {
    use crate::notation::parse;

    use super::*;

    #[test]
    fn seeded_scrambles_repeat() {
        let a = generate_scramble(DEFAULT_SCRAMBLE_LENGTH, &mut Rng::with_seed(7));
        let b = generate_scramble(DEFAULT_SCRAMBLE_LENGTH, &mut Rng::with_seed(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_SCRAMBLE_LENGTH);
    }

    #[test]
    fn scrambles_follow_the_rules() {
        let mut rng = Rng::with_seed(0x5eed);
        for length in [0, 1, 2, 3, 25, 100] {
            let scramble = generate_scramble(length, &mut rng);
            assert_eq!(scramble.len(), length);
            assert!(follows_scramble_rules(&scramble), "{scramble}");
            assert!(
                scramble
                    .iter()
                    .all(|token| !token.wide && FACES.contains(&token.turn().unwrap()))
            );
        }
    }

    #[test]
    fn rule_check() {
        assert!(follows_scramble_rules(&parse("R U R' F2 L D")));
        assert!(!follows_scramble_rules(&parse("R R'")));
        assert!(!follows_scramble_rules(&parse("R L R")));
        assert!(follows_scramble_rules(&parse("R L U R")));
    }
}
