use std::collections::HashSet;

use cubelab_core::{
    Algorithm, Color, Cube, Face, Letter, Modifier, MoveToken, Turn, apply_move,
    create_solved_cube, invert, parse, run, run_algorithm,
};
use fastrand::Rng;
use itertools::Itertools;
use log::info;

fn all_tokens() -> Vec<MoveToken> {
    Turn::ALL
        .into_iter()
        .cartesian_product([false, true])
        .cartesian_product([Modifier::None, Modifier::Prime, Modifier::Double])
        .map(|((turn, wide), modifier)| MoveToken {
            letter: Letter::Turn(turn),
            wide,
            modifier,
        })
        .chain([MoveToken {
            letter: Letter::Unrecognized('Q'),
            wide: false,
            modifier: Modifier::None,
        }])
        .collect()
}

const NOTATION: [&str; 21] = [
    "R", "R'", "R2", "L", "U'", "D2", "F", "B'", "r", "l2", "u'", "d", "f2", "b'", "M", "E'",
    "S2", "x", "Y'", "Z", "Q2",
];

fn random_algorithm(rng: &mut Rng, length: usize) -> Algorithm {
    (0..length)
        .map(|_| parse(NOTATION[rng.usize(..NOTATION.len())])[0])
        .collect()
}

fn random_states(count: usize) -> Vec<Cube> {
    let mut rng = Rng::with_seed(27);
    (0..count)
        .map(|_| {
            let length = rng.usize(0..40);
            run_algorithm(&create_solved_cube(), &random_algorithm(&mut rng, length))
        })
        .collect()
}

#[test_log::test]
fn every_move_has_order_four() {
    for state in random_states(8) {
        for token in all_tokens() {
            let quarter_four = MoveToken {
                modifier: Modifier::None,
                ..token
            };
            let after = (0..4).fold(state, |cube, _| apply_move(&cube, &token));
            assert_eq!(after, state, "{token} x4");
            let after = (0..4).fold(state, |cube, _| apply_move(&cube, &quarter_four));
            assert_eq!(after, state, "{quarter_four} x4");
        }
    }
}

#[test_log::test]
fn every_move_is_undone_by_its_inverse() {
    for state in random_states(8) {
        for token in all_tokens() {
            let inverse = invert(&[token])[0];
            assert_eq!(apply_move(&apply_move(&state, &token), &inverse), state, "{token}");
        }
    }
}

#[test_log::test]
fn inverse_algorithm_restores_any_state() {
    let mut rng = Rng::with_seed(99);
    for state in random_states(16) {
        let alg = random_algorithm(&mut rng, 30);
        let there = run_algorithm(&state, &invert(&alg));
        assert_eq!(run_algorithm(&there, &alg), state);
        assert_eq!(invert(&invert(&alg)), alg);
    }
}

#[test_log::test]
fn colors_are_conserved() {
    for state in random_states(64) {
        assert_eq!(state.color_counts(), [9; 6]);
        for cubie in state.cubies() {
            // Stickers only ever sit on exterior faces
            for (face, _) in cubie.stickers.iter() {
                let exterior = match face {
                    Face::U => cubie.y == 1,
                    Face::D => cubie.y == -1,
                    Face::F => cubie.z == 1,
                    Face::B => cubie.z == -1,
                    Face::L => cubie.x == -1,
                    Face::R => cubie.x == 1,
                };
                assert!(exterior, "{face} sticker inside at {:?}", cubie.position());
            }
        }
    }
}

#[test_log::test]
fn positions_stay_a_bijection() {
    let expected: HashSet<(i8, i8, i8)> = (-1..=1)
        .cartesian_product(-1..=1)
        .cartesian_product(-1..=1)
        .map(|((x, y), z)| (x, y, z))
        .collect();

    for state in random_states(64) {
        let positions = state.cubies().iter().map(|cubie| cubie.position()).collect_vec();
        assert_eq!(positions.len(), 27);
        assert_eq!(positions.iter().copied().collect::<HashSet<_>>(), expected);

        let corners = state.cubies().iter().filter(|c| c.stickers.count() == 3).count();
        let edges = state.cubies().iter().filter(|c| c.stickers.count() == 2).count();
        assert_eq!((corners, edges), (8, 12));
    }
}

#[test_log::test]
fn parse_strips_grouping() {
    let alg = parse("(R U R') U'");
    assert_eq!(alg.iter().map(ToString::to_string).collect_vec(), ["R", "U", "R'", "U'"]);
}

#[test_log::test]
fn invert_reverses_and_flips() {
    let inverted = invert(&parse("R U2 F'"));
    assert_eq!(inverted.iter().map(ToString::to_string).collect_vec(), ["F", "U2", "R'"]);
}

#[test_log::test]
fn r_moves_front_sticker_onto_top() {
    let cube = run(&create_solved_cube(), "R");
    assert_eq!(cube.sticker(1, 1, -1, Face::U), Some(Color::Green));
}

#[test_log::test]
fn sexy_move_has_order_six() {
    let solved = create_solved_cube();
    let mut cube = solved;
    for i in 1..=6 {
        cube = run(&cube, "R U R' U'");
        info!("After {i} repetitions solved = {}", cube == solved);
        assert_eq!(cube == solved, i == 6);
    }
}

#[test_log::test]
fn empty_algorithm_changes_nothing() {
    assert_eq!(run(&create_solved_cube(), ""), create_solved_cube());
    let scrambled = run(&create_solved_cube(), "R U F' D2");
    assert_eq!(run(&scrambled, " ( ) "), scrambled);
}

#[test_log::test]
fn input_state_is_not_modified() {
    let before = create_solved_cube();
    let copy = before;
    let _ = run(&before, "R U R' U' M2 x");
    assert_eq!(before, copy);
}

#[test_log::test]
fn whole_cube_rotation_equals_layer_turns() {
    let solved = create_solved_cube();
    assert_eq!(run(&solved, "x"), run(&solved, "R M' L'"));
    assert_eq!(run(&solved, "y"), run(&solved, "U E' D'"));
    assert_eq!(run(&solved, "z"), run(&solved, "F S B'"));
}
