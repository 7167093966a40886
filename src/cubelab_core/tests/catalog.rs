use cubelab_core::{
    Cube, Face,
    catalog::{Category, formula, formulas},
};
use log::debug;

#[test_log::test]
fn every_formula_solves_its_case() {
    for (id, formula) in formulas() {
        let case = formula.case_state();
        debug!("{id}: {}", formula.tokens().inverse());
        assert!(!case.is_solved(), "{id} case is already solved");
        assert_eq!(case.run(formula.algorithm), Cube::solved(), "{id}");
    }
}

#[test_log::test]
fn cases_only_touch_the_last_layer() {
    for (id, formula) in formulas() {
        let case = formula.case_state();
        for cubie in case.cubies().iter().filter(|cubie| cubie.y < 1) {
            for (face, color) in cubie.stickers.iter() {
                assert_eq!(
                    color,
                    face.solved_color(),
                    "{id} disturbs {face} at {:?}",
                    cubie.position()
                );
            }
        }
    }
}

#[test_log::test]
fn pll_cases_keep_the_top_oriented() {
    for (id, formula) in formulas().filter(|(_, f)| f.category == Category::CfopPll) {
        let top = formula.case_state().face_grid(Face::U);
        assert!(
            top.iter()
                .flatten()
                .all(|&cell| cell == Some(Face::U.solved_color())),
            "{id}"
        );
    }
}

#[test_log::test]
fn oll_cases_need_orienting() {
    for (id, formula) in formulas().filter(|(_, f)| f.category == Category::CfopOll) {
        let top = formula.case_state().face_grid(Face::U);
        assert!(
            top.iter()
                .flatten()
                .any(|&cell| cell != Some(Face::U.solved_color())),
            "{id}"
        );
    }
}

#[test_log::test]
fn line_case_leaves_a_line() {
    let top = formula("oll-line").unwrap().case_state().face_grid(Face::U);
    let yellow = Some(Face::U.solved_color());
    // Middle row of U from the back: left edge, center, right edge
    assert_eq!(top[1], [yellow; 3]);
    assert_ne!(top[0][1], yellow);
    assert_ne!(top[2][1], yellow);
}
