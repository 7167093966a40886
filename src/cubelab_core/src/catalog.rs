//! Named techniques for the beginner and two-look CFOP methods.

use std::fmt;

use itertools::Itertools;

use crate::{
    notation::{Algorithm, parse},
    runner::setup_state,
    state::Cube,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    LblBeginner,
    CfopOll,
    CfopPll,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::LblBeginner => "LBL (Beginner)",
            Category::CfopOll => "CFOP (2-Look OLL)",
            Category::CfopPll => "CFOP (2-Look PLL)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    pub name: &'static str,
    pub category: Category,
    pub algorithm: &'static str,
    pub description: &'static str,
}

impl Formula {
    pub fn tokens(&self) -> Algorithm {
        parse(self.algorithm)
    }

    /// The state a learner has to recognize before performing this formula.
    pub fn case_state(&self) -> Cube {
        setup_state(self.algorithm)
    }
}

/// Every formula keyed by its identifier, in catalog order.
pub static FORMULAS: phf::OrderedMap<&'static str, Formula> = phf::phf_ordered_map! {
    // Two-look OLL, edges first
    "oll-line" => Formula {
        name: "Line Case",
        category: Category::CfopOll,
        algorithm: "F (R U R' U') F'",
        description: "Horizontal yellow line. Use standard F.",
    },
    "oll-l-shape" => Formula {
        name: "L-Shape",
        category: Category::CfopOll,
        algorithm: "f (R U R' U') f'",
        description: "Two adjacent yellow edges. Use wide f.",
    },
    "oll-dot" => Formula {
        name: "Dot Case",
        category: Category::CfopOll,
        algorithm: "F (R U R' U') F' f (R U R' U') f'",
        description: "No yellow edges oriented. Combine Line and L-Shape algs.",
    },
    // Then corners
    "oll-sune" => Formula {
        name: "Sune",
        category: Category::CfopOll,
        algorithm: "R U R' U (R U2 R')",
        description: "One corner solved (fish head). Sticker on front-right face.",
    },
    "oll-antisune" => Formula {
        name: "Anti-Sune",
        category: Category::CfopOll,
        algorithm: "(R U2 R') U' R U' R'",
        description: "One corner solved (fish head). Stickers on right side.",
    },
    "oll-h" => Formula {
        name: "H Case",
        category: Category::CfopOll,
        algorithm: "R U R' U (R U' R' U) R U2 R'",
        description: "No corners solved. Headlights on Front and Back.",
    },
    "oll-pi" => Formula {
        name: "Pi Case",
        category: Category::CfopOll,
        algorithm: "R U2 (R2 U') (R2 U') R2 U2 R",
        description: "No corners solved. Headlights on Left, outward on Right.",
    },
    "oll-t" => Formula {
        name: "T Case",
        category: Category::CfopOll,
        algorithm: "(r U R' U') (r' F R F')",
        description: "Two corners solved. No headlights, blocks on left.",
    },
    "oll-bowtie" => Formula {
        name: "Bowtie",
        category: Category::CfopOll,
        algorithm: "F' (r U R' U') (r' F R)",
        description: "Two corners solved diagonally.",
    },
    "oll-headlights" => Formula {
        name: "Headlights",
        category: Category::CfopOll,
        algorithm: "R2 D (R' U2 R) D' (R' U2 R')",
        description: "Two corners solved (eyes). Headlights facing you.",
    },
    // Two-look PLL, corners first
    "pll-diagonal" => Formula {
        name: "No Headlights",
        category: Category::CfopPll,
        algorithm: "F (R U' R' U') R U R' F' (R U R' U') R' F R F'",
        description: "Swap two diagonal corners (Y-Perm). Used when no side has headlights.",
    },
    "pll-headlights" => Formula {
        name: "Headlights",
        category: Category::CfopPll,
        algorithm: "(R U R' U') R' F (R2 U' R') U' (R U R' F')",
        description: "Swap two adjacent corners (T-Perm). Place headlights on LEFT before performing.",
    },
    // Then edges
    "pll-ua" => Formula {
        name: "Ua Perm",
        category: Category::CfopPll,
        algorithm: "(R2 U' R') U' (R U R U) R U' R",
        description: "Counter-clockwise edge cycle. Solved face at back.",
    },
    "pll-ub" => Formula {
        name: "Ub Perm",
        category: Category::CfopPll,
        algorithm: "R' U (R' U') (R' U' R' U) R U R2",
        description: "Clockwise edge cycle. Solved face at back.",
    },
    "pll-h" => Formula {
        name: "H Perm",
        category: Category::CfopPll,
        algorithm: "M2 U' (M2 U2 M2) U' M2",
        description: "Swap opposite edges. No solved face.",
    },
    "pll-z" => Formula {
        name: "Z Perm",
        category: Category::CfopPll,
        algorithm: "M' U' (M2 U') (M2 U') M' U2 M2",
        description: "Swap adjacent pairs. No solved face.",
    },
};

pub fn formula(id: &str) -> Option<&'static Formula> {
    FORMULAS.get(id)
}

/// `(id, formula)` pairs in catalog order.
pub fn formulas() -> impl Iterator<Item = (&'static str, &'static Formula)> {
    FORMULAS.entries().map(|(id, formula)| (*id, formula))
}

/// The categories that have at least one formula, in order of first
/// appearance.
pub fn categories() -> Vec<Category> {
    formulas()
        .map(|(_, formula)| formula.category)
        .unique()
        .collect()
}
