use std::{
    fmt,
    ops::{Deref, Index},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

/// The twelve recognized turn letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    R,
    L,
    U,
    D,
    F,
    B,
    /// Middle slice, turns like L
    M,
    /// Equatorial slice, turns like D
    E,
    /// Standing slice, turns like F
    S,
    X,
    Y,
    Z,
}

impl Turn {
    pub const ALL: [Turn; 12] = [
        Turn::R,
        Turn::L,
        Turn::U,
        Turn::D,
        Turn::F,
        Turn::B,
        Turn::M,
        Turn::E,
        Turn::S,
        Turn::X,
        Turn::Y,
        Turn::Z,
    ];

    /// Look up a turn by its uppercase letter.
    pub fn from_letter(letter: char) -> Option<Turn> {
        Turn::ALL.into_iter().find(|turn| turn.letter() == letter)
    }

    pub fn letter(self) -> char {
        match self {
            Turn::R => 'R',
            Turn::L => 'L',
            Turn::U => 'U',
            Turn::D => 'D',
            Turn::F => 'F',
            Turn::B => 'B',
            Turn::M => 'M',
            Turn::E => 'E',
            Turn::S => 'S',
            Turn::X => 'X',
            Turn::Y => 'Y',
            Turn::Z => 'Z',
        }
    }

    /// Whether a lowercase (wide) form of this turn moves an extra layer.
    pub fn has_wide_form(self) -> bool {
        matches!(
            self,
            Turn::R | Turn::L | Turn::U | Turn::D | Turn::F | Turn::B
        )
    }
}

/// The face letter of a token. Anything the parser doesn't recognize is kept
/// verbatim so that it can be printed back; it never moves any cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Turn(Turn),
    Unrecognized(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// Clockwise quarter turn
    #[default]
    None,
    /// Counter-clockwise quarter turn
    Prime,
    /// Half turn
    Double,
}

impl Modifier {
    /// How many clockwise quarter steps this modifier amounts to.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Modifier::None => 1,
            Modifier::Prime => 3,
            Modifier::Double => 2,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Modifier {
        match self {
            Modifier::None => Modifier::Prime,
            Modifier::Prime => Modifier::None,
            Modifier::Double => Modifier::Double,
        }
    }

    fn from_suffix_char(c: Option<char>) -> Modifier {
        match c {
            Some('\'') => Modifier::Prime,
            Some('2') => Modifier::Double,
            _ => Modifier::None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Modifier::None => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }
}

/// A single parsed unit of notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub letter: Letter,
    /// Set by a lowercase letter. Only affects R, L, U, D, F and B.
    pub wide: bool,
    pub modifier: Modifier,
}

impl MoveToken {
    pub fn new(turn: Turn, modifier: Modifier) -> MoveToken {
        MoveToken {
            letter: Letter::Turn(turn),
            wide: false,
            modifier,
        }
    }

    pub fn wide(turn: Turn, modifier: Modifier) -> MoveToken {
        MoveToken {
            letter: Letter::Turn(turn),
            wide: true,
            modifier,
        }
    }

    /// The recognized turn, or `None` for a token that will be ignored.
    pub fn turn(&self) -> Option<Turn> {
        match self.letter {
            Letter::Turn(turn) => Some(turn),
            Letter::Unrecognized(_) => None,
        }
    }

    /// The token that undoes this one. Letter and width are kept.
    #[must_use]
    pub fn inverse(&self) -> MoveToken {
        MoveToken {
            modifier: self.modifier.inverse(),
            ..*self
        }
    }

    /// Interpret one whitespace free fragment. Only the first two characters
    /// are looked at; this never fails.
    fn lenient(fragment: &str) -> Option<MoveToken> {
        let mut chars = fragment.chars();
        let first = chars.next()?;
        let upper = first.to_ascii_uppercase();

        let letter = match Turn::from_letter(upper) {
            Some(turn) => Letter::Turn(turn),
            None => Letter::Unrecognized(first),
        };

        Some(MoveToken {
            letter,
            wide: first.is_lowercase(),
            modifier: Modifier::from_suffix_char(chars.next()),
        })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.letter {
            Letter::Turn(turn) if self.wide => turn.letter().to_ascii_lowercase(),
            Letter::Turn(turn) => turn.letter(),
            Letter::Unrecognized(c) => c,
        };
        write!(f, "{letter}{}", self.modifier.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unrecognized face letter in `{token}` (move {index})")]
    UnrecognizedFace { token: String, index: usize },
    #[error("Invalid modifier in `{token}` (move {index}), expected nothing, `'` or `2`")]
    InvalidModifier { token: String, index: usize },
    #[error("Expected a single move but got `{0}`")]
    NotASingleMove(String),
}

fn strict_token(fragment: &str, index: usize) -> Result<MoveToken, NotationError> {
    let token = MoveToken::lenient(fragment)
        .ok_or_else(|| NotationError::NotASingleMove(fragment.to_owned()))?;

    if token.turn().is_none() {
        return Err(NotationError::UnrecognizedFace {
            token: fragment.to_owned(),
            index,
        });
    }

    // Everything after the first character has to be exactly the modifier
    let first_len = fragment.chars().next().map_or(0, char::len_utf8);
    if &fragment[first_len..] != token.modifier.suffix() {
        return Err(NotationError::InvalidModifier {
            token: fragment.to_owned(),
            index,
        });
    }

    Ok(token)
}

impl FromStr for MoveToken {
    type Err = NotationError;

    /// Parse exactly one move with the strict rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
            return Err(NotationError::NotASingleMove(s.to_owned()));
        }
        strict_token(trimmed, 0)
    }
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Algorithm(Vec<MoveToken>);

impl Algorithm {
    pub fn new(moves: Vec<MoveToken>) -> Algorithm {
        Algorithm(moves)
    }

    pub fn moves(&self) -> &[MoveToken] {
        &self.0
    }

    pub fn into_moves(self) -> Vec<MoveToken> {
        self.0
    }

    /// Number of tokens whose letter is recognized.
    pub fn recognized_len(&self) -> usize {
        self.0.iter().filter(|token| token.turn().is_some()).count()
    }
}

impl Deref for Algorithm {
    type Target = [MoveToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for Algorithm {
    type Output = MoveToken;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<MoveToken> for Algorithm {
    fn from_iter<T: IntoIterator<Item = MoveToken>>(iter: T) -> Self {
        Algorithm(iter.into_iter().collect())
    }
}

impl IntoIterator for Algorithm {
    type Item = MoveToken;
    type IntoIter = std::vec::IntoIter<MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a MoveToken;
    type IntoIter = std::slice::Iter<'a, MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}

/// Grouping parentheses carry no meaning and are removed before splitting.
fn fragments(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|fragment| fragment.replace(['(', ')'], ""))
        .filter(|fragment| !fragment.is_empty())
}

/// Parse algorithm text. Unknown letters are kept as unrecognized tokens
/// rather than rejected.
pub fn parse(text: &str) -> Algorithm {
    fragments(text)
        .filter_map(|fragment| MoveToken::lenient(&fragment))
        .collect()
}

/// Like `parse`, but rejects anything outside of the move grammar.
///
/// # Errors
///
/// The first token with an unknown face letter or with trailing characters
/// other than `'` or `2`.
pub fn parse_strict(text: &str) -> Result<Algorithm, NotationError> {
    fragments(text)
        .enumerate()
        .map(|(index, fragment)| strict_token(&fragment, index))
        .collect()
}
