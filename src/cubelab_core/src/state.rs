use std::fmt;

/// One of the six faces of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// The color this face shows on a solved cube.
    pub fn solved_color(self) -> Color {
        SOLVED_COLORS[self.index()].1
    }

    /// Whether the sticker slot for this face is on the outside of the puzzle
    /// at the given position.
    fn is_exterior_at(self, x: i8, y: i8, z: i8) -> bool {
        match self {
            Face::U => y == 1,
            Face::D => y == -1,
            Face::F => z == 1,
            Face::B => z == -1,
            Face::L => x == -1,
            Face::R => x == 1,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Orange => "Orange",
        }
    }

    /// Single letter abbreviation used in plain text renderings.
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// Display color as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::White => (0xff, 0xff, 0xff),
            Color::Yellow => (0xfb, 0xbf, 0x24),
            Color::Green => (0x22, 0xc5, 0x5e),
            Color::Blue => (0x3b, 0x82, 0xf6),
            Color::Red => (0xef, 0x44, 0x44),
            Color::Orange => (0xf9, 0x73, 0x16),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standard orientation: yellow on top, green in front.
pub const SOLVED_COLORS: [(Face, Color); 6] = [
    (Face::U, Color::Yellow),
    (Face::D, Color::White),
    (Face::F, Color::Green),
    (Face::B, Color::Blue),
    (Face::L, Color::Orange),
    (Face::R, Color::Red),
];

/// The sticker colors of a single cubie, one optional slot per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stickers([Option<Color>; 6]);

impl Stickers {
    pub fn get(&self, face: Face) -> Option<Color> {
        self.0[face.index()]
    }

    pub fn set(&mut self, face: Face, color: Option<Color>) {
        self.0[face.index()] = color;
    }

    /// The populated `(face, color)` pairs in `Face::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(|face| self.get(face).map(|color| (face, color)))
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Move the color on `cycle[0]` onto `cycle[1]`, `cycle[1]` onto
    /// `cycle[2]` and so on, wrapping the last back onto the first.
    pub(crate) fn cycle(&mut self, cycle: [Face; 4]) {
        let [a, b, c, d] = cycle;
        let carried = self.get(d);
        self.set(d, self.get(c));
        self.set(c, self.get(b));
        self.set(b, self.get(a));
        self.set(a, carried);
    }
}

/// One of the 27 positional pieces of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubie {
    pub x: i8,
    pub y: i8,
    pub z: i8,
    pub stickers: Stickers,
}

impl Cubie {
    pub fn position(&self) -> (i8, i8, i8) {
        (self.x, self.y, self.z)
    }
}

/// Flattened array index of a position. Coordinates must be in `-1..=1`.
pub(crate) fn index_of(x: i8, y: i8, z: i8) -> usize {
    debug_assert!([x, y, z].iter().all(|c| (-1..=1).contains(c)));
    // The casts are lossless since every term is in 0..=2
    #[allow(clippy::cast_sign_loss)]
    let [x, y, z] = [(x + 1) as usize, (y + 1) as usize, (z + 1) as usize];
    x * 9 + y * 3 + z
}

fn position_of(index: usize) -> (i8, i8, i8) {
    // `index` is below 27 so every component fits
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let coord = |v: usize| (v % 3) as i8 - 1;
    (coord(index / 9), coord(index / 3), coord(index))
}

/// A snapshot of the whole puzzle.
///
/// Cubies are identified by position only: `cubies()[i]` always sits at the
/// position whose flattened key is `i`, so the state is a bijection onto
/// {-1, 0, 1}³ by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    cubies: [Cubie; 27],
}

impl Cube {
    /// The solved puzzle in the standard orientation.
    pub fn solved() -> Cube {
        let cubies = std::array::from_fn(|index| {
            let (x, y, z) = position_of(index);
            let mut stickers = Stickers::default();
            for (face, color) in SOLVED_COLORS {
                if face.is_exterior_at(x, y, z) {
                    stickers.set(face, Some(color));
                }
            }
            Cubie { x, y, z, stickers }
        });

        Cube { cubies }
    }

    /// Build a cube from cubies at arbitrary positions.
    pub(crate) fn from_placed(cubies: [Cubie; 27]) -> Cube {
        let mut placed = cubies;
        for cubie in cubies {
            placed[index_of(cubie.x, cubie.y, cubie.z)] = cubie;
        }
        Cube { cubies: placed }
    }

    pub fn cubies(&self) -> &[Cubie; 27] {
        &self.cubies
    }

    /// # Panics
    ///
    /// If any coordinate is outside of `-1..=1`.
    pub fn cubie_at(&self, x: i8, y: i8, z: i8) -> &Cubie {
        assert!(
            [x, y, z].iter().all(|c| (-1..=1).contains(c)),
            "Position ({x}, {y}, {z}) is outside of the puzzle"
        );
        &self.cubies[index_of(x, y, z)]
    }

    /// The color of one sticker, or `None` if that face is not exterior at
    /// the position.
    pub fn sticker(&self, x: i8, y: i8, z: i8, face: Face) -> Option<Color> {
        self.cubie_at(x, y, z).stickers.get(face)
    }

    /// Number of stickers of each color, indexed by `Color::index`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (_, color) in self.cubies.iter().flat_map(|cubie| cubie.stickers.iter()) {
            counts[color.index()] += 1;
        }
        counts
    }

    /// The nine stickers of `face` as seen from outside the puzzle, row major.
    ///
    /// U is read with the back row first, D with the front row first, and the
    /// four side faces with the top row first. Columns run left to right from
    /// the viewer's point of view.
    pub fn face_grid(&self, face: Face) -> [[Option<Color>; 3]; 3] {
        let mut grid = [[None; 3]; 3];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                // Both are below 3
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let (r, c) = (row as i8 - 1, col as i8 - 1);
                let (x, y, z) = match face {
                    Face::U => (c, 1, r),
                    Face::D => (c, -1, -r),
                    Face::F => (c, -r, 1),
                    Face::B => (-c, -r, -1),
                    Face::L => (-1, -r, c),
                    Face::R => (1, -r, -c),
                };
                *cell = self.sticker(x, y, z, face);
            }
        }
        grid
    }

    /// Whether every face shows a single color, regardless of orientation.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let grid = self.face_grid(face);
            let first = grid[0][0];
            first.is_some() && grid.iter().flatten().all(|&cell| cell == first)
        })
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::solved()
    }
}
