//! Grid coordinate type.
//!
//! `Coord` is a plain `(x, y)` value.  Components are signed so that
//! neighbour generation can step off the edge of the grid (`x = -1`) and let
//! the map's validity check reject the result, instead of every caller
//! special-casing the border.

use std::fmt;

/// The eight unit offsets of an 8-connected grid, `(0, 0)` excluded.
///
/// Ordered column-major over `dx ∈ {-1, 0, 1}` then `dy ∈ {-1, 0, 1}`, which
/// is the order neighbours are generated and relaxed in.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An integer tile coordinate.
///
/// Ordering is lexicographic on `(x, y)`; the path search relies on it as
/// its final tie-break.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `(self.x + dx, self.y + dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance.  Exact in integers; never takes a root.
    #[inline]
    pub fn squared_distance(self, other: Coord) -> i64 {
        let w = (self.x - other.x) as i64;
        let h = (self.y - other.y) as i64;
        w * w + h * h
    }

    /// `true` if `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// `true` if `other` differs from `self` on both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Coord) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// Iterator over the eight surrounding coordinates, in
    /// [`NEIGHBOUR_OFFSETS`] order.  No bounds filtering.
    pub fn surrounding(self) -> impl Iterator<Item = Coord> {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
