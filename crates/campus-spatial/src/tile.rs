//! Per-cell tile classification.

/// What occupies one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Open floor.
    #[default]
    Empty,
    /// Never traversable.
    Wall,
    /// Traversable; an evacuation target.
    Exit,
}

impl Tile {
    /// `true` for `Empty` and `Exit`.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tile::Empty => "empty",
            Tile::Wall  => "wall",
            Tile::Exit  => "exit",
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
