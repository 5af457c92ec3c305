//! Grid map representation and builder.
//!
//! # Data layout
//!
//! Tiles are stored row-major in a single `Vec<Tile>`: the tile at `(x, y)`
//! lives at index `y * width + x`.  The path search keeps its per-cell score
//! arrays in the same layout so one index addresses all of them.
//!
//! # Exit cache
//!
//! Exits are found by one full row-major scan the first time they are asked
//! for.  The result (possibly empty) is stored together with an R-tree (via
//! `rstar`) used for nearest-exit queries, and is never recomputed: later
//! tile edits do not show up in [`GridMap::exits`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use campus_core::{ClassroomId, Coord};

use crate::{Classroom, SpatialError, SpatialResult, Tile};

// ── R-tree exit entry ─────────────────────────────────────────────────────────

/// Entry stored in the exit index: the exit's `[x, y]` plus its position in
/// row-major scan order, used to break distance ties.
#[derive(Clone)]
struct ExitEntry {
    point: [i64; 2],
    order: usize,
}

impl RTreeObject for ExitEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ExitEntry {
    /// Squared Euclidean distance in tile units.
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Lazily built exit list and its spatial index.
struct ExitIndex {
    cells: Vec<Coord>,
    tree:  RTree<ExitEntry>,
}

impl ExitIndex {
    fn scan(map: &GridMap) -> Self {
        let mut cells = Vec::new();
        for y in 0..map.height {
            for x in 0..map.width {
                if map.tiles[map.index_unchecked(x, y)] == Tile::Exit {
                    cells.push(Coord::new(x, y));
                }
            }
        }
        let entries = cells
            .iter()
            .enumerate()
            .map(|(order, c)| ExitEntry { point: [c.x as i64, c.y as i64], order })
            .collect();
        Self { cells, tree: RTree::bulk_load(entries) }
    }
}

// ── GridMap ───────────────────────────────────────────────────────────────────

/// A width×height tile grid plus the classrooms drawn on it.
///
/// Tile classification is fixed after construction in normal operation; the
/// only state that changes during a run is the cycle counter and the
/// classrooms' seat counters, both reset/advanced by [`next_cycle`](Self::next_cycle).
///
/// `GridMap` is `Sync`: searches only take `&GridMap`, so any number of them
/// may run in parallel against one map as long as nothing mutates it.
/// Mutating operations (`next_cycle`, `next_seat`, `set_tile`) need
/// `&mut GridMap`, which the borrow checker keeps exclusive.
///
/// Do not construct directly; use [`GridMapBuilder`] or
/// [`load_from_rgb`](crate::load_from_rgb).
pub struct GridMap {
    width:      i32,
    height:     i32,
    tiles:      Vec<Tile>,
    exits:      OnceLock<ExitIndex>,
    classrooms: BTreeMap<ClassroomId, Classroom>,
    cycle:      u32,
}

impl GridMap {
    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    // ── Tile queries ──────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// The tile at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::OutOfBounds`] outside `[0,width)×[0,height)`.
    pub fn get(&self, x: i32, y: i32) -> SpatialResult<Tile> {
        self.tile(Coord::new(x, y))
            .ok_or(SpatialError::OutOfBounds { x, y })
    }

    /// The tile at `c`, or `None` out of bounds.
    #[inline]
    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.index_of(c).map(|i| self.tiles[i])
    }

    /// `true` if a student may stand on `c`: in bounds and not a wall.
    ///
    /// This is the only admissibility check the path search uses.
    #[inline]
    pub fn is_valid(&self, c: Coord) -> bool {
        self.tile(c).is_some_and(Tile::is_traversable)
    }

    /// Valid cells among the eight surrounding `c`.
    pub fn neighbours(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.surrounding().filter(move |&n| self.is_valid(n))
    }

    /// Overwrite one tile.
    ///
    /// The exit cache is not updated.  If [`exits`](Self::exits) has already
    /// been called, the new tile will not appear in (or vanish from) the
    /// cached list.
    pub fn set_tile(&mut self, c: Coord, tile: Tile) -> SpatialResult<()> {
        let i = self
            .index_of(c)
            .ok_or(SpatialError::OutOfBounds { x: c.x, y: c.y })?;
        self.tiles[i] = tile;
        Ok(())
    }

    /// One row of tiles, for renderers.  `None` if `y` is out of range.
    pub fn row(&self, y: i32) -> Option<&[Tile]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y * self.width) as usize;
        Some(&self.tiles[start..start + self.width as usize])
    }

    // ── Exits ─────────────────────────────────────────────────────────────

    /// Every `Exit` cell, in row-major order.
    ///
    /// Computed on first call and cached for the life of the map.
    pub fn exits(&self) -> &[Coord] {
        &self.exit_index().cells
    }

    /// The exit closest to `from` by squared distance.
    ///
    /// Ties go to the exit that comes first in row-major order.  Returns
    /// `None` on a map without exits.
    pub fn nearest_exit(&self, from: Coord) -> Option<Coord> {
        let index = self.exit_index();
        let query = [from.x as i64, from.y as i64];
        let mut candidates = index.tree.nearest_neighbor_iter(&query);

        let first = candidates.next()?;
        let best_dist = first.distance_2(&query);
        let mut best_order = first.order;
        for entry in candidates {
            if entry.distance_2(&query) != best_dist {
                break;
            }
            best_order = best_order.min(entry.order);
        }
        Some(index.cells[best_order])
    }

    fn exit_index(&self) -> &ExitIndex {
        self.exits.get_or_init(|| ExitIndex::scan(self))
    }

    // ── Cycles and classrooms ─────────────────────────────────────────────

    /// Number of completed cycle changes.
    #[inline]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Advance the cycle counter and empty every classroom.
    pub fn next_cycle(&mut self) {
        self.cycle += 1;
        for room in self.classrooms.values_mut() {
            room.empty();
        }
    }

    pub fn classroom(&self, id: ClassroomId) -> Option<&Classroom> {
        self.classrooms.get(&id)
    }

    /// All classrooms in ascending id order.
    pub fn classrooms(&self) -> impl Iterator<Item = &Classroom> {
        self.classrooms.values()
    }

    /// All classroom ids in ascending order.
    pub fn classroom_ids(&self) -> Vec<ClassroomId> {
        self.classrooms.keys().copied().collect()
    }

    pub fn classroom_count(&self) -> usize {
        self.classrooms.len()
    }

    /// Allocate the next seat in classroom `id`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::ClassroomNotFound`] if `id` is not registered.
    pub fn next_seat(&mut self, id: ClassroomId) -> SpatialResult<Coord> {
        self.classrooms
            .get_mut(&id)
            .map(Classroom::next_seat)
            .ok_or(SpatialError::ClassroomNotFound(id))
    }

    // ── Indexing ──────────────────────────────────────────────────────────

    /// Row-major index of `c`, or `None` out of bounds.
    #[inline]
    pub(crate) fn index_of(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c).then(|| self.index_unchecked(c.x, c.y))
    }

    #[inline]
    fn index_unchecked(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Index of a coordinate the caller has already bounds-checked.
    #[inline]
    pub(crate) fn coord_index(&self, c: Coord) -> usize {
        self.index_unchecked(c.x, c.y)
    }

    /// Inverse of `index_of`.
    #[inline]
    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((index % w) as i32, (index / w) as i32)
    }
}

// ── GridMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`GridMap`] incrementally, then call [`build`](Self::build).
///
/// All tiles start `Empty`.
///
/// # Example
///
/// ```
/// use campus_core::Coord;
/// use campus_spatial::{GridMapBuilder, Tile};
///
/// let mut b = GridMapBuilder::new(10, 6);
/// b.fill_rect(Coord::new(0, 0), Coord::new(9, 0), Tile::Wall).unwrap();
/// b.set_tile(Coord::new(9, 5), Tile::Exit).unwrap();
/// let room = b.add_classroom(Coord::new(0, 1), Coord::new(8, 5)).unwrap();
/// let mut map = b.build().unwrap();
/// assert_eq!(map.exits(), &[Coord::new(9, 5)]);
/// assert_eq!(map.next_seat(room).unwrap(), Coord::new(2, 3));
/// ```
pub struct GridMapBuilder {
    width:      u32,
    height:     u32,
    tiles:      Vec<Tile>,
    classrooms: BTreeMap<ClassroomId, Classroom>,
}

impl GridMapBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width as usize * height as usize],
            classrooms: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Classify one cell.
    pub fn set_tile(&mut self, c: Coord, tile: Tile) -> SpatialResult<()> {
        if c.x < 0 || c.y < 0 || c.x as u32 >= self.width || c.y as u32 >= self.height {
            return Err(SpatialError::OutOfBounds { x: c.x, y: c.y });
        }
        let i = c.y as usize * self.width as usize + c.x as usize;
        self.tiles[i] = tile;
        Ok(())
    }

    /// Classify every cell of the inclusive rectangle `nw..=se`.
    pub fn fill_rect(&mut self, nw: Coord, se: Coord, tile: Tile) -> SpatialResult<()> {
        for y in nw.y..=se.y {
            for x in nw.x..=se.x {
                self.set_tile(Coord::new(x, y), tile)?;
            }
        }
        Ok(())
    }

    /// Register a classroom with the next free id (ids start at 1).
    ///
    /// # Errors
    ///
    /// [`SpatialError::ClassroomIdsExhausted`] if the next id would reach
    /// [`ClassroomId::INVALID`].
    pub fn add_classroom(&mut self, nw: Coord, se: Coord) -> SpatialResult<ClassroomId> {
        let next = match self.classrooms.keys().next_back() {
            None => Some(1),
            Some(last) => last.0.checked_add(1),
        };
        let id = next
            .map(ClassroomId)
            .filter(|&id| id != ClassroomId::INVALID)
            .ok_or(SpatialError::ClassroomIdsExhausted)?;
        self.insert_classroom(Classroom::new(id, nw, se));
        Ok(id)
    }

    /// Register `room` under its own id, replacing any previous entry.
    pub fn insert_classroom(&mut self, room: Classroom) {
        self.classrooms.insert(room.id, room);
    }

    /// Consume the builder and produce a [`GridMap`].
    ///
    /// # Errors
    ///
    /// [`SpatialError::DimensionTooLarge`] if either side exceeds `i32::MAX`
    /// or the cell count would overflow coordinate arithmetic.
    pub fn build(self) -> SpatialResult<GridMap> {
        let width = i32::try_from(self.width)
            .map_err(|_| SpatialError::DimensionTooLarge { name: "width", value: self.width })?;
        let height = i32::try_from(self.height)
            .map_err(|_| SpatialError::DimensionTooLarge { name: "height", value: self.height })?;
        if width.checked_mul(height).is_none() {
            return Err(SpatialError::DimensionTooLarge { name: "cell count", value: self.width });
        }

        Ok(GridMap {
            width,
            height,
            tiles: self.tiles,
            exits: OnceLock::new(),
            classrooms: self.classrooms,
            cycle: 0,
        })
    }
}
