//! A* path search over the 8-connected tile grid, and the routing trait.
//!
//! # Costs
//!
//! An axis-aligned step costs `1.0`.  A diagonal step costs
//! `1.0 + DIAGONAL_EXTRA_COST` where the extra is `√2 − 1` written out as a
//! constant, so path costs are built by plain addition and never call `sqrt`.
//!
//! # Frontier order
//!
//! The frontier is a binary min-heap keyed by `(f, g, coord)`: lowest `f`
//! first, then lowest `g`, then the smaller coordinate in `(x, y)` order.
//! The key is total, so a search over the same map always expands cells in
//! the same order and returns the same path.
//!
//! A cell is pushed only when its `g` strictly improves; a popped entry whose
//! `g` is worse than the recorded one is stale and skipped.  This gives the
//! same expansions as a frontier *set* with in-place updates.
//!
//! # Heuristic
//!
//! Callers normally pass [`squared_distance_to`] the goal.  It overestimates
//! the remaining cost beyond a few tiles, so returned paths are not always
//! the cheapest.  They are always found when one exists, because the loop
//! only stops when the goal is popped or the frontier is empty.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use campus_core::Coord;

use crate::{GridMap, SpatialError, SpatialResult};

/// Cost of a horizontal or vertical step.
pub const AXIAL_STEP_COST: f64 = 1.0;

/// What a diagonal step costs on top of an axial one (`√2 − 1`).
pub const DIAGONAL_EXTRA_COST: f64 = 0.414_213_562_37;

/// Sentinel for "no predecessor" in the came-from array.
const NO_PARENT: u32 = u32::MAX;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Cells from start to goal inclusive.  Empty if the goal is unreachable.
    pub cells: Vec<Coord>,
    /// Accumulated step cost at the goal; `f64::INFINITY` if unreachable.
    pub cost: f64,
}

impl Route {
    pub fn unreachable() -> Self {
        Self { cells: Vec::new(), cost: f64::INFINITY }
    }

    /// `true` if no path was found.
    pub fn is_unreachable(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of movement ticks needed to walk the route.
    ///
    /// The first cell is the starting position, which a student re-enters on
    /// its first step, so this equals the number of cells.
    pub fn ticks(&self) -> usize {
        self.cells.len()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// `campus-sim` routes students through this trait so the search can be
/// swapped without touching the scheduler.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so that the `parallel` feature of
/// `campus-sim` can share one router across Rayon workers.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// An unreachable goal is `Ok` with an empty route; only an off-grid
    /// start or an off-grid or walled goal is an error.
    fn route(&self, map: &GridMap, from: Coord, to: Coord) -> SpatialResult<Route>;
}

/// A* with the squared-distance heuristic.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, map: &GridMap, from: Coord, to: Coord) -> SpatialResult<Route> {
        search(from, to, squared_distance_to(to), map)
    }
}

// ── Public helpers ────────────────────────────────────────────────────────────

/// Heuristic: squared Euclidean distance from a cell to `goal`.
pub fn squared_distance_to(goal: Coord) -> impl Fn(Coord) -> f64 + Send + Sync {
    move |c| c.squared_distance(goal) as f64
}

/// Cost of stepping between two adjacent cells.
#[inline]
pub fn step_cost(from: Coord, to: Coord) -> f64 {
    if from.is_diagonal_to(to) {
        AXIAL_STEP_COST + DIAGONAL_EXTRA_COST
    } else {
        AXIAL_STEP_COST
    }
}

/// Accumulated cost of walking `path`, using the same step rule as the
/// search.  `0.0` for paths shorter than two cells.
pub fn path_cost(path: &[Coord]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

/// Find a path from `start` to `goal` through valid cells.
///
/// Returns the cells from `start` to `goal` inclusive, `[start]` when the two
/// are equal, or an empty `Vec` if the goal cannot be reached.  Only the
/// neighbours are filtered for walls, so `start` may be any in-bounds cell.
///
/// # Errors
///
/// [`SpatialError::InvalidInput`] if `start` is out of bounds, or `goal` is
/// out of bounds or a wall.
pub fn a_star<H>(start: Coord, goal: Coord, heuristic: H, map: &GridMap) -> SpatialResult<Vec<Coord>>
where
    H: Fn(Coord) -> f64,
{
    search(start, goal, heuristic, map).map(|route| route.cells)
}

// ── A* internals ──────────────────────────────────────────────────────────────

type FrontierKey = Reverse<(OrderedFloat<f64>, OrderedFloat<f64>, Coord)>;

fn search<H>(start: Coord, goal: Coord, heuristic: H, map: &GridMap) -> SpatialResult<Route>
where
    H: Fn(Coord) -> f64,
{
    // The start only has to be on the grid: a student standing on a wall
    // (an overflow seat) can still step off it.
    let start_idx = map.index_of(start).ok_or(SpatialError::InvalidInput(start))?;
    let goal_idx = map
        .index_of(goal)
        .filter(|_| map.is_valid(goal))
        .ok_or(SpatialError::InvalidInput(goal))?;

    let n = map.cell_count();
    // g[i] = best known cost from start to cell i.
    let mut g = vec![f64::INFINITY; n];
    // came_from[i] = predecessor index, NO_PARENT if none.
    let mut came_from = vec![NO_PARENT; n];

    g[start_idx] = 0.0;

    let mut frontier: BinaryHeap<FrontierKey> = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(heuristic(start)), OrderedFloat(0.0), start)));

    while let Some(Reverse((_, OrderedFloat(cost), current))) = frontier.pop() {
        let cur_idx = map.coord_index(current);
        if cost > g[cur_idx] {
            continue;
        }
        if cur_idx == goal_idx {
            return Ok(Route {
                cells: reconstruct(map, &came_from, goal_idx),
                cost,
            });
        }

        for neighbour in map.neighbours(current) {
            let nb_idx = map.coord_index(neighbour);
            let tentative = cost + step_cost(current, neighbour);
            if tentative < g[nb_idx] {
                came_from[nb_idx] = cur_idx as u32;
                g[nb_idx] = tentative;
                let f = tentative + heuristic(neighbour);
                frontier.push(Reverse((OrderedFloat(f), OrderedFloat(tentative), neighbour)));
            }
        }
    }

    Ok(Route::unreachable())
}

fn reconstruct(map: &GridMap, came_from: &[u32], goal_idx: usize) -> Vec<Coord> {
    let mut cells = vec![map.coord_of(goal_idx)];
    let mut cur = goal_idx;
    while came_from[cur] != NO_PARENT {
        cur = came_from[cur] as usize;
        cells.push(map.coord_of(cur));
    }
    cells.reverse();
    cells
}
