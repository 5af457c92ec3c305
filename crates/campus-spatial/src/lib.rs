//! `campus-spatial`: tile grid, classrooms, raster ingestion, and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`tile`]      | `Tile` classification (`Empty`, `Wall`, `Exit`)            |
//! | [`classroom`] | `Classroom`: rectangular room with sequential seats        |
//! | [`map`]       | `GridMap` (tiles + exit cache + classroom registry), builder |
//! | [`raster`]    | `load_from_rgb`: colour-coded RGB8 buffer → `GridMap`      |
//! | [`search`]    | `a_star`, `Router` trait, `Route`, `AStarRouter`           |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod classroom;
pub mod error;
pub mod map;
pub mod raster;
pub mod search;
pub mod tile;


pub use classroom::Classroom;
pub use error::{SpatialError, SpatialResult};
pub use map::{GridMap, GridMapBuilder};
pub use raster::{PixelClass, classify_pixel, load_from_rgb};
pub use search::{AStarRouter, Route, Router, a_star, path_cost, squared_distance_to, step_cost};
pub use tile::Tile;
