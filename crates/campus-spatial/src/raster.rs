//! Build a [`GridMap`] from a colour-coded raster.
//!
//! # Pixel encoding
//!
//! | Colour `(r, g, b)`          | Tile  | Classroom effect                         |
//! |-----------------------------|-------|------------------------------------------|
//! | `(0, 0, 0)`                 | Wall  |                                          |
//! | `(255, 255, 255)`           | Empty |                                          |
//! | `(127, 127, 127)`           | Exit  |                                          |
//! | `(r, 0, 0)`                 | Wall  | room `r` north-west corner               |
//! | `(r, 0, b)`, `b != 0`       | Wall  | room `r` south-east corner               |
//! | `(r, g, b)`, `g != 0`       | Empty | room `r` exists (no corner)              |
//!
//! Rooms are registered the first time any pixel carrying their red key is
//! seen in row-major order and numbered from 1 in that order.  A room whose
//! corner pixels are missing keeps `(0, 0)` for the missing corner.
//!
//! Decoding image files is left to the caller: pass the decoded pixels as a
//! packed, row-major RGB8 buffer.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use campus_core::{ClassroomId, Coord};

use crate::{Classroom, GridMap, GridMapBuilder, SpatialError, SpatialResult, Tile};

/// Colour used for walls.
pub const WALL_RGB: [u8; 3] = [0, 0, 0];
/// Colour used for open floor.
pub const EMPTY_RGB: [u8; 3] = [255, 255, 255];
/// Colour used for exits.
pub const EXIT_RGB: [u8; 3] = [0x7F, 0x7F, 0x7F];

/// How one pixel is interpreted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PixelClass {
    Tile(Tile),
    NorthWestCorner { key: u8 },
    SouthEastCorner { key: u8 },
    /// Open floor tagged with a room key.
    RoomFloor { key: u8 },
}

impl PixelClass {
    /// The tile this pixel becomes.
    pub fn tile(self) -> Tile {
        match self {
            PixelClass::Tile(t) => t,
            PixelClass::NorthWestCorner { .. } | PixelClass::SouthEastCorner { .. } => Tile::Wall,
            PixelClass::RoomFloor { .. } => Tile::Empty,
        }
    }

    /// The room key carried by this pixel, if any.
    pub fn room_key(self) -> Option<u8> {
        match self {
            PixelClass::Tile(_) => None,
            PixelClass::NorthWestCorner { key }
            | PixelClass::SouthEastCorner { key }
            | PixelClass::RoomFloor { key } => Some(key),
        }
    }
}

/// Classify a single RGB pixel.
pub fn classify_pixel(rgb: [u8; 3]) -> PixelClass {
    match rgb {
        WALL_RGB  => PixelClass::Tile(Tile::Wall),
        EMPTY_RGB => PixelClass::Tile(Tile::Empty),
        EXIT_RGB  => PixelClass::Tile(Tile::Exit),
        [r, 0, 0] => PixelClass::NorthWestCorner { key: r },
        [r, 0, _] => PixelClass::SouthEastCorner { key: r },
        [r, _, _] => PixelClass::RoomFloor { key: r },
    }
}

/// Ingest a `width × height` packed RGB8 buffer.
///
/// # Errors
///
/// [`SpatialError::Raster`] if `pixels.len() != width * height * 3`;
/// [`SpatialError::DimensionTooLarge`] for oversized images.
pub fn load_from_rgb(width: u32, height: u32, pixels: &[u8]) -> SpatialResult<GridMap> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(SpatialError::Raster(format!(
            "expected {expected} bytes for a {width}x{height} RGB8 image, got {}",
            pixels.len()
        )));
    }

    let mut builder = GridMapBuilder::new(width, height);
    // key → room under construction; ids follow first-seen order.
    let mut rooms: HashMap<u8, Classroom> = HashMap::new();

    for (i, px) in pixels.chunks_exact(3).enumerate() {
        let at = Coord::new((i % width as usize) as i32, (i / width as usize) as i32);
        let class = classify_pixel([px[0], px[1], px[2]]);
        builder.set_tile(at, class.tile())?;

        let Some(key) = class.room_key() else {
            continue;
        };
        let next_id = rooms.len() + 1;
        let room = match rooms.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            // At most 256 keys exist, so the id always fits.
            Entry::Vacant(e) => {
                let id = ClassroomId(next_id as u16);
                e.insert(Classroom::new(id, Coord::default(), Coord::default()))
            }
        };
        match class {
            PixelClass::NorthWestCorner { .. } => room.nw = at,
            PixelClass::SouthEastCorner { .. } => room.se = at,
            _ => {}
        }
    }

    for room in rooms.into_values() {
        builder.insert_classroom(room);
    }
    builder.build()
}
