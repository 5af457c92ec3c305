//! Synthetic school floor plan, drawn as a colour-coded RGB8 raster.
//!
//! ```text
//!  ┌────┬────┬────┬────┐
//!  │ 10 │ 20 │ 30 │ 40 │
//!  └─ ──┴─ ──┴─ ──┴─ ──┘
//!  E     corridor       E
//!  ┌─ ──┬─ ──┬─ ──┬─ ──┐
//!  │ 50 │ 60 │ 70 │ 80 │
//!  └────┴────┴────┴────┘
//! ```
//!
//! Eight classrooms, 20×20 tiles including their walls, each with a
//! two-tile door onto a central corridor that has an exit at either end.
//! Room keys are the red channel values shown above.

use campus_spatial::raster::{EMPTY_RGB, EXIT_RGB, WALL_RGB};

const ROOM_SIDE:     usize = 20;
const ROOMS_PER_ROW: usize = 4;
const CORRIDOR:      usize = 9;

pub const WIDTH:  u32 = (ROOM_SIDE * ROOMS_PER_ROW + 1) as u32;
pub const HEIGHT: u32 = (ROOM_SIDE * 2 + CORRIDOR) as u32;

struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    fn new() -> Self {
        let mut pixels = Vec::with_capacity(WIDTH as usize * HEIGHT as usize * 3);
        for _ in 0..WIDTH * HEIGHT {
            pixels.extend_from_slice(&EMPTY_RGB);
        }
        Self { pixels }
    }

    fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * WIDTH as usize + x) * 3;
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }

    /// One walled classroom with its corners tagged and a door in the wall
    /// facing the corridor.
    fn room(&mut self, key: u8, x0: usize, y0: usize, door_on_bottom: bool) {
        let (x1, y1) = (x0 + ROOM_SIDE - 1, y0 + ROOM_SIDE - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let edge = x == x0 || x == x1 || y == y0 || y == y1;
                self.put(x, y, if edge { WALL_RGB } else { [key, 200, 200] });
            }
        }
        let door_y = if door_on_bottom { y1 } else { y0 };
        let mid = x0 + ROOM_SIDE / 2;
        self.put(mid - 1, door_y, EMPTY_RGB);
        self.put(mid, door_y, EMPTY_RGB);

        self.put(x0, y0, [key, 0, 0]);
        self.put(x1, y1, [key, 0, 1]);
    }
}

/// Render the floor plan.  Returns the packed pixel buffer.
pub fn render() -> Vec<u8> {
    let mut c = Canvas::new();
    let (w, h) = (WIDTH as usize, HEIGHT as usize);

    // Outer walls.
    for x in 0..w {
        c.put(x, 0, WALL_RGB);
        c.put(x, h - 1, WALL_RGB);
    }
    for y in 0..h {
        c.put(0, y, WALL_RGB);
        c.put(w - 1, y, WALL_RGB);
    }

    for i in 0..ROOMS_PER_ROW {
        let x0 = i * ROOM_SIDE;
        c.room(10 * (i as u8 + 1), x0, 0, true);
        c.room(10 * (i as u8 + 5), x0, ROOM_SIDE + CORRIDOR, false);
    }

    // Exits at both ends of the corridor.
    let mid = ROOM_SIDE + CORRIDOR / 2;
    for y in mid - 1..=mid + 1 {
        c.put(0, y, EXIT_RGB);
        c.put(w - 1, y, EXIT_RGB);
    }

    c.pixels
}
