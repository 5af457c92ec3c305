//! Rectangular classrooms and sequential seat allocation.
//!
//! # Seat layout
//!
//! Seats form a row-major lattice two tiles apart, starting two tiles in from
//! the north-west corner:
//!
//! ```text
//! row_width = (se.x - nw.x) >> 1
//! row, col  = divmod(seats_taken, row_width)
//! seat      = (nw.x + 2 + 2*col, nw.y + 2 + 2*row)
//! ```
//!
//! Nothing checks the seat against the south-east corner.  Once a room is
//! over capacity, seats continue past its far wall; room size is not a hard
//! limit in the simulation.

use campus_core::{ClassroomId, Coord};

/// A rectangular seating region with a monotonically increasing seat counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classroom {
    pub id: ClassroomId,
    /// North-west corner.
    pub nw: Coord,
    /// South-east corner.
    pub se: Coord,
    seats_taken: u32,
}

impl Classroom {
    pub fn new(id: ClassroomId, nw: Coord, se: Coord) -> Self {
        Self { id, nw, se, seats_taken: 0 }
    }

    /// Number of seats handed out since the last [`empty`](Self::empty).
    #[inline]
    pub fn seats_taken(&self) -> u32 {
        self.seats_taken
    }

    /// Seats per row, derived from the horizontal span.
    #[inline]
    pub fn row_width(&self) -> u32 {
        ((self.se.x - self.nw.x) >> 1).max(0) as u32
    }

    /// Nominal seat count of the lattice inside the rectangle.
    ///
    /// Informational only; [`next_seat`](Self::next_seat) never consults it.
    pub fn capacity(&self) -> u32 {
        let rows = ((self.se.y - self.nw.y) >> 1).max(0) as u32;
        self.row_width() * rows
    }

    /// `true` once more seats have been handed out than the lattice holds.
    pub fn is_overfull(&self) -> bool {
        self.seats_taken > self.capacity()
    }

    /// Reset the seat counter.  Called by the owning map at each cycle.
    pub fn empty(&mut self) {
        self.seats_taken = 0;
    }

    /// Hand out the next seat and advance the counter.
    pub fn next_seat(&mut self) -> Coord {
        let seat = self.seat_at(self.seats_taken);
        self.seats_taken += 1;
        seat
    }

    /// The coordinate of seat number `n` (0-based).
    ///
    /// A room narrower than two tiles has a row width of zero; its seats are
    /// stacked in a single column, one row per seat.
    pub fn seat_at(&self, n: u32) -> Coord {
        let (row, col) = match self.row_width() {
            0 => (n, 0),
            width => (n / width, n % width),
        };
        Coord::new(
            self.nw.x + 2 + 2 * col as i32,
            self.nw.y + 2 + 2 * row as i32,
        )
    }
}
