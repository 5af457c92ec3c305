//! A single student: where they are, where they are going, and which
//! classroom each cycle sends them to.
//!
//! # Movement
//!
//! A student moves one cell per tick by consuming the front of its queued
//! path.  The first queued cell of a fresh route is the student's own
//! position, so the first step after routing leaves it in place.  Routing
//! replaces the whole queue; nothing is ever appended.

use std::collections::VecDeque;

use campus_core::{Coord, StudentId};

use crate::Timetable;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id:        StudentId,
    pub name:      String,
    pub position:  Coord,
    pub timetable: Timetable,
    /// Cells still to visit, front first.  Empty means idle.
    path:          VecDeque<Coord>,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>, position: Coord, timetable: Timetable) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            timetable,
            path: VecDeque::new(),
        }
    }

    /// Replace the queued path.  An empty iterator makes the student idle.
    pub fn set_path(&mut self, cells: impl IntoIterator<Item = Coord>) {
        self.path.clear();
        self.path.extend(cells);
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    /// Take one step along the path.
    ///
    /// Pops the front cell into `position` and returns `true`; returns
    /// `false` and changes nothing when the path is empty.
    pub fn advance(&mut self) -> bool {
        match self.path.pop_front() {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }

    /// The final queued cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.path.back().copied()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of queued cells.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> impl Iterator<Item = Coord> + '_ {
        self.path.iter().copied()
    }
}
