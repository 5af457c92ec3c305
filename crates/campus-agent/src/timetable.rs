//! Per-student class timetables.

use std::fmt;

use campus_core::ClassroomId;

/// The classroom a student attends in each cycle, indexed by cycle number.
///
/// The same classroom may appear more than once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable(Vec<ClassroomId>);

impl Timetable {
    pub fn new(classes: Vec<ClassroomId>) -> Self {
        Self(classes)
    }

    /// The classroom for `cycle`, or `None` past the end of the timetable.
    #[inline]
    pub fn get(&self, cycle: u32) -> Option<ClassroomId> {
        self.0.get(cycle as usize).copied()
    }

    /// Number of cycles covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ClassroomId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = ClassroomId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<ClassroomId>> for Timetable {
    fn from(classes: Vec<ClassroomId>) -> Self {
        Self(classes)
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id.0)?;
        }
        write!(f, "]")
    }
}
