//! `StudentStore`: every student in the run, indexed by `StudentId`.
//!
//! Ids are dense: student `i` lives at index `i`.  The store is built once by
//! [`StudentStoreBuilder`](crate::StudentStoreBuilder) and never grows.

use campus_core::StudentId;

use crate::{AgentError, AgentResult, Student};

#[derive(Clone, Debug, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub(crate) fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Number of students.
    #[inline]
    pub fn count(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    #[inline]
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.get_mut(id.index())
    }

    /// Like [`get_mut`](Self::get_mut) but reports a missing id as an error.
    pub fn try_get_mut(&mut self, id: StudentId) -> AgentResult<&mut Student> {
        self.students
            .get_mut(id.index())
            .ok_or(AgentError::StudentNotFound(id))
    }

    /// Iterator over all `StudentId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        (0..self.students.len() as u32).map(StudentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.iter_mut()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    /// Step every student once.  Returns how many actually moved.
    pub fn advance_all(&mut self) -> usize {
        self.students.iter_mut().map(Student::advance).filter(|&moved| moved).count()
    }

    /// Number of students with a non-empty path.
    pub fn moving_count(&self) -> usize {
        self.students.iter().filter(|s| !s.is_idle()).count()
    }
}
