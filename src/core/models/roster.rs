//! Ordered, id-keyed collection of editable record rows

use crate::core::error::RosterError;

/// Stable synthetic key of a roster row
pub type RecordId = u64;

/// Rows the user is editing, in display order.
///
/// Ids are handed out in increasing order and never reused, so an id stays
/// valid across removals of other rows. A roster always holds at least one
/// row; removing the last one is refused and [`Roster::reset`] goes back to a
/// single blank row.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<T> {
    rows: Vec<(RecordId, T)>,
    next_id: RecordId,
}

impl<T: Default + Clone> Roster<T> {
    /// Create a roster holding one blank row with id 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![(1, T::default())],
            next_id: 2,
        }
    }

    /// Build a roster from existing records, keeping their order
    ///
    /// An empty input yields a roster with one blank row.
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = T>>(records: I) -> Self {
        let rows: Vec<(RecordId, T)> = (1..).zip(records).collect();
        if rows.is_empty() {
            return Self::new();
        }
        let next_id = rows.len() as RecordId + 1;
        Self { rows, next_id }
    }

    /// Append a record and return its id
    pub fn add(&mut self, record: T) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, record));
        id
    }

    /// Append a blank row and return its id
    pub fn add_blank(&mut self) -> RecordId {
        self.add(T::default())
    }

    /// Remove a row by id
    ///
    /// # Errors
    /// Returns `RosterError::LastRecord` if it is the only row, or
    /// `RosterError::UnknownId` if no row has this id.
    pub fn remove(&mut self, id: RecordId) -> Result<T, RosterError> {
        let pos = self.position(id)?;
        if self.rows.len() == 1 {
            return Err(RosterError::LastRecord);
        }
        Ok(self.rows.remove(pos).1)
    }

    /// Edit a row in place
    ///
    /// # Errors
    /// Returns `RosterError::UnknownId` if no row has this id.
    pub fn update<F: FnOnce(&mut T)>(&mut self, id: RecordId, edit: F) -> Result<(), RosterError> {
        let pos = self.position(id)?;
        edit(&mut self.rows[pos].1);
        Ok(())
    }

    /// Look up a row by id
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.iter().find(|(rid, _)| *rid == id).map(|(_, r)| r)
    }

    /// Iterate over `(id, record)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &T)> {
        self.rows.iter().map(|(id, r)| (*id, r))
    }

    /// Ids in display order
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|(id, _)| *id).collect()
    }

    /// Snapshot of the records in display order, ready for the engine
    #[must_use]
    pub fn records(&self) -> Vec<T> {
        self.rows.iter().map(|(_, r)| r.clone()).collect()
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row and start over with a single blank one
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn position(&self, id: RecordId) -> Result<usize, RosterError> {
        self.rows
            .iter()
            .position(|(rid, _)| *rid == id)
            .ok_or(RosterError::UnknownId(id))
    }
}

impl<T: Default + Clone> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::Grade;
    use crate::core::models::SubjectRecord;

    #[test]
    fn test_new_roster_has_one_blank_row() {
        let roster: Roster<SubjectRecord> = Roster::new();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.ids(), vec![1]);
        assert_eq!(roster.get(1), Some(&SubjectRecord::default()));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut roster: Roster<SubjectRecord> = Roster::new();
        let second = roster.add_blank();
        let third = roster.add_blank();
        roster.remove(third).unwrap();
        let fourth = roster.add_blank();

        assert_eq!(second, 2);
        assert_eq!(fourth, 4);
        assert_eq!(roster.ids(), vec![1, 2, 4]);
    }

    #[test]
    fn test_cannot_remove_last_row() {
        let mut roster: Roster<SubjectRecord> = Roster::new();
        assert_eq!(roster.remove(1), Err(RosterError::LastRecord));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut roster: Roster<SubjectRecord> = Roster::new();
        roster.add_blank();
        assert_eq!(roster.remove(42), Err(RosterError::UnknownId(42)));
    }

    #[test]
    fn test_update_edits_single_field() {
        let mut roster: Roster<SubjectRecord> = Roster::new();
        let id = roster.add_blank();
        roster.update(id, |s| s.credit = 4.0).unwrap();
        roster.update(id, |s| s.grade = Some(Grade::A)).unwrap();

        let edited = roster.get(id).unwrap();
        assert!((edited.credit - 4.0).abs() < f64::EPSILON);
        assert_eq!(edited.grade, Some(Grade::A));
        assert_eq!(roster.get(1), Some(&SubjectRecord::default()));
        assert_eq!(
            roster.update(99, |s| s.credit = 1.0),
            Err(RosterError::UnknownId(99))
        );
    }

    #[test]
    fn test_from_records_and_reset() {
        let mut roster = Roster::from_records(vec![
            SubjectRecord::new(None, 3.0, Some(Grade::B)),
            SubjectRecord::new(None, 2.0, Some(Grade::C)),
        ]);
        assert_eq!(roster.ids(), vec![1, 2]);
        assert_eq!(roster.add_blank(), 3);

        roster.reset();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.records(), vec![SubjectRecord::default()]);
    }

    #[test]
    fn test_from_empty_records() {
        let roster: Roster<SubjectRecord> = Roster::from_records(Vec::new());
        assert_eq!(roster.len(), 1);
    }
}
