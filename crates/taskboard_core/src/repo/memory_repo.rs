//! Vec-backed repository.
//!
//! # Invariants
//! - Collection order is insertion order.
//! - Unaffected records are never moved or rewritten by `update`/`delete`.

use crate::model::id::RecordId;
use crate::repo::{Record, RepoError, RepoResult, Repository};

/// In-memory repository keeping records in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a repository from seed records, rejecting duplicate ids.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.create(record)?;
        }
        Ok(repo)
    }

    /// Wraps records whose ids are already known to be distinct.
    pub(crate) fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Borrowing view over the stored records.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> RepoResult<Vec<T>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &RecordId) -> RepoResult<Option<T>> {
        Ok(self.position(id).map(|index| self.records[index].clone()))
    }

    fn create(&mut self, record: T) -> RepoResult<RecordId> {
        if self.position(record.id()).is_some() {
            return Err(RepoError::DuplicateId(record.id().clone()));
        }
        let id = record.id().clone();
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, id: &RecordId, patch: T::Patch) -> RepoResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        let record = &mut self.records[index];
        record.apply_patch(patch);
        Ok(record.clone())
    }

    fn delete(&mut self, id: &RecordId) -> RepoResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        Ok(self.records.remove(index))
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepository;
    use crate::model::id::RecordId;
    use crate::repo::{Record, RepoError, Repository};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        label: String,
    }

    impl Record for Row {
        type Patch = String;

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn apply_patch(&mut self, patch: String) {
            self.label = patch;
        }
    }

    fn row(id: &str, label: &str) -> Row {
        Row {
            id: id.into(),
            label: label.to_string(),
        }
    }

    #[test]
    fn from_records_keeps_given_order() {
        let repo = InMemoryRepository::from_records(vec![row("2", "b"), row("1", "a")]);
        assert_eq!(repo.count(), 2);
        assert_eq!(repo.records(), &[row("2", "b"), row("1", "a")]);
        assert_eq!(
            repo.get(&"1".into()).expect("lookup"),
            Some(row("1", "a"))
        );
    }

    #[test]
    fn seeded_rejects_duplicate_ids() {
        let err = InMemoryRepository::seeded(vec![row("1", "a"), row("1", "b")])
            .expect_err("duplicate ids must be rejected");
        assert_eq!(err, RepoError::DuplicateId("1".into()));
    }

    #[test]
    fn update_touches_only_matching_row() {
        let mut repo =
            InMemoryRepository::seeded(vec![row("1", "a"), row("2", "b"), row("3", "c")])
                .expect("seed should load");

        let updated = repo
            .update(&"2".into(), "bee".to_string())
            .expect("row 2 exists");
        assert_eq!(updated.label, "bee");
        assert_eq!(
            repo.records(),
            &[row("1", "a"), row("2", "bee"), row("3", "c")]
        );
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut repo =
            InMemoryRepository::seeded(vec![row("1", "a"), row("2", "b"), row("3", "c")])
                .expect("seed should load");

        let removed = repo.delete(&"2".into()).expect("row 2 exists");
        assert_eq!(removed.label, "b");
        assert_eq!(repo.records(), &[row("1", "a"), row("3", "c")]);
    }

    #[test]
    fn missing_id_is_not_found_and_leaves_rows_untouched() {
        let mut repo =
            InMemoryRepository::seeded(vec![row("1", "a")]).expect("seed should load");

        assert_eq!(
            repo.delete(&"9".into()).unwrap_err(),
            RepoError::NotFound("9".into())
        );
        assert_eq!(
            repo.update(&"9".into(), "x".to_string()).unwrap_err(),
            RepoError::NotFound("9".into())
        );
        assert_eq!(repo.records(), &[row("1", "a")]);
    }
}
