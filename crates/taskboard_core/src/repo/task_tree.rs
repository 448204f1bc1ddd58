//! Arena-backed repository for nested records.
//!
//! # Responsibility
//! - Store nested task hierarchies as flat records keyed by id.
//! - Keep a parent -> ordered child ids index next to the records.
//!
//! # Invariants
//! - Every `parent_id` stored in the arena points to a live record.
//! - Child listing follows insertion order within one parent.
//! - `list()` is a depth-first pre-order walk, so the flat view and the
//!   nested view are always derived from the same records.
//! - Deleting a record removes its whole subtree.

use crate::model::id::RecordId;
use crate::repo::{RepoError, RepoResult, Repository, TreeRecord};
use std::collections::HashMap;

/// One entry of a depth-annotated tree walk.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry<T> {
    /// Zero for root-level records.
    pub depth: usize,
    pub record: T,
}

/// Arena of flat records with an explicit child index.
#[derive(Debug, Clone)]
pub struct TaskTree<T: TreeRecord> {
    records: HashMap<RecordId, T>,
    roots: Vec<RecordId>,
    children: HashMap<RecordId, Vec<RecordId>>,
}

impl<T: TreeRecord> Default for TaskTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TreeRecord> TaskTree<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            roots: Vec::new(),
            children: HashMap::new(),
        }
    }

    /// Builds a tree from seed records. Parents must precede their children.
    pub fn seeded(records: impl IntoIterator<Item = T>) -> RepoResult<Self> {
        let mut tree = Self::new();
        for record in records {
            tree.create(record)?;
        }
        Ok(tree)
    }

    /// Direct children of `parent`, or root records when `parent` is `None`.
    pub fn children(&self, parent: Option<&RecordId>) -> Vec<&T> {
        self.child_ids(parent)
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Depth-first pre-order walk with nesting depth.
    pub fn walk(&self) -> Vec<TreeEntry<&T>> {
        let mut out = Vec::with_capacity(self.records.len());
        let mut stack = self
            .roots
            .iter()
            .rev()
            .map(|id| (0usize, id))
            .collect::<Vec<_>>();

        while let Some((depth, id)) = stack.pop() {
            let Some(record) = self.records.get(id) else {
                continue;
            };
            out.push(TreeEntry { depth, record });
            if let Some(child_ids) = self.children.get(id) {
                stack.extend(child_ids.iter().rev().map(|child| (depth + 1, child)));
            }
        }
        out
    }

    /// Ids of `id` and all of its descendants, pre-order.
    pub fn subtree_ids(&self, id: &RecordId) -> Vec<RecordId> {
        let mut out = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(child_ids) = self.children.get(&current) {
                stack.extend(child_ids.iter().rev().cloned());
            }
            out.push(current);
        }
        out
    }

    fn child_ids(&self, parent: Option<&RecordId>) -> &[RecordId] {
        match parent {
            None => &self.roots,
            Some(parent_id) => self
                .children
                .get(parent_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

impl<T: TreeRecord> Repository<T> for TaskTree<T> {
    fn list(&self) -> RepoResult<Vec<T>> {
        Ok(self
            .walk()
            .into_iter()
            .map(|entry| entry.record.clone())
            .collect())
    }

    fn get(&self, id: &RecordId) -> RepoResult<Option<T>> {
        Ok(self.records.get(id).cloned())
    }

    fn create(&mut self, record: T) -> RepoResult<RecordId> {
        let id = record.id().clone();
        if self.records.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }

        match record.parent_id() {
            Some(parent_id) => {
                if !self.records.contains_key(parent_id) {
                    return Err(RepoError::ParentNotFound(parent_id.clone()));
                }
                self.children
                    .entry(parent_id.clone())
                    .or_default()
                    .push(id.clone());
            }
            None => self.roots.push(id.clone()),
        }

        self.records.insert(id.clone(), record);
        Ok(id)
    }

    fn update(&mut self, id: &RecordId, patch: T::Patch) -> RepoResult<T> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        record.apply_patch(patch);
        Ok(record.clone())
    }

    fn delete(&mut self, id: &RecordId) -> RepoResult<T> {
        let parent_id = self
            .records
            .get(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?
            .parent_id()
            .cloned();

        match parent_id {
            Some(parent_id) => {
                if let Some(siblings) = self.children.get_mut(&parent_id) {
                    siblings.retain(|sibling| sibling != id);
                }
            }
            None => self.roots.retain(|root| root != id),
        }

        let mut removed = None;
        for subtree_id in self.subtree_ids(id) {
            self.children.remove(&subtree_id);
            let record = self.records.remove(&subtree_id);
            if &subtree_id == id {
                removed = record;
            }
        }
        removed.ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}
