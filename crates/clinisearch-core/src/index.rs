//! In-memory document index with immutable snapshots

use crate::error::{Error, Result};
use crate::scorer::searchable_text;
use crate::types::Record;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct Entry {
    record: Record,
    searchable: String,
}

/// Ordered, immutable set of records. Cloning shares the underlying snapshot.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    entries: Arc<[Entry]>,
}

impl DocumentIndex {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            push_entry(&mut entries, &mut seen, record)?;
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::<Entry>::new().into(),
        }
    }

    /// Build a new snapshot with `records` appended after the existing ones.
    /// `self` is left untouched.
    pub fn extended(&self, records: Vec<Record>) -> Result<Self> {
        let mut seen: HashSet<String> = self.all().map(|r| r.id.clone()).collect();
        let mut entries: Vec<Entry> = self
            .entries
            .iter()
            .map(|e| Entry {
                record: e.record.clone(),
                searchable: e.searchable.clone(),
            })
            .collect();
        for record in records {
            push_entry(&mut entries, &mut seen, record)?;
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Records in insertion order
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.all().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (position, record, searchable text) in insertion order
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &Record, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (pos, &e.record, e.searchable.as_str()))
    }
}

impl Default for DocumentIndex {
    fn default() -> Self {
        Self::empty()
    }
}

fn push_entry(entries: &mut Vec<Entry>, seen: &mut HashSet<String>, record: Record) -> Result<()> {
    if record.body.trim().is_empty() {
        return Err(Error::EmptyBody(record.id));
    }
    if !seen.insert(record.id.clone()) {
        return Err(Error::DuplicateId(record.id));
    }
    let searchable = searchable_text(&record);
    entries.push(Entry { record, searchable });
    Ok(())
}

/// Index handle that can be swapped wholesale between queries.
///
/// Readers take a snapshot and never observe a half-applied update.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<DocumentIndex>,
}

impl SharedIndex {
    pub fn new(index: DocumentIndex) -> Self {
        Self {
            current: RwLock::new(index),
        }
    }

    pub fn snapshot(&self) -> DocumentIndex {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn replace(&self, records: Vec<Record>) -> Result<()> {
        let next = DocumentIndex::new(records)?;
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
        Ok(())
    }

    /// Append records. Validation happens before the swap, so a failed
    /// extend leaves the current snapshot in place.
    pub fn extend(&self, records: Vec<Record>) -> Result<()> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = guard.extended(records)?;
        *guard = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, body: &str) -> Record {
        Record::new(id, "", body, Utc::now())
    }

    #[test]
    fn test_preserves_insertion_order() {
        let index = DocumentIndex::new(vec![
            record("b", "second"),
            record("a", "first"),
            record("c", "third"),
        ])
        .unwrap();
        let ids: Vec<_> = index.all().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let result = DocumentIndex::new(vec![record("a", "one"), record("a", "two")]);
        assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_rejects_empty_body() {
        let result = DocumentIndex::new(vec![record("a", "   ")]);
        assert!(matches!(result, Err(Error::EmptyBody(id)) if id == "a"));
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let base = DocumentIndex::new(vec![record("a", "one")]).unwrap();
        let grown = base.extended(vec![record("b", "two")]).unwrap();
        assert_eq!(base.len(), 1);
        assert_eq!(grown.len(), 2);
        assert!(grown.get("b").is_some());
        assert!(base.extended(vec![record("a", "dup")]).is_err());
    }

    #[test]
    fn test_shared_snapshot_isolated_from_replace() {
        let shared = SharedIndex::new(DocumentIndex::new(vec![record("a", "one")]).unwrap());
        let before = shared.snapshot();

        shared
            .replace(vec![record("x", "new"), record("y", "newer")])
            .unwrap();

        assert_eq!(before.len(), 1);
        assert!(before.get("a").is_some());
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn test_shared_failed_extend_keeps_snapshot() {
        let shared = SharedIndex::new(DocumentIndex::new(vec![record("a", "one")]).unwrap());
        assert!(shared.extend(vec![record("b", "")]).is_err());
        assert_eq!(shared.snapshot().len(), 1);

        shared.extend(vec![record("b", "two")]).unwrap();
        assert_eq!(shared.snapshot().len(), 2);
    }

    #[test]
    fn test_entries_carry_searchable_text() {
        let index =
            DocumentIndex::new(vec![Record::new("a", "Title", "Body", Utc::now())]).unwrap();
        let (pos, rec, text) = index.entries().next().unwrap();
        assert_eq!(pos, 0);
        assert_eq!(rec.id, "a");
        assert_eq!(text, "title body");
    }
}
