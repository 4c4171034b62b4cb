//! Draft list of needs not yet submitted

pub mod types;

pub use types::*;

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by [`DraftList`]
///
/// These indicate a wiring bug in the caller, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("index {index} out of range for draft list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, session-local collection of validated needs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftList {
    entries: Vec<Need>,
}

impl DraftList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a need and return its index
    pub fn add(&mut self, need: Need) -> usize {
        self.entries.push(need);
        self.entries.len() - 1
    }

    /// Replace the need at `index`
    pub fn update(&mut self, index: usize, need: Need) -> Result<(), DraftError> {
        self.check(index)?;
        self.entries[index] = need;
        Ok(())
    }

    /// Remove the need at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Result<Need, DraftError> {
        self.check(index)?;
        Ok(self.entries.remove(index))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&Need> {
        self.entries.get(index)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Need> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts derived from the current contents
    pub fn stats(&self) -> DraftStats {
        let brigades: HashSet<_> = self.entries.iter().map(|n| n.brigade_id).collect();
        let categories: HashSet<_> = self.entries.iter().map(|n| n.category_name.as_str()).collect();
        DraftStats {
            total: self.entries.len(),
            brigades: brigades.len(),
            categories: categories.len(),
        }
    }

    /// The entries stripped down to submission payloads, in order
    pub fn payloads(&self) -> Vec<NeedPayload> {
        self.entries.iter().map(Need::to_payload).collect()
    }

    fn check(&self, index: usize) -> Result<(), DraftError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(DraftError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a DraftList {
    type Item = &'a Need;
    type IntoIter = std::slice::Iter<'a, Need>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ValueKind;

    fn need(brigade_id: u32, category: &str, value: f64) -> Need {
        Need {
            brigade_id,
            item_id: 2,
            size_id: None,
            value,
            note: None,
            brigade_name: format!("Brigade {}", brigade_id),
            item_name: "Helmet".to_string(),
            category_name: category.to_string(),
            size_value: None,
            value_kind: ValueKind::Quantity,
        }
    }

    #[test]
    fn test_add_then_remove() {
        let mut list = DraftList::new();
        assert_eq!(list.add(need(1, "PPE", 1.0)), 0);
        let removed = list.remove(0).unwrap();
        assert_eq!(removed.brigade_id, 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_returns_previous_length_and_allows_duplicates() {
        let mut list = DraftList::new();
        assert_eq!(list.add(need(1, "PPE", 1.0)), 0);
        assert_eq!(list.add(need(1, "PPE", 1.0)), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_in_place() {
        let mut list = DraftList::new();
        list.add(need(1, "PPE", 1.0));
        list.update(0, need(2, "Tools", 7.0)).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|n| n.brigade_id), Some(2));
    }

    #[test]
    fn test_out_of_range() {
        let mut list = DraftList::new();
        list.add(need(1, "PPE", 1.0));
        assert_eq!(
            list.remove(1),
            Err(DraftError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            list.update(3, need(1, "PPE", 1.0)),
            Err(DraftError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_shifts_entries() {
        let mut list = DraftList::new();
        list.add(need(1, "PPE", 1.0));
        list.add(need(2, "PPE", 2.0));
        list.add(need(3, "PPE", 3.0));
        list.remove(1).unwrap();
        let ids: Vec<_> = list.iter().map(|n| n.brigade_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_stats() {
        let mut list = DraftList::new();
        assert_eq!(list.stats(), DraftStats::default());
        list.add(need(1, "PPE", 1.0));
        list.add(need(2, "PPE", 2.0));
        list.add(need(1, "PPE", 3.0));
        assert_eq!(
            list.stats(),
            DraftStats {
                total: 3,
                brigades: 2,
                categories: 1
            }
        );
    }

    #[test]
    fn test_payloads_strip_display_fields() {
        let mut list = DraftList::new();
        let mut entry = need(1, "PPE", 4.0);
        entry.note = Some("spare".to_string());
        list.add(entry);
        list.clear();
        assert!(list.payloads().is_empty());

        list.add(need(2, "PPE", 5.0));
        let value = serde_json::to_value(list.payloads()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "id_brigada": 2, "id_item": 2, "valor": 5.0 }])
        );
    }
}
