//! First-occurrence factorization of categorical labels.
//!
//! Each distinct label gets a dense integer id equal to the number of
//! distinct labels seen strictly before its first occurrence. Missing labels
//! (`None`) form a category of their own.

use std::collections::HashMap;
use std::fmt;

/// Insertion-ordered mapping from label to id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorizationMap {
    /// Labels in id order
    labels: Vec<Option<String>>,
    index: HashMap<Option<String>, i64>,
}

impl FactorizationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `label`, assigning the next id if it is unseen
    pub fn get_or_insert(&mut self, label: Option<&str>) -> i64 {
        let key = label.map(str::to_string);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = self.labels.len() as i64;
        self.labels.push(key.clone());
        self.index.insert(key, id);
        id
    }

    pub fn get(&self, label: Option<&str>) -> Option<i64> {
        self.index.get(&label.map(str::to_string)).copied()
    }

    /// The label assigned to `id`. The outer `None` means the id is unknown.
    pub fn label(&self, id: i64) -> Option<Option<&str>> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.labels.get(i))
            .map(|label| label.as_deref())
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(label, id)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, i64)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.as_deref(), id as i64))
    }
}

impl fmt::Display for FactorizationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, id)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label.unwrap_or("NA"), id)?;
        }
        write!(f, "}}")
    }
}

/// Result of [`factorize`]: row-aligned codes and the label mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub codes: Vec<i64>,
    pub mapping: FactorizationMap,
}

/// Assigns each label its first-occurrence id in a single pass
///
/// # Example
/// ```rust
/// use tidyrs::categorical::factorize;
///
/// let result = factorize(["A", "B", "A", "C", "B"].iter().map(|s| Some(*s)));
/// assert_eq!(result.codes, vec![0, 1, 0, 2, 1]);
/// assert_eq!(result.mapping.get(Some("C")), Some(2));
/// ```
pub fn factorize<'a, I>(labels: I) -> Factorization
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut mapping = FactorizationMap::new();
    let codes = labels
        .into_iter()
        .map(|label| mapping.get_or_insert(label))
        .collect();

    Factorization { codes, mapping }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<'a>(values: &[&'a str]) -> Vec<Option<&'a str>> {
        values.iter().map(|s| Some(*s)).collect()
    }

    #[test]
    fn test_first_occurrence_ids() {
        let result = factorize(labels(&["A", "B", "A", "C", "B"]));
        assert_eq!(result.codes, vec![0, 1, 0, 2, 1]);
        assert_eq!(result.mapping.len(), 3);
        assert_eq!(result.mapping.get(Some("A")), Some(0));
        assert_eq!(result.mapping.get(Some("B")), Some(1));
        assert_eq!(result.mapping.get(Some("C")), Some(2));
        assert_eq!(result.mapping.get(Some("D")), None);
    }

    #[test]
    fn test_order_sensitive() {
        let forward = factorize(labels(&["A", "B", "C"]));
        let reversed = factorize(labels(&["C", "B", "A"]));
        assert_eq!(forward.mapping.label(0), Some(Some("A")));
        assert_eq!(reversed.mapping.label(0), Some(Some("C")));
    }

    #[test]
    fn test_missing_is_its_own_category() {
        let result = factorize(vec![Some("BMW"), None, Some("BMW"), None, Some("Audi")]);
        assert_eq!(result.codes, vec![0, 1, 0, 1, 2]);
        assert_eq!(result.mapping.get(None), Some(1));
        assert_eq!(result.mapping.label(1), Some(None));
    }

    #[test]
    fn test_idempotent() {
        let input = labels(&["x", "y", "x", "z"]);
        assert_eq!(factorize(input.clone()), factorize(input));
    }

    #[test]
    fn test_empty_input() {
        let result = factorize(Vec::<Option<&str>>::new());
        assert!(result.codes.is_empty());
        assert!(result.mapping.is_empty());
        assert_eq!(result.mapping.label(0), None);
    }

    #[test]
    fn test_display() {
        let result = factorize(vec![Some("A"), None]);
        assert_eq!(result.mapping.to_string(), "{A: 0, NA: 1}");
    }
}
