use std::mem;
use std::ops::Index;

use crate::constants::BUFFER_SIZE;

/// A named categorical column.
/// Every value is a string; there is no numeric interpretation.
#[derive(Debug, Clone)]
pub struct Feature {
    name: String,
    vals: Vec<String>,
}

impl Feature {
    /// Construct an empty column named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn append(&mut self, value: String) {
        self.vals.push(value);
    }

    pub(crate) fn into_vals(self) -> Vec<String> {
        self.vals
    }

    pub(crate) fn replace_name<T>(&mut self, name: T) -> String
        where T: ToString,
    {
        mem::replace(&mut self.name, name.to_string())
    }

    /// Returns the number of distinct values this column takes.
    pub fn distinct_value_count(&self) -> usize {
        let mut values = self.vals.iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();
        values.len()
    }

    /// Checks whether the column takes a single value
    /// over the rows in `indices`.
    /// An empty `indices` is constant vacuously.
    pub(crate) fn is_constant_on(&self, indices: &[usize]) -> bool {
        let mut iter = indices.iter().map(|&i| self.vals[i].as_str());
        match iter.next() {
            Some(head) => iter.all(|v| v == head),
            None => true,
        }
    }
}

impl Index<usize> for Feature {
    type Output = str;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, vals: &[&str]) -> Feature {
        let mut feat = Feature::new(name);
        for v in vals {
            feat.append(v.to_string());
        }
        feat
    }

    #[test]
    fn test_name_01() {
        let name = "test-001";
        let f = Feature::new(name);
        assert_eq!(name, f.name());
    }

    #[test]
    fn test_index_01() {
        let f = column("test-002", &["Sunny", "Rainy", "Sunny"]);
        let result = &f[1];
        let expect = "Rainy";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_distinct_value_count_01() {
        let f = column("test-003", &["a", "b", "a", "c", "b"]);
        let result = f.distinct_value_count();
        let expect = 3;
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_distinct_value_count_02() {
        let f = Feature::new("test-004");
        let result = f.distinct_value_count();
        let expect = 0;
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_is_constant_on_01() {
        let f = column("test-005", &["x", "x", "y", "x"]);
        assert!(f.is_constant_on(&[0, 1, 3]));
        assert!(!f.is_constant_on(&[0, 2]));
    }

    #[test]
    fn test_is_constant_on_02() {
        let f = column("test-006", &["x", "y"]);
        assert!(f.is_constant_on(&[]));
    }

    #[test]
    fn test_replace_name_01() {
        let mut f = Feature::new("old");
        let old = f.replace_name("new");
        assert_eq!(old, "old", "expected old, got {old}.");
        assert_eq!(f.name(), "new");
    }
}
