use crate::artifacts::lcs::sequence::{Key, Sequence};
use std::collections::HashMap;

/// Positions of every key of a sequence, in ascending order per key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    positions: HashMap<Key, Vec<usize>>,
}

impl Histogram {
    pub fn new(xs: &Sequence<'_>) -> Self {
        let mut positions: HashMap<Key, Vec<usize>> = HashMap::new();

        for (i, element) in xs.iter().enumerate() {
            positions.entry(element.key()).or_default().push(i);
        }

        Self { positions }
    }

    pub fn get(&self, key: &Key) -> &[usize] {
        self.positions.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.positions.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// For each element of `ys`, where the same key occurs in the histogram's
    /// sequence. An empty slice means the element can't be part of the LCS.
    pub fn occurrence<'h>(&'h self, ys: &Sequence<'_>) -> Vec<&'h [usize]> {
        ys.iter().map(|element| self.get(&element.key())).collect()
    }
}

impl Sequence<'_> {
    pub fn histogram(&self) -> Histogram {
        Histogram::new(self)
    }
}
