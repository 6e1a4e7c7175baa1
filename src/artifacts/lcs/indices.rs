//! LCS index lists and their run-length compression
//!
//! [`Indices`] is the list of positions in `x` that, taken in order, form the
//! LCS between `x` and `y`. Long unchanged stretches produce long runs of
//! consecutive positions, which [`CompressedIndices`] stores as one
//! [`IndexEntry::Index`] followed by an [`IndexEntry::Run`] holding the count
//! of the consecutive positions after it:
//!
//! ```text
//! [1, 2, 3, 4, 5, 10, 20, 21, 22]  ->  [1, +4, 10, 20, +2]
//! ```

use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexEntry {
    /// A literal position
    Index(usize),
    /// `n` positions following the previous literal position one by one
    Run(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Indices(Vec<usize>);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompressedIndices(Vec<IndexEntry>);

impl Indices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    pub fn compress(&self) -> CompressedIndices {
        let mut entries: Vec<IndexEntry> = Vec::new();
        let mut last = None;

        for &index in &self.0 {
            let consecutive = last.is_some_and(|last| index == last + 1);

            match entries.last_mut() {
                Some(IndexEntry::Run(run)) if consecutive => *run += 1,
                Some(IndexEntry::Index(_)) if consecutive => entries.push(IndexEntry::Run(1)),
                _ => entries.push(IndexEntry::Index(index)),
            }

            last = Some(index);
        }

        CompressedIndices(entries)
    }
}

impl Deref for Indices {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[usize]> for Indices {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Indices {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl CompressedIndices {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand every run back into its positions
    ///
    /// A run with no literal position before it starts counting from zero.
    pub fn decompress(&self) -> Indices {
        let mut indices = Vec::with_capacity(self.0.len());
        let mut head = None;

        for entry in &self.0 {
            match *entry {
                IndexEntry::Index(index) => {
                    indices.push(index);
                    head = Some(index);
                }
                IndexEntry::Run(run) => {
                    let start = head.map_or(0, |head| head + 1);
                    indices.extend(start..start + run);
                }
            }
        }

        Indices(indices)
    }
}
