//! Problem size reduction before the LCS solve
//!
//! - [`Sequence::common`] finds the common prefix and suffix. If the beginning
//!   and the ending of both sequences are equal they must be in the LCS.
//! - [`Sequence::reduce`] drops the elements that don't occur at all in the
//!   other sequence; they can never be part of the LCS.

use crate::artifacts::lcs::histogram::Histogram;
use crate::artifacts::lcs::sequence::Sequence;

/// A sequence with the elements that can't match removed, plus where each kept
/// element was in the original sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced<'a> {
    pub sequence: Sequence<'a>,
    pub positions: Vec<usize>,
}

impl<'a> Sequence<'a> {
    /// Length of the common prefix and of the common suffix
    ///
    /// The suffix is searched in what remains after the prefix, so their sum
    /// never exceeds the length of the shorter sequence.
    pub fn common(&self, ys: &Sequence<'_>) -> (usize, usize) {
        let (xs, ys) = (self.elements(), ys.elements());

        let left = xs
            .iter()
            .zip(ys)
            .take_while(|(x, y)| x.key() == y.key())
            .count();

        let right = xs[left..]
            .iter()
            .rev()
            .zip(ys[left..].iter().rev())
            .take_while(|(x, y)| x.key() == y.key())
            .count();

        (left, right)
    }

    /// Keep only the elements whose key also appears in `ys`
    pub fn reduce(&self, ys: &Sequence<'_>) -> Reduced<'a> {
        let histogram = Histogram::new(ys);

        let (positions, elements) = self
            .iter()
            .enumerate()
            .filter(|(_, element)| histogram.contains(&element.key()))
            .map(|(i, element)| (i, *element))
            .unzip();

        Reduced {
            sequence: Sequence::new(self.granularity(), elements),
            positions,
        }
    }
}
