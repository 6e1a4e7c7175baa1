use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::lcs::indices::Indices;
use crate::artifacts::lcs::sequence::Sequence;
use crate::artifacts::lcs::yad::YadLcs;

/// Positions in `x` of an LCS between `x` and `y`
///
/// `cancelled` tells the solve was stopped early: `indices` still form a
/// common subsequence, but maybe not the longest one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub indices: Indices,
    pub cancelled: bool,
}

impl<'a> Sequence<'a> {
    /// LCS of `self` and `ys`
    ///
    /// The common prefix and suffix are taken as is, the elements of each side
    /// that never occur on the other side are dropped, and only what remains
    /// goes through [`YadLcs`].
    pub fn lcs(&self, ys: &Sequence<'a>, cancel: &Cancel) -> Solution {
        self.lcs_with(ys, cancel, true)
    }

    pub fn lcs_with(&self, ys: &Sequence<'a>, cancel: &Cancel, compress: bool) -> Solution {
        let (left, right) = self.common(ys);
        let x_end = self.len() - right;
        let y_end = ys.len() - right;

        let xs_mid = self.slice(left, x_end);
        let ys_mid = ys.slice(left, y_end);

        let x_reduced = xs_mid.reduce(&ys_mid);
        let y_reduced = ys_mid.reduce(&xs_mid);

        debug_log!(
            "lcs: {}x{} elements, common prefix {} suffix {}, reduced to {}x{}",
            self.len(),
            ys.len(),
            left,
            right,
            x_reduced.sequence.len(),
            y_reduced.sequence.len()
        );

        let outcome = YadLcs::new(&x_reduced.sequence, &y_reduced.sequence)
            .with_compression(compress)
            .solve(cancel);

        let decompressed = outcome.indices.decompress();
        let middle = decompressed.iter().map(|&i| left + x_reduced.positions[i]);

        let indices = (0..left).chain(middle).chain(x_end..self.len()).collect();

        Solution {
            indices: Indices::new(indices),
            cancelled: outcome.cancelled,
        }
    }
}
