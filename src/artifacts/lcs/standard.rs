use crate::artifacts::lcs::sequence::Sequence;

/// Textbook O(|x|·|y|) dynamic programming LCS
///
/// Slow and memory hungry, it serves as the reference the fast solver is
/// checked against.
pub fn standard_lcs<'a>(xs: &Sequence<'a>, ys: &Sequence<'_>) -> Sequence<'a> {
    let (xe, ye) = (xs.elements(), ys.elements());
    let (w, h) = (xe.len(), ye.len());

    // table[i][j] is the LCS length of xe[i..] and ye[j..]
    let mut table = vec![vec![0usize; h + 1]; w + 1];
    for i in (0..w).rev() {
        for j in (0..h).rev() {
            table[i][j] = if xe[i].key() == ye[j].key() {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut indices = Vec::with_capacity(table[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < w && j < h {
        if xe[i].key() == ye[j].key() {
            indices.push(i);
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    xs.sub(&indices)
}
