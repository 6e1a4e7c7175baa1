use crate::artifacts::diff::token::{TokenLine, parse_token_hunks};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct LineMark: u8 {
        const KEPT = 1;
        const CHUNK_START = 1 << 1;
        const CHUNK_END = 1 << 2;
    }
}

/// Keep only the changed lines and `n` lines of context around each hunk
///
/// Every run of kept lines is wrapped in a chunk start and a chunk end line.
/// A negative `n` is read as zero.
pub fn narrow(n: isize, lines: Vec<TokenLine>) -> Vec<TokenLine> {
    let n = n.max(0).unsigned_abs();
    let mut marks = vec![LineMark::empty(); lines.len()];

    for hunk in parse_token_hunks(&lines) {
        let from = hunk.from().saturating_sub(n);
        let to = hunk.to().saturating_add(n).min(lines.len() - 1);

        for mark in &mut marks[from..=to] {
            mark.insert(LineMark::KEPT);
        }
    }

    for i in 0..marks.len() {
        if !marks[i].contains(LineMark::KEPT) {
            continue;
        }
        if i == 0 || !marks[i - 1].contains(LineMark::KEPT) {
            marks[i].insert(LineMark::CHUNK_START);
        }
        if i + 1 == marks.len() || !marks[i + 1].contains(LineMark::KEPT) {
            marks[i].insert(LineMark::CHUNK_END);
        }
    }

    debug_log!(
        "narrow: kept {} of {} lines",
        marks.iter().filter(|mark| mark.contains(LineMark::KEPT)).count(),
        lines.len()
    );

    let mut narrowed = Vec::new();
    for (line, mark) in lines.into_iter().zip(marks) {
        if !mark.contains(LineMark::KEPT) {
            continue;
        }
        if mark.contains(LineMark::CHUNK_START) {
            narrowed.push(TokenLine::chunk_start());
        }
        narrowed.push(line);
        if mark.contains(LineMark::CHUNK_END) {
            narrowed.push(TokenLine::chunk_end());
        }
    }

    narrowed
}
