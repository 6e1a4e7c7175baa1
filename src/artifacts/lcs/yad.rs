//! YadLCS: longest common subsequence through repeated LIS searches
//!
//! ## Algorithm Overview
//!
//! For every element of `y`, the occurrence list tells where the same key
//! appears in `x`. Walking `y` front to back, the solver keeps a list of piles
//! where pile `k` holds the smallest `x` position that ends a common
//! subsequence of length `k + 1` seen so far. Each occurrence (in descending
//! order, so that one `y` element never chains onto itself) is placed with a
//! binary search, exactly like patience sorting for the longest increasing
//! subsequence.
//!
//! A candidate is only placed when enough of `y` remains to turn it into a
//! longer subsequence than the longest one already known.
//!
//! ## Memory
//!
//! Pile tops are nodes in an arena linked to their predecessor. Every node
//! counts its references (children plus being a pile top); a node whose count
//! drops to zero goes to a free list and is reused by the next allocation.
//! A node whose position directly follows its parent's is folded into the
//! parent as a run, so a long unchanged stretch costs a single node.
//!
//! Complexity is O(M log L) time, M being the number of key matches between
//! `x` and `y` and L the LCS length. Memory is O(M) in the worst case.
//!
//! Among several LCS of the same length the result is deterministic, but it is
//! not guaranteed to be the alignment with the smallest edit script.

use crate::artifacts::core::cancel::Cancel;
use crate::artifacts::lcs::indices::{CompressedIndices, IndexEntry};
use crate::artifacts::lcs::sequence::Sequence;

type NodeId = usize;

#[derive(Debug, Clone, Copy)]
struct Node {
    entry: IndexEntry,
    parent: Option<NodeId>,
    refs: usize,
}

/// Arena of backtracking nodes with a free list
#[derive(Debug, Default)]
struct NodePool {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    compress: bool,
    reused: usize,
}

impl NodePool {
    fn new(compress: bool) -> Self {
        Self {
            compress,
            ..Default::default()
        }
    }

    fn x(&self, id: NodeId) -> usize {
        let node = &self.nodes[id];

        match node.entry {
            IndexEntry::Index(x) => x,
            // a run always hangs off the index it extends, see `link`
            IndexEntry::Run(run) => run + node.parent.map_or(0, |head| self.x(head)),
        }
    }

    /// Allocate a node held by one owner
    fn alloc(&mut self, x: usize, parent: Option<NodeId>) -> NodeId {
        let id = match self.free.pop() {
            Some(id) => {
                self.reused += 1;
                id
            }
            None => {
                self.nodes.push(Node {
                    entry: IndexEntry::Index(x),
                    parent: None,
                    refs: 0,
                });
                self.nodes.len() - 1
            }
        };

        self.nodes[id].refs = 1;
        self.link(id, x, parent);
        id
    }

    /// Point `id` at position `x` after `parent`, folding it into the
    /// parent's run when `x` directly follows it
    fn link(&mut self, id: NodeId, x: usize, parent: Option<NodeId>) {
        let (entry, parent) = match parent {
            Some(p) if self.compress => match (self.nodes[p].entry, self.nodes[p].parent) {
                (IndexEntry::Run(run), Some(head)) if x == self.x(head) + run + 1 => {
                    (IndexEntry::Run(run + 1), Some(head))
                }
                (IndexEntry::Index(px), _) if x == px + 1 => (IndexEntry::Run(1), Some(p)),
                _ => (IndexEntry::Index(x), Some(p)),
            },
            _ => (IndexEntry::Index(x), parent),
        };

        if let Some(p) = parent {
            self.nodes[p].refs += 1;
        }

        let node = &mut self.nodes[id];
        node.entry = entry;
        node.parent = parent;
    }

    /// Drop one reference to `id`, recycling every node that becomes
    /// unreachable on the way up
    fn release(&mut self, id: NodeId) {
        let mut current = Some(id);

        while let Some(id) = current {
            let node = &mut self.nodes[id];
            node.refs -= 1;
            if node.refs > 0 {
                break;
            }

            current = node.parent.take();
            self.free.push(id);
        }
    }

    /// Walk from `id` up to the root
    fn chain(&self, id: NodeId) -> CompressedIndices {
        let mut entries = Vec::new();
        let mut current = Some(id);

        while let Some(id) = current {
            let node = &self.nodes[id];
            entries.push(node.entry);
            current = node.parent;
        }

        entries.reverse();
        CompressedIndices::new(entries)
    }
}

#[derive(Debug)]
struct Piles {
    tops: Vec<NodeId>,
    pool: NodePool,
}

impl Piles {
    fn new(capacity: usize, compress: bool) -> Self {
        Self {
            tops: Vec::with_capacity(capacity),
            pool: NodePool::new(compress),
        }
    }

    fn x(&self, pile: usize) -> usize {
        self.pool.x(self.tops[pile])
    }

    /// Binary search `tops[..to]` for the last pile whose position is smaller
    /// than `x`, returning the pile after it and the found top
    fn find(&self, to: usize, x: usize) -> Option<(usize, NodeId)> {
        let pile = self.tops[..to].partition_point(|&top| self.pool.x(top) < x);

        (pile > 0).then(|| (pile, self.tops[pile - 1]))
    }

    fn push(&mut self, x: usize, parent: Option<NodeId>) {
        let id = self.pool.alloc(x, parent);
        self.tops.push(id);
    }

    fn replace(&mut self, pile: usize, x: usize, parent: Option<NodeId>) {
        let old = self.tops[pile];

        if self.pool.nodes[old].refs == 1 {
            // only the pile holds it, relink in place
            let old_parent = self.pool.nodes[old].parent;
            self.pool.link(old, x, parent);
            if let Some(p) = old_parent {
                self.pool.release(p);
            }
            return;
        }

        self.pool.release(old);
        self.tops[pile] = self.pool.alloc(x, parent);
    }

    /// Place the occurrence `x` of a `y` element, only looking at piles before
    /// `to`. `rest` is the number of `y` elements left, this one included.
    /// Returns the bound for the next, smaller, occurrence of the same element.
    fn add(&mut self, to: usize, x: usize, rest: usize) -> usize {
        let len = self.tops.len();

        if let Some((next, parent)) = self.find(to, x) {
            if len - next < rest {
                if next == len {
                    self.push(x, Some(parent));
                } else if x < self.x(next) {
                    self.replace(next, x, Some(parent));
                }
            }
            return next;
        }

        if len == 0 {
            self.push(x, None);
            return 1;
        }

        if len - 1 < rest && x < self.x(0) {
            self.replace(0, x, None);
        }

        0
    }

    fn longest(&self) -> CompressedIndices {
        self.tops
            .last()
            .map(|&top| self.pool.chain(top))
            .unwrap_or_default()
    }
}

/// Result of a raw solve
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YadOutcome {
    pub indices: CompressedIndices,
    pub cancelled: bool,
}

/// Solver configuration for one `x`/`y` pair
#[derive(Debug, Clone)]
pub struct YadLcs<'s, 'a> {
    xs: &'s Sequence<'a>,
    ys: &'s Sequence<'a>,
    compress: bool,
}

impl<'s, 'a> YadLcs<'s, 'a> {
    pub fn new(xs: &'s Sequence<'a>, ys: &'s Sequence<'a>) -> Self {
        Self {
            xs,
            ys,
            compress: true,
        }
    }

    /// Fold consecutive positions into runs while backtracking (default on)
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Positions in `x` of one LCS between `x` and `y`
    ///
    /// When `cancel` fires the loop stops early and the longest subsequence
    /// found so far is returned with `cancelled` set. It is still a common
    /// subsequence, just not necessarily the longest one.
    pub fn solve(&self, cancel: &Cancel) -> YadOutcome {
        let (piles, cancelled) = self.fill(cancel);

        YadOutcome {
            indices: piles.longest(),
            cancelled,
        }
    }

    fn fill(&self, cancel: &Cancel) -> (Piles, bool) {
        let histogram = self.xs.histogram();
        let occurrence = histogram.occurrence(self.ys);
        let mut piles = Piles::new(self.xs.len().min(self.ys.len()), self.compress);
        let mut rest = self.ys.len();
        let mut cancelled = false;

        for xi in &occurrence {
            if cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let mut to = piles.tops.len();
            for &x in xi.iter().rev() {
                to = piles.add(to, x, rest);
            }

            rest -= 1;
        }

        debug_log!(
            "yad: {} matches over {} y elements, {} piles, {} nodes ({} reused), cancelled: {}",
            occurrence.iter().map(|xi| xi.len()).sum::<usize>(),
            self.ys.len(),
            piles.tops.len(),
            piles.pool.nodes.len(),
            piles.pool.reused,
            cancelled
        );

        (piles, cancelled)
    }
}

impl<'a> Sequence<'a> {
    /// Raw LIS-based LCS of `self` against `ys`, without affix or histogram
    /// reduction. See [`YadLcs`].
    pub fn yad_lcs(&self, ys: &Sequence<'a>, cancel: &Cancel) -> YadOutcome {
        YadLcs::new(self, ys).solve(cancel)
    }
}
