//! Builds the huffman tree from a frequency table.
//!
//! Leaves are seeded into a min-priority queue in frequency table order. The two lightest
//! nodes are popped and joined under a new internal node until one node is left.
//!
//! Ties are broken first-in, first-out. Every node pushed onto the queue is stamped with
//! a sequence number and the queue orders by (weight, sequence). A merged node is
//! stamped when it is pushed, so it sorts after every older node of the same weight.
//! This pins the tree, and so the codes, for a given frequency table.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::tools::freq_count::FrequencyTable;

/// A node of the huffman tree. Each internal node owns both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Join two nodes under a new internal node. `left` takes the 0 branch.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The symbol held by a leaf. Internal nodes have none.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    /// The (left, right) children of an internal node. Leaves have none.
    pub fn children(&self) -> Option<(&HuffNode<S>, &HuffNode<S>)> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Follow one branch: false goes left, true goes right.
    pub fn child(&self, bit: bool) -> Option<&HuffNode<S>> {
        self.children()
            .map(|(left, right)| if bit { right } else { left })
    }
}

/// Queue entry. Orders by lowest weight, then lowest sequence number, so the
/// std max-heap pops the lightest and oldest node first.
struct Queued<S> {
    weight: usize,
    seq: usize,
    node: HuffNode<S>,
}

impl<S> Queued<S> {
    fn new(node: HuffNode<S>, seq: usize) -> Self {
        Self {
            weight: node.weight(),
            seq,
            node,
        }
    }
}

impl<S> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<S> Eq for Queued<S> {}

impl<S> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Queued<S> {
    /// Reversed so that BinaryHeap behaves as a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A complete huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    /// Total weight, which equals the length of the counted input.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Number of leaves, i.e. the alphabet size.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node.children() {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => count += 1,
            }
        }
        count
    }

    /// Depth of the deepest leaf. A lone leaf root has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some((left, right)) = node.children() {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
        deepest
    }
}

impl<S: Debug> Display for HuffmanTree<S> {
    /// One line per node, prefixed by a '-' for each level below the root.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, layer)) = stack.pop() {
            write!(f, "{}", "-".repeat(layer))?;
            match node {
                HuffNode::Leaf { symbol, weight } => writeln!(f, "{}[{:?}]", weight, symbol)?,
                HuffNode::Internal {
                    weight,
                    left,
                    right,
                } => {
                    writeln!(f, "{}", weight)?;
                    stack.push((right.as_ref(), layer + 1));
                    stack.push((left.as_ref(), layer + 1));
                }
            }
        }
        Ok(())
    }
}

/// Build a huffman tree from the frequency table. Fails with EmptyAlphabet if the
/// table has no symbols.
pub fn build<S>(freqs: &FrequencyTable<S>) -> Result<HuffmanTree<S>>
where
    S: Clone + Eq + Hash + Debug,
{
    let mut queue = freqs
        .iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| Queued::new(HuffNode::leaf(symbol.clone(), weight), seq))
        .collect::<BinaryHeap<_>>();
    let mut seq = queue.len();

    // Pare the queue down to one single node, two at a time. An empty queue has no
    // root; a queue holding one node is done.
    let mut merges = 0;
    let root = loop {
        let a = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;
        let Some(b) = queue.pop() else {
            break a.node;
        };
        let node = HuffNode::merge(a.node, b.node);
        merges += 1;
        if let Some((left, right)) = node.children() {
            trace!(
                "merge {}: L {}{} + R {}{} -> {} (queue {})",
                merges,
                left.weight(),
                describe(left),
                right.weight(),
                describe(right),
                node.weight(),
                queue.len() + 1
            );
        }
        queue.push(Queued::new(node, seq));
        seq += 1;
    };

    debug!(
        "Built huffman tree from {} symbols with {} merges, total weight {}",
        freqs.len(),
        merges,
        root.weight()
    );
    Ok(HuffmanTree { root })
}

/// Short trace label for a node: its symbol if it has one.
fn describe<S: Debug>(node: &HuffNode<S>) -> String {
    node.symbol()
        .map_or_else(String::new, |symbol| format!("[{:?}]", symbol))
}

#[cfg(test)]
mod test {
    use super::{build, HuffNode};
    use crate::error::HuffmanError;
    use crate::tools::freq_count::{count, FrequencyTable};

    #[test]
    fn empty_test() {
        let freqs = count("".chars());
        assert_eq!(build(&freqs), Err(HuffmanError::EmptyAlphabet));
    }

    #[test]
    fn single_symbol_test() {
        let tree = build(&count("aaaa".chars())).unwrap();
        assert_eq!(tree.root(), &HuffNode::leaf('a', 4));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn two_symbol_test() {
        let tree = build(&count("aabb".chars())).unwrap();
        let expected = HuffNode::merge(HuffNode::leaf('a', 2), HuffNode::leaf('b', 2));
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.weight(), 4);
    }

    #[test]
    fn fifo_tie_break_test() {
        // c, d, b, r are popped in insertion order among equals. The (c,d) node of
        // weight 2 joins the queue after b and r, so b and r merge first.
        let tree = build(&count("abracadabra".chars())).unwrap();
        let cd = HuffNode::merge(HuffNode::leaf('c', 1), HuffNode::leaf('d', 1));
        let br = HuffNode::merge(HuffNode::leaf('b', 2), HuffNode::leaf('r', 2));
        let expected = HuffNode::merge(HuffNode::leaf('a', 5), HuffNode::merge(cd, br));
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn merged_node_waits_its_turn_test() {
        // x and y merge into weight 2, which ties with z. z is older so it is popped first.
        let mut freqs = FrequencyTable::new();
        freqs.add('x', 1);
        freqs.add('y', 1);
        freqs.add('z', 2);
        let tree = build(&freqs).unwrap();
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left, &HuffNode::leaf('z', 2));
        assert_eq!(right.weight(), 2);
        assert!(!right.is_leaf());
    }

    #[test]
    fn merge_count_test() {
        let text = "the quick brown fox jumps over the lazy dog";
        let freqs = count(text.chars());
        let tree = build(&freqs).unwrap();
        assert_eq!(tree.leaf_count(), freqs.len());
        assert_eq!(tree.weight(), text.len());
        assert!(tree.depth() < freqs.len());
    }

    #[test]
    fn one_merge_per_internal_node_test() {
        // n leaves are joined by exactly n - 1 merges, so the tree has n - 1 internal nodes.
        let freqs = count((0..200u32).flat_map(|i| std::iter::repeat(i).take(1 + i as usize % 7)));
        let tree = build(&freqs).unwrap();
        let mut internal = 0;
        let mut stack = vec![tree.root()];
        while let Some(node) = stack.pop() {
            if let Some((left, right)) = node.children() {
                internal += 1;
                stack.push(left);
                stack.push(right);
            }
        }
        assert_eq!(tree.leaf_count(), 200);
        assert_eq!(internal, 199);
    }

    #[test]
    fn deterministic_test() {
        let freqs = count("mississippi river".chars());
        assert_eq!(build(&freqs).unwrap(), build(&freqs).unwrap());
    }

    #[test]
    fn display_test() {
        let tree = build(&count("aab".chars())).unwrap();
        assert_eq!(tree.to_string(), "3\n-1['b']\n-2['a']\n");
    }

    #[test]
    fn child_test() {
        let tree = build(&count("aabb".chars())).unwrap();
        assert_eq!(tree.root().child(false).and_then(|n| n.symbol()), Some(&'a'));
        assert_eq!(tree.root().child(true).and_then(|n| n.symbol()), Some(&'b'));
        assert!(HuffNode::leaf('a', 1).child(true).is_none());
    }
}
