use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Symbol counts, kept in the order each symbol first appeared.
///
/// That order is the order the tree builder seeds its queue with, so the same input
/// always gives the same tree.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    index: FxHashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add `n` occurrences of `symbol`.
    pub fn add(&mut self, symbol: S, n: usize) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, n));
            }
        }
    }

    /// Count of `symbol`, or 0 if it never appeared.
    pub fn get(&self, symbol: &S) -> usize {
        self.index
            .get(symbol)
            .map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, which is the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(s, n)| (s, *n))
    }
}

impl<S: Clone + Eq + Hash> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq + Hash> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut freqs = FrequencyTable::new();
        iter.into_iter().for_each(|symbol| freqs.add(symbol, 1));
        freqs
    }
}

/// Returns a frequency count of the input symbols.
pub fn count<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
{
    symbols.into_iter().collect()
}
