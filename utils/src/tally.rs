use std::hash::Hash;

use fnv::FnvHashMap;

/// Occurrence counter keyed by `K`.
#[derive(Clone, Debug)]
pub struct Tally<K>(pub FnvHashMap<K, usize>);

impl<K: Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self {
            0: FnvHashMap::<K, usize>::default(),
        }
    }

    /// Counts one more occurrence of `k` and returns its new count.
    pub fn add(&mut self, k: K) -> usize {
        let count: &mut usize = self.0.entry(k).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, k: &K) -> usize {
        self.0.get(k).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Smallest count, `None` when nothing was counted.
    pub fn min_count(&self) -> Option<usize> {
        self.0.values().min().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.0.iter().map(|(k, c)| (k, *c))
    }
}

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally: Tally<K> = Tally::new();
        iter.into_iter().for_each(|k| {
            tally.add(k);
        });
        tally
    }
}
