//! Minimum-ordered priority structure for Huffman tree construction.
//!
//! A hand-rolled binary min-heap over `(weight, seq)` keys. The sequence
//! number is assigned at insertion time and breaks ties between equal
//! weights in FIFO order, so tree construction is fully deterministic:
//! the same histogram always yields the same tree and therefore the same
//! container bytes. `std::collections::BinaryHeap` is deliberately not used
//! because its ordering among equal keys is unspecified.

/// An entry in the heap: a payload value keyed by aggregate weight.
#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    weight: u64,
    /// Insertion sequence number; lower pops first among equal weights.
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

/// Binary min-heap keyed by `(weight, insertion order)`.
///
/// `push` and `pop_min` are both O(log n).
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of entries currently in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `value` with the given `weight`.
    pub fn push(&mut self, weight: u64, value: T) {
        let entry = Entry {
            weight,
            seq: self.next_seq,
            value,
        };
        self.next_seq += 1;

        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the `(weight, value)` with the lowest weight, or
    /// `None` when the heap is empty. Equal weights pop in insertion order.
    pub fn pop_min(&mut self) -> Option<(u64, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.weight, entry.value))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].key() >= self.entries[parent].key() {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.entries[left].key() < self.entries[smallest].key() {
                smallest = left;
            }
            if right < len && self.entries[right].key() < self.entries[smallest].key() {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}
