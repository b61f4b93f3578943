use std::{cmp::Ordering, collections::BinaryHeap};

struct HeapItem<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for HeapItem<T> {
    fn eq(&self, other: &HeapItem<T>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapItem<T> {}

impl<T> PartialOrd for HeapItem<T> {
    fn partial_cmp(&self, other: &HeapItem<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip priority and sequence to make this a min-heap popping the oldest
        // item first among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-heap ordered by a key function supplied at construction.
///
/// `add` and `pop` are O(log n), `peek` is O(1). Keys are compared with
/// [`f64::total_cmp`]. Among items with equal keys the one added first is
/// popped first, which decides which of several equally cheap paths a search
/// returns.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    heap: BinaryHeap<HeapItem<T>>,
    key: F,
    sequence: u64,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    pub fn new(key: F) -> Self {
        Self::with_capacity(key, 0)
    }

    pub fn with_capacity(key: F, capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            key,
            sequence: 0,
        }
    }

    pub fn add(&mut self, item: T) {
        let priority = (self.key)(&item);
        self.heap.push(HeapItem {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|heap_item| heap_item.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|heap_item| &heap_item.item)
    }

    /// Key of the item [`PriorityQueue::peek`] would return.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|heap_item| heap_item.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_key_order() {
        let mut queue = PriorityQueue::new(|value: &f64| *value);
        queue.extend([4.5, 1.0, 3.25, 0.5, 2.0]);

        let mut popped = Vec::new();
        while let Some(value) = queue.pop() {
            popped.push(value);
        }

        assert_eq!(popped, vec![0.5, 1.0, 2.0, 3.25, 4.5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = PriorityQueue::new(|(_, cost): &(&str, f64)| *cost);
        assert!(queue.peek().is_none());

        queue.add(("Sibiu", 140.0));
        queue.add(("Zerind", 75.0));
        queue.add(("Timisoara", 118.0));

        assert_eq!(queue.peek(), Some(&("Zerind", 75.0)));
        assert_eq!(queue.peek_priority(), Some(75.0));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(("Zerind", 75.0)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut queue = PriorityQueue::new(|(_, cost): &(char, u32)| *cost as f64);
        queue.extend([('a', 2), ('b', 1), ('c', 2), ('d', 1), ('e', 2)]);

        let order: String = std::iter::from_fn(|| queue.pop())
            .map(|(name, _)| name)
            .collect();

        assert_eq!(order, "bdace");
    }

    #[test]
    fn test_infinite_keys_sort_last() {
        let mut queue = PriorityQueue::new(|value: &f64| *value);
        queue.extend([f64::INFINITY, 7.0, 0.0]);

        assert_eq!(queue.pop(), Some(0.0));
        assert_eq!(queue.pop(), Some(7.0));
        assert_eq!(queue.pop(), Some(f64::INFINITY));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::with_capacity(|value: &i32| *value as f64, 8);
        queue.extend(0..5);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
