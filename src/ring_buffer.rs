//! Fixed-capacity circular buffer used for the phase histories.

/// Bounded FIFO that overwrites its oldest slot once full.
///
/// Storage is allocated once at construction; pushes past capacity evict by
/// index instead of shifting elements.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    capacity: usize,
    // Index of the oldest element once the buffer is full, 0 before that
    head: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// Create an empty buffer. A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    /// Append a value, evicting the oldest one if the buffer is full
    pub fn push(&mut self, value: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
        } else {
            self.slots[self.head] = value;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + '_ {
        let (wrapped, oldest) = self.slots.split_at(self.head);
        oldest.iter().chain(wrapped.iter()).copied()
    }

    /// Iterate over the newest `n` values, oldest first
    pub fn iter_last(&self, n: usize) -> impl Iterator<Item = T> + '_ {
        self.iter().skip(self.len().saturating_sub(n))
    }

    /// Copy of the contents, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_until_full() {
        let mut buffer = RingBuffer::new(3);
        assert!(buffer.is_empty());

        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.to_vec(), vec![1, 2]);
        assert_eq!(buffer.len(), 2);

        buffer.push(3);
        assert_eq!(buffer.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_oldest_evicted_on_overflow() {
        let mut buffer = RingBuffer::new(3);
        for value in 1..=5 {
            buffer.push(value);
        }

        // Window is full, 1 and 2 should be gone
        assert_eq!(buffer.to_vec(), vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_iter_last() {
        let mut buffer = RingBuffer::new(5);
        for value in 1..=7 {
            buffer.push(value);
        }

        assert_eq!(buffer.iter_last(3).collect::<Vec<_>>(), vec![5, 6, 7]);
        // Asking for more than is stored returns everything
        assert_eq!(buffer.iter_last(10).collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
        assert_eq!(buffer.iter_last(0).count(), 0);
    }

    #[test]
    fn test_clear_resets_order() {
        let mut buffer = RingBuffer::new(2);
        buffer.push('a');
        buffer.push('b');
        buffer.push('c');
        buffer.clear();

        assert!(buffer.is_empty());
        buffer.push('d');
        assert_eq!(buffer.to_vec(), vec!['d']);

        // Capacity survives the clear
        buffer.push('e');
        buffer.push('f');
        assert_eq!(buffer.to_vec(), vec!['e', 'f']);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut buffer = RingBuffer::new(0);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.to_vec(), vec![2]);
    }

    proptest! {
        #[test]
        fn prop_keeps_newest_values(capacity in 1usize..16, values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut buffer = RingBuffer::new(capacity);
            for &value in &values {
                buffer.push(value);
            }

            prop_assert!(buffer.len() <= capacity);
            let expected: Vec<i32> = values.iter().skip(values.len().saturating_sub(capacity)).copied().collect();
            prop_assert_eq!(buffer.to_vec(), expected);
        }
    }
}
