use heapless::Vec;

/// Append-only storage for at most `N` samples, kept in insertion order.
///
/// Backed by an inline `heapless::Vec`, so the whole capacity is reserved up
/// front and never grows.  Once full, further pushes are dropped rather than
/// overwriting anything; only [`clear`](Self::clear) makes room again.
#[derive(Debug, Clone)]
pub struct BoundedBuffer<T, const N: usize> {
    samples: Vec<T, N>,
}

impl<T, const N: usize> BoundedBuffer<T, N> {
    pub const fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Append `value` if there is room.  Returns whether it was stored.
    pub fn push(&mut self, value: T) -> bool {
        self.samples.push(value).is_ok()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop every stored sample.  Capacity is unchanged.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Stored samples, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }
}

impl<T, const N: usize> Default for BoundedBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full_then_drop() {
        let mut buf = BoundedBuffer::<u32, 3>::new();
        assert!(buf.is_empty());
        assert!(buf.push(1));
        assert!(buf.push(2));
        assert!(!buf.is_full());
        assert!(buf.push(3));
        assert!(buf.is_full());

        assert!(!buf.push(4));
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn len_never_exceeds_capacity() {
        let mut buf = BoundedBuffer::<i32, 7>::new();
        for i in 0..20 {
            buf.push(i);
            assert!(buf.len() <= buf.capacity());
            assert_eq!(buf.is_full(), buf.len() == 7);
        }
    }

    #[test]
    fn clear_keeps_capacity_and_allows_reuse() {
        let mut buf = BoundedBuffer::<f32, 2>::new();
        buf.push(1.0);
        buf.push(2.0);
        buf.clear();

        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.iter().count(), 0);

        buf.push(9.0);
        let seen: std::vec::Vec<f32> = buf.iter().copied().collect();
        assert_eq!(seen, [9.0]);
    }

    #[test]
    fn iteration_is_insertion_order_and_restartable() {
        let mut buf = BoundedBuffer::<u16, 4>::default();
        for v in [4, 1, 3] {
            buf.push(v);
        }
        let first: std::vec::Vec<u16> = (&buf).into_iter().copied().collect();
        let second: std::vec::Vec<u16> = buf.iter().copied().collect();
        assert_eq!(first, [4, 1, 3]);
        assert_eq!(first, second);
    }
}
