use core::cell::Cell;
use core::fmt;

use num_traits::NumCast;
use thiserror::Error;

use crate::buffer::BoundedBuffer;
use crate::sample::Sample;

/// Why [`StatisticsSeries::try_add`] did not store a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejected {
    /// The sample was the missing-reading sentinel.
    #[error("missing reading")]
    Missing,
    /// The window already holds `N` samples.
    #[error("window is full")]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Aggregates<T> {
    mean: Option<T>,
    min:  T,
    max:  T,
}

/// A window of up to `N` valid samples with cached min / max / mean.
///
/// Aggregates are recomputed from the stored samples on the first read after
/// a mutation and reused until the next one.  The cache sits behind `Cell`, so
/// getters take `&self` and the series cannot be shared across threads.
pub struct StatisticsSeries<T, const N: usize> {
    buffer: BoundedBuffer<T, N>,
    cache:  Cell<Option<Aggregates<T>>>,
    stale:  Cell<bool>,
}

impl<T: Sample, const N: usize> StatisticsSeries<T, N> {
    pub const fn new() -> Self {
        Self {
            buffer: BoundedBuffer::new(),
            cache:  Cell::new(None),
            stale:  Cell::new(false),
        }
    }

    /// Store `value`, silently ignoring missing readings and a full window.
    pub fn add(&mut self, value: T) {
        let _ = self.try_add(value);
    }

    /// Store `value`, reporting why it was refused.
    ///
    /// A refused sample leaves the series exactly as it was.
    pub fn try_add(&mut self, value: T) -> Result<(), Rejected> {
        if value.is_missing() {
            return Err(Rejected::Missing);
        }
        if !self.buffer.push(value) {
            return Err(Rejected::Full);
        }
        self.stale.set(true);
        Ok(())
    }

    /// Empty the window and reset every aggregate to unset.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cache.set(None);
        self.stale.set(false);
    }

    /// Start a new window if the current one is full.
    ///
    /// Calling this right before [`add`](Self::add) turns "drop the sample,
    /// the window is full" into "close the window, start over from this
    /// sample".
    pub fn clear_if_full(&mut self) {
        if self.buffer.is_full() {
            self.clear();
        }
    }

    /// Mean of the window.  `None` when empty, and for integer types also
    /// when the running sum or the sample count does not fit in `T`.
    pub fn average(&self) -> Option<T> {
        self.aggregates().and_then(|a| a.mean)
    }

    pub fn min(&self) -> Option<T> {
        self.aggregates().map(|a| a.min)
    }

    pub fn max(&self) -> Option<T> {
        self.aggregates().map(|a| a.max)
    }

    /// Mean of the finished window, then [`clear`](Self::clear).
    pub fn average_and_clear(&mut self) -> Option<T> {
        let average = self.average();
        self.clear();
        average
    }

    pub fn buffer(&self) -> &BoundedBuffer<T, N> {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Whether the next aggregate read has to walk the window.
    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    fn aggregates(&self) -> Option<Aggregates<T>> {
        if self.stale.get() {
            self.cache.set(compute(&self.buffer));
            self.stale.set(false);
        }
        self.cache.get()
    }
}

/// One pass over the window.  `None` only for an empty window; the mean is
/// dropped on its own when the sum overflows or the count does not fit in `T`.
fn compute<T: Sample, const N: usize>(buffer: &BoundedBuffer<T, N>) -> Option<Aggregates<T>> {
    let mut samples = buffer.iter().copied();
    let first = samples.next()?;

    let (mut sum, mut min, mut max) = (Some(first), first, first);
    for v in samples {
        sum = sum.and_then(|s| s.accumulate(v));
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let count = <T as NumCast>::from(buffer.len());
    let mean = sum.zip(count).map(|(sum, count)| sum / count);
    Some(Aggregates { mean, min, max })
}

impl<T: Sample, const N: usize> Default for StatisticsSeries<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample + fmt::Debug, const N: usize> fmt::Debug for StatisticsSeries<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatisticsSeries")
            .field("samples", &self.buffer.as_slice())
            .field("capacity", &N)
            .field("cache", &self.cache.get())
            .field("stale", &self.stale.get())
            .finish()
    }
}
