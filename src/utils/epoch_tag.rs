//! Scratch values that expire when an operation counter moves forward.

/// A monotonically increasing operation counter.
///
/// Every operation that needs fresh scratch state calls [`EpochCounter::advance`] once and
/// reads or writes [`EpochTag`]s with the returned epoch. Tags written during earlier
/// epochs are implicitly stale, so nothing has to be cleared between operations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpochCounter {
    current: u32,
}

impl EpochCounter {
    /// A counter that has never been advanced.
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// The last epoch returned by [`Self::advance`], or `0` if it was never advanced.
    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Starts a new epoch and returns it.
    ///
    /// The returned value is always non-zero, hence never matches a default [`EpochTag`].
    ///
    /// # Panics
    ///
    /// Panics if the counter overflows.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        self.current = self
            .current
            .checked_add(1)
            .expect("epoch counter overflow: reset the polytope before reusing it");
        self.current
    }

    /// Rewinds the counter to zero.
    ///
    /// Only sound when every tag read afterwards was also reset (or rebuilt).
    #[inline]
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// A value stamped with the epoch it was written in.
///
/// The value is only meaningful while the epoch it was stamped with is the one being
/// queried. A default tag carries the epoch `0`, which no [`EpochCounter`] ever hands out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpochTag<T> {
    epoch: u32,
    value: T,
}

impl<T> EpochTag<T> {
    /// A tag holding `value`, valid during `epoch`.
    #[inline]
    pub fn new(epoch: u32, value: T) -> Self {
        Self { epoch, value }
    }

    /// The epoch this tag was last written in.
    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Is this tag valid for `epoch`?
    #[inline]
    pub fn is_current(&self, epoch: u32) -> bool {
        epoch != 0 && self.epoch == epoch
    }

    /// The stored value, if it was written during `epoch`.
    #[inline]
    pub fn get(&self, epoch: u32) -> Option<&T> {
        if self.is_current(epoch) {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Overwrites the value and stamps it with `epoch`.
    #[inline]
    pub fn set(&mut self, epoch: u32, value: T) {
        self.epoch = epoch;
        self.value = value;
    }
}

impl<T: Copy> EpochTag<T> {
    /// Returns the value stored during `epoch`, computing and storing it first if the tag is stale.
    #[inline]
    pub fn get_or_insert_with(&mut self, epoch: u32, f: impl FnOnce() -> T) -> T {
        if !self.is_current(epoch) {
            self.set(epoch, f());
        }

        self.value
    }
}
