use core::iter::FusedIterator;
use std::vec;

use crate::buffer::Buffer;

/// An owning iterator over the elements of a `DoublingArray` or an `IncrementalArray`.
///
/// This struct is created by the `into_iter()` method of both arrays.
#[derive(Clone)]
pub struct IntoIter<T> {
    fresh: vec::IntoIter<Option<T>>,
    stale: vec::IntoIter<Option<T>>,
    len: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            fresh: Vec::new().into_iter(),
            stale: Vec::new().into_iter(),
            len: 0,
        }
    }
}

impl<T> IntoIter<T> {
    /// Walks the two buffers side by side: every live position holds its value in
    /// exactly one of them, every other slot is unset.
    pub(crate) fn from_buffers(fresh: Buffer<T>, stale: Buffer<T>, len: usize) -> Self {
        let mut fresh = fresh.into_vec();
        fresh.truncate(len);

        // kept either empty or exactly `len` long, so both ends stay aligned
        let mut stale = stale.into_vec();
        if !stale.is_empty() {
            stale.resize_with(len, || None);
        }

        Self {
            fresh: fresh.into_iter(),
            stale: stale.into_iter(),
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let fresh = self.fresh.next()?;
        let stale = self.stale.next().flatten();
        self.len -= 1;
        fresh.or(stale)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let fresh = self.fresh.next_back()?;
        let stale = self.stale.next_back().flatten();
        self.len -= 1;
        fresh.or(stale)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoIter").field("len", &self.len).finish()
    }
}
