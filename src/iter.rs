use core::iter::{Chain, Flatten, FusedIterator};
use core::slice;

type Segments<'a, T> =
    Chain<Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>, slice::Iter<'a, Option<T>>>;

type SegmentsMut<'a, T> = Chain<
    Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
    slice::IterMut<'a, Option<T>>,
>;

/// An iterator over the elements of a `DoublingArray` or an `IncrementalArray`.
///
/// This struct is created by `DoublingArray::iter()` and `IncrementalArray::iter()`.
pub struct Iter<'a, T> {
    delegate: Flatten<Segments<'a, T>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Chains the slot ranges that, in order, hold the live elements.
    pub(crate) fn from_segments(
        head: &'a [Option<T>],
        middle: &'a [Option<T>],
        tail: &'a [Option<T>],
        len: usize,
    ) -> Self {
        Self {
            delegate: head.iter().chain(middle).chain(tail).flatten(),
            len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
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

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}

/// A mutable iterator over the elements of a `DoublingArray` or an `IncrementalArray`.
///
/// This struct is created by `DoublingArray::iter_mut()` and `IncrementalArray::iter_mut()`.
pub struct IterMut<'a, T> {
    delegate: Flatten<SegmentsMut<'a, T>>,
    len: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_segments(
        head: &'a mut [Option<T>],
        middle: &'a mut [Option<T>],
        tail: &'a mut [Option<T>],
        len: usize,
    ) -> Self {
        Self {
            delegate: head.iter_mut().chain(middle).chain(tail).flatten(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next()?;
        self.len -= 1;
        Some(out)
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

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let out = self.delegate.next_back()?;
        self.len -= 1;
        Some(out)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}
