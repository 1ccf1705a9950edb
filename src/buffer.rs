use std::iter;
use std::ops::{Index, IndexMut};

/// A fixed-capacity block of slots, each either holding a value or unset.
///
/// A zero-capacity buffer is the unallocated state: it owns no heap memory.
/// Growing means allocating a new buffer and moving values across, never
/// resizing in place.
#[derive(Clone)]
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> Buffer<T> {
    #[inline]
    pub(crate) fn unallocated() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Option<T>] {
        &self.slots
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    #[inline]
    pub(crate) fn into_vec(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}

impl<T> Index<usize> for Buffer<T> {
    type Output = Option<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}
