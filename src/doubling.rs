use crate::buffer::Buffer;
use crate::into_iter::IntoIter;
use crate::{Iter, IterMut, Sequence};

/// A growable array that doubles its capacity whenever it runs out of slots.
///
/// Appending is amortized O(1): most pushes write a single slot, but a push that finds
/// the array full moves every element into a buffer twice as large.
/// Capacity never shrinks on removal; [`clear`](Sequence::clear) releases the storage.
///
/// # Example
/// ```rust
/// use smooth_array::{DoublingArray, Sequence};
///
/// let mut array = DoublingArray::new();
/// assert_eq!(array.capacity(), 0);
///
/// array.extend(0..5);
/// assert_eq!(array.len(), 5);
/// assert_eq!(array.capacity(), 8);
///
/// array.insert(0, -1).unwrap();
/// assert_eq!(array.pop_at(-1), Ok(4));
/// assert_eq!(array, [-1, 0, 1, 2, 3]);
/// ```
pub struct DoublingArray<T> {
    buffer: Buffer<T>,
    len: usize,
}

impl_array_traits!(DoublingArray);

impl<T> DoublingArray<T> {
    /// Creates a new, empty `DoublingArray`. Nothing is allocated until the first push.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::DoublingArray;
    ///
    /// let array: DoublingArray<i32> = DoublingArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: Buffer::unallocated(),
            len: 0,
        }
    }

    /// Returns the number of elements currently stored.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Provides an iterator over the elements.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::DoublingArray;
    ///
    /// let array = DoublingArray::from([0, 1, 2]);
    ///
    /// let mut iter = array.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_segments(&self.buffer.as_slice()[..self.len], &[], &[], self.len)
    }

    /// Provides a mutable iterator over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut::from_segments(
            &mut self.buffer.as_mut_slice()[..len],
            Default::default(),
            Default::default(),
            len,
        )
    }

    fn grow(&mut self) {
        let capacity = match self.buffer.capacity() {
            0 => 1,
            capacity => capacity * 2,
        };

        let len = self.len;
        let mut grown = Buffer::with_capacity(capacity);
        grown.as_mut_slice()[..len].swap_with_slice(&mut self.buffer.as_mut_slice()[..len]);
        self.buffer = grown;
    }
}

impl<T> Sequence<T> for DoublingArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    fn slot(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }

        self.buffer[position].as_ref()
    }

    #[inline]
    fn slot_mut(&mut self, position: usize) -> Option<&mut T> {
        if position >= self.len {
            return None;
        }

        self.buffer[position].as_mut()
    }

    /// Appends an element, doubling the capacity first if the array is full.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{DoublingArray, Sequence};
    ///
    /// let mut array = DoublingArray::new();
    /// for value in 0..10 {
    ///     array.push(value);
    /// }
    ///
    /// assert_eq!(array.len(), 10);
    /// assert_eq!(array.capacity(), 16);
    /// assert_eq!(array, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    fn push(&mut self, value: T) {
        if self.len == self.buffer.capacity() {
            self.grow();
        }

        self.buffer[self.len] = Some(value);
        self.len += 1;
    }

    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.len {
            return None;
        }

        self.buffer.as_mut_slice()[position..self.len].rotate_left(1);
        self.len -= 1;
        self.buffer[self.len].take()
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        assert!(a < self.len && b < self.len);
        self.buffer.as_mut_slice().swap(a, b);
    }

    /// Removes all elements and releases the buffer.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{DoublingArray, Sequence};
    ///
    /// let mut array = DoublingArray::from([0, 1, 2, 3]);
    /// array.clear();
    ///
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    fn clear(&mut self) {
        self.buffer = Buffer::unallocated();
        self.len = 0;
    }
}

impl<T: Clone> Clone for DoublingArray<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            len: self.len,
        }
    }
}

impl<T> IntoIterator for DoublingArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_buffers(self.buffer, Buffer::unallocated(), self.len)
    }
}
