use std::mem;

use crate::buffer::Buffer;
use crate::into_iter::IntoIter;
use crate::{Iter, IterMut, Sequence};

/// The half-open range of positions whose elements still live in the old buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    const EMPTY: Span = Span { start: 0, end: 0 };

    #[inline]
    const fn contains(self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    #[inline]
    const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span after the element at `position` has been removed.
    ///
    /// `start` moves down when `position <= start` (saturating at zero) while `end`
    /// moves down when `position < end`.
    #[inline]
    const fn after_removal(self, position: usize) -> Span {
        Span {
            start: if position <= self.start {
                self.start.saturating_sub(1)
            } else {
                self.start
            },
            end: if position < self.end {
                self.end - 1
            } else {
                self.end
            },
        }
    }

    #[inline]
    const fn side_of(self, position: usize) -> Side {
        if self.contains(position) {
            Side::Old
        } else {
            Side::New
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Old,
    New,
}

/// A growable array whose [`push`](Sequence::push) moves O(1) elements in the worst case.
///
/// When the array is full, a push allocates a buffer twice as large but does not move
/// anything into it yet. The previous buffer stays alive and every following push moves
/// exactly one element across, so the old buffer is drained before the new one can fill
/// up. Until then, positions in the not-yet-migrated range are read from and written to
/// the old buffer, and every other position lives in the new one.
///
/// The bound counts element moves: allocating the larger buffer and releasing the
/// drained one count as single steps, even though initializing and dropping the slots
/// touches each of them.
///
/// All other operations have the same cost and semantics as in
/// [`DoublingArray`](crate::DoublingArray).
///
/// # Example
/// ```rust
/// use smooth_array::{IncrementalArray, Sequence};
///
/// let mut array = IncrementalArray::new();
/// array.extend(0..4);
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.pending_migration(), 0);
///
/// // the fifth push starts a migration and moves the first element
/// array.push(4);
/// assert_eq!(array.capacity(), 8);
/// assert_eq!(array.pending_migration(), 3);
///
/// // reads and writes work while the migration is in flight
/// array.set(2, 20).unwrap();
/// assert_eq!(array, [0, 1, 20, 3, 4]);
///
/// array.extend(5..8);
/// assert_eq!(array.pending_migration(), 0);
/// ```
pub struct IncrementalArray<T> {
    old: Buffer<T>,
    new: Buffer<T>,
    pending: Span,
    len: usize,
}

impl_array_traits!(IncrementalArray);

impl<T> IncrementalArray<T> {
    /// Creates a new, empty `IncrementalArray`. Nothing is allocated until the first push.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::IncrementalArray;
    ///
    /// let array: IncrementalArray<i32> = IncrementalArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            old: Buffer::unallocated(),
            new: Buffer::unallocated(),
            pending: Span::EMPTY,
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

    /// Returns the number of slots of the buffer being filled.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.new.capacity()
    }

    /// Returns how many elements still have to be moved out of the old buffer.
    ///
    /// Each push moves one of them, and a push never has to start a new migration
    /// while this is non zero.
    #[inline]
    pub const fn pending_migration(&self) -> usize {
        self.pending.len()
    }

    /// Provides an iterator over the elements.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::IncrementalArray;
    ///
    /// let array = IncrementalArray::from([0, 1, 2]);
    ///
    /// let mut iter = array.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let Span { start, end } = self.pending;
        let fresh = &self.new.as_slice()[..self.len];

        Iter::from_segments(
            &fresh[..start],
            &self.old.as_slice()[start..end],
            &fresh[end..],
            self.len,
        )
    }

    /// Provides a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let Span { start, end } = self.pending;
        let len = self.len;
        let (head, tail) = self.new.as_mut_slice()[..len].split_at_mut(end);

        IterMut::from_segments(
            &mut head[..start],
            &mut self.old.as_mut_slice()[start..end],
            tail,
            len,
        )
    }

    #[inline]
    fn buffer_slot(&self, side: Side, position: usize) -> &Option<T> {
        match side {
            Side::Old => &self.old[position],
            Side::New => &self.new[position],
        }
    }

    #[inline]
    fn buffer_slot_mut(&mut self, side: Side, position: usize) -> &mut Option<T> {
        match side {
            Side::Old => &mut self.old[position],
            Side::New => &mut self.new[position],
        }
    }

    /// Starts a migration epoch: the full buffer becomes the old one and a buffer of
    /// `capacity` slots takes its place.
    fn grow(&mut self, capacity: usize) {
        debug_assert!(self.pending.is_empty(), "previous migration still pending");

        self.old = mem::replace(&mut self.new, Buffer::with_capacity(capacity));
        self.pending = Span {
            start: 0,
            end: self.old.capacity(),
        };
    }

    /// Moves the lowest pending element into the new buffer, if any.
    fn migrate_one(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let position = self.pending.start;
        self.new[position] = self.old[position].take();
        self.pending.start += 1;
    }

    /// Releases the old buffer once nothing is left to migrate.
    fn settle(&mut self) {
        if self.pending.is_empty() {
            self.pending = Span::EMPTY;
            if self.old.is_allocated() {
                self.old = Buffer::unallocated();
            }
        }
    }
}

impl<T> Sequence<T> for IncrementalArray<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.new.capacity()
    }

    #[inline]
    fn slot(&self, position: usize) -> Option<&T> {
        if position >= self.len {
            return None;
        }

        self.buffer_slot(self.pending.side_of(position), position).as_ref()
    }

    #[inline]
    fn slot_mut(&mut self, position: usize) -> Option<&mut T> {
        if position >= self.len {
            return None;
        }

        self.buffer_slot_mut(self.pending.side_of(position), position).as_mut()
    }

    /// Appends an element, moving at most one previously stored element.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{IncrementalArray, Sequence};
    ///
    /// let mut array = IncrementalArray::from([0, 1, 2, 3]);
    ///
    /// // grows to 8 slots and moves one of the four stored elements
    /// array.push(4);
    /// assert_eq!(array.capacity(), 8);
    /// assert_eq!(array.pending_migration(), 3);
    ///
    /// array.push(5);
    /// assert_eq!(array.pending_migration(), 2);
    /// assert_eq!(array, [0, 1, 2, 3, 4, 5]);
    /// ```
    fn push(&mut self, value: T) {
        match self.new.capacity() {
            0 => self.new = Buffer::with_capacity(1),
            capacity if self.len == capacity => self.grow(capacity * 2),
            _ => {}
        }

        self.migrate_one();
        self.new[self.len] = Some(value);
        self.len += 1;
        self.settle();
    }

    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.len {
            return None;
        }

        let before = self.pending;
        let after = before.after_removal(position);

        let removed = self.buffer_slot_mut(before.side_of(position), position).take();

        // the span may now claim the already migrated element just below `position`
        if after.start < before.start && after.start < position {
            let reclaimed = after.start;
            self.old[reclaimed] = self.new[reclaimed].take();
        }

        // read through the span as it was, write through the span as it will be
        for current in position + 1..self.len {
            let value = self
                .buffer_slot_mut(before.side_of(current), current)
                .take();
            *self.buffer_slot_mut(after.side_of(current - 1), current - 1) = value;
        }

        self.len -= 1;
        self.pending = after;
        self.settle();
        removed
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        assert!(a < self.len && b < self.len);

        match (self.pending.side_of(a), self.pending.side_of(b)) {
            (Side::Old, Side::Old) => self.old.as_mut_slice().swap(a, b),
            (Side::New, Side::New) => self.new.as_mut_slice().swap(a, b),
            (Side::Old, Side::New) => mem::swap(&mut self.old[a], &mut self.new[b]),
            (Side::New, Side::Old) => mem::swap(&mut self.new[a], &mut self.old[b]),
        }
    }

    /// Removes all elements and releases both buffers.
    fn clear(&mut self) {
        self.old = Buffer::unallocated();
        self.new = Buffer::unallocated();
        self.pending = Span::EMPTY;
        self.len = 0;
    }
}

/// The copy keeps both buffers and the migration progress, so it continues the
/// migration exactly where the original is.
impl<T: Clone> Clone for IncrementalArray<T> {
    fn clone(&self) -> Self {
        Self {
            old: self.old.clone(),
            new: self.new.clone(),
            pending: self.pending,
            len: self.len,
        }
    }
}

impl<T> IntoIterator for IncrementalArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_buffers(self.new, self.old, self.len)
    }
}
