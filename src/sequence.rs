use std::cmp::Ordering;

use crate::Error;
use crate::index::{SeqIndex, element_position, insertion_position};

/// Direction of a [`Sequence`] sort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    /// Largest first. Equal elements keep their relative order.
    Descending,
}

impl SortOrder {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// The contract shared by [`DoublingArray`](crate::DoublingArray) and
/// [`IncrementalArray`](crate::IncrementalArray).
///
/// An implementor provides a handful of positional primitives; every index-based
/// operation, lookup, sort and reversal is built on top of them. Index arguments are
/// any [`SeqIndex`]; negative indices count from the end.
///
/// The two implementors only differ in the cost of [`push`](Sequence::push):
/// amortized O(1) for `DoublingArray`, worst-case O(1) for `IncrementalArray`.
///
/// # Example
/// ```rust
/// use smooth_array::{DoublingArray, IncrementalArray, Sequence, SortOrder};
///
/// fn shuffle_and_sort<S: Sequence<i32>>(mut sequence: S) -> S {
///     sequence.extend([3, 0, 1, 2]);
///     sequence.sort(SortOrder::Descending);
///     sequence
/// }
///
/// assert_eq!(shuffle_and_sort(DoublingArray::new()), [3, 2, 1, 0]);
/// assert_eq!(shuffle_and_sort(IncrementalArray::new()), [3, 2, 1, 0]);
/// ```
pub trait Sequence<T>: Extend<T> {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the number of allocated slots.
    fn capacity(&self) -> usize;

    /// Returns the element at `position`, or `None` if `position >= len()`.
    fn slot(&self, position: usize) -> Option<&T>;

    /// Returns the element at `position` mutably, or `None` if `position >= len()`.
    fn slot_mut(&mut self, position: usize) -> Option<&mut T>;

    /// Appends an element to the back.
    fn push(&mut self, value: T);

    /// Removes the element at `position`, shifting the following elements left.
    /// Returns `None` if `position >= len()`.
    fn remove_at(&mut self, position: usize) -> Option<T>;

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Panics
    /// Panics if either position is out of bounds.
    fn swap_slots(&mut self, a: usize, b: usize);

    /// Removes all elements and releases the storage.
    fn clear(&mut self);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{Error, IncrementalArray, Sequence};
    ///
    /// let array = IncrementalArray::from([0, 1, 2, 3]);
    /// assert_eq!(array.get(1), Ok(&1));
    /// assert_eq!(array.get(-1), Ok(&3));
    /// assert_eq!(array.get(4), Err(Error::OutOfRange { index: 4, len: 4 }));
    /// ```
    fn get<I: SeqIndex>(&self, index: I) -> Result<&T, Error> {
        let len = self.len();
        let position = element_position(index, len)?;
        self.slot(position).ok_or(Error::OutOfRange {
            index: position as isize,
            len,
        })
    }

    fn get_mut<I: SeqIndex>(&mut self, index: I) -> Result<&mut T, Error> {
        let len = self.len();
        let position = element_position(index, len)?;
        self.slot_mut(position).ok_or(Error::OutOfRange {
            index: position as isize,
            len,
        })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{DoublingArray, Sequence};
    ///
    /// let mut array = DoublingArray::from([0, 1, 2, 3]);
    /// assert_eq!(array.set(1, 999), Ok(1));
    /// assert_eq!(array, [0, 999, 2, 3]);
    /// ```
    fn set<I: SeqIndex>(&mut self, index: I, value: T) -> Result<T, Error> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    /// Inserts `value` at `index`, shifting the following elements right.
    /// Inserting at `len()` is equivalent to [`push`](Sequence::push).
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{IncrementalArray, Sequence};
    ///
    /// let mut array = IncrementalArray::from(["0", "1", "2", "3"]);
    /// array.insert(2, "+1").unwrap();
    /// assert_eq!(array, ["0", "1", "+1", "2", "3"]);
    /// ```
    fn insert<I: SeqIndex>(&mut self, index: I, value: T) -> Result<(), Error> {
        let position = insertion_position(index, self.len())?;

        self.push(value);
        for current in (position + 1..self.len()).rev() {
            self.swap_slots(current, current - 1);
        }

        Ok(())
    }

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{DoublingArray, Sequence};
    ///
    /// let mut array = DoublingArray::from([0, 1, 2, 3]);
    /// array.delete(2).unwrap();
    /// assert_eq!(array, [0, 1, 3]);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    fn delete<I: SeqIndex>(&mut self, index: I) -> Result<(), Error> {
        self.pop_at(index).map(drop)
    }

    /// Removes and returns the element at `index`.
    fn pop_at<I: SeqIndex>(&mut self, index: I) -> Result<T, Error> {
        let len = self.len();
        let position = element_position(index, len)?;
        self.remove_at(position).ok_or(Error::OutOfRange {
            index: position as isize,
            len,
        })
    }

    /// Removes and returns the last element, or `None` if empty.
    fn pop(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.remove_at(last)
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{Error, IncrementalArray, Sequence};
    ///
    /// let mut array = IncrementalArray::from([0, 1, 2, 3]);
    /// assert_eq!(array.remove(&2), Ok(()));
    /// assert_eq!(array, [0, 1, 3]);
    /// assert_eq!(array.remove(&2), Err(Error::NotFound));
    /// ```
    fn remove(&mut self, value: &T) -> Result<(), Error>
    where
        T: PartialEq,
    {
        let position = self.index_of(value)?;
        self.remove_at(position).map(drop).ok_or(Error::NotFound)
    }

    /// Returns the position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Result<usize, Error>
    where
        T: PartialEq,
    {
        (0..self.len())
            .find(|&position| self.slot(position) == Some(value))
            .ok_or(Error::NotFound)
    }

    /// Returns the number of elements equal to `value`.
    fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        (0..self.len())
            .filter(|&position| self.slot(position) == Some(value))
            .count()
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_ok()
    }

    /// Reverses the order of the elements in place.
    fn reverse(&mut self) {
        let len = self.len();
        for front in 0..len / 2 {
            self.swap_slots(front, len - 1 - front);
        }
    }

    /// Sorts the elements by their natural order. The sort is stable.
    ///
    /// # Example
    /// ```rust
    /// use smooth_array::{DoublingArray, Sequence, SortOrder};
    ///
    /// let mut array = DoublingArray::from([3, 0, 1, 2]);
    /// array.sort(SortOrder::Descending);
    /// assert_eq!(array, [3, 2, 1, 0]);
    /// ```
    fn sort(&mut self, order: SortOrder)
    where
        T: Ord,
    {
        self.sort_by(T::cmp, order);
    }

    /// Sorts the elements by the key extracted with `key`. The sort is stable and
    /// `key` is called exactly once per element.
    fn sort_by_key<K, F>(&mut self, mut key: F, order: SortOrder)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let keys: Vec<K> = (0..self.len())
            .filter_map(|position| self.slot(position).map(&mut key))
            .collect();

        let mut permutation: Vec<usize> = (0..keys.len()).collect();
        permutation.sort_by(|&a, &b| order.apply(keys[a].cmp(&keys[b])));
        apply_permutation(self, &permutation);
    }

    /// Sorts the elements with the comparator `compare`. The sort is stable.
    fn sort_by<F>(&mut self, mut compare: F, order: SortOrder)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut permutation: Vec<usize> = (0..self.len()).collect();
        permutation.sort_by(|&a, &b| match (self.slot(a), self.slot(b)) {
            (Some(a), Some(b)) => order.apply(compare(a, b)),
            _ => a.cmp(&b),
        });
        apply_permutation(self, &permutation);
    }
}

/// Rearranges `sequence` so that position `i` holds the element previously found at
/// `permutation[i]`, following each cycle of the permutation with swaps.
fn apply_permutation<T, S>(sequence: &mut S, permutation: &[usize])
where
    S: Sequence<T> + ?Sized,
{
    let mut placed = vec![false; permutation.len()];

    for start in 0..permutation.len() {
        let mut current = start;
        while !placed[current] {
            placed[current] = true;

            let source = permutation[current];
            if source == start {
                break;
            }

            sequence.swap_slots(current, source);
            current = source;
        }
    }
}
