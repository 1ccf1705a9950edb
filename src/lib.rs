//! # smooth_array
//!
//! `smooth_array` implements growable, random-access arrays with two interchangeable
//! growth strategies sharing the same [`Sequence`] contract.
//!
//! ## Features
//! - [`DoublingArray`]: the classic strategy. When full, a push allocates twice the
//!   capacity and moves everything at once: amortized O(1), but an occasional push
//!   costs O(n).
//! - [`IncrementalArray`]: when full, a push allocates twice the capacity and keeps the
//!   old buffer around; every following push moves a single old element across.
//!   Every push moves O(1) elements in the worst case, resizes included.
//! - Python-like indexing: negative indices count from the end, and failures are
//!   reported as [`Error`] values instead of panics.
//! - Storage is allocated lazily on the first push and released on `clear`.
//!
//! ## Use Cases
//! `IncrementalArray` is meant for latency sensitive callers that cannot afford the
//! O(n) spike of a doubling resize, e.g. frame loops or request handlers that append
//! to a log. `DoublingArray` is the baseline to compare it with.
//!
//! ## Example
//! ```rust
//! use smooth_array::{IncrementalArray, Sequence, SortOrder};
//!
//! let mut array = IncrementalArray::new();
//! array.extend([3, 0, 1, 2]);
//! array.insert(2, 7).unwrap();
//!
//! assert_eq!(array.get(0), Ok(&3));
//! assert_eq!(array.get(-1), Ok(&2));
//!
//! array.sort(SortOrder::Descending);
//! assert_eq!(array, [7, 3, 2, 1, 0]);
//!
//! assert_eq!(array.pop(), Some(0));
//! array.delete(0).unwrap();
//! assert_eq!(array, [3, 2, 1]);
//! ```

#[macro_use]
mod macros;

mod buffer;
mod doubling;
mod error;
mod incremental;
mod index;
mod into_iter;
mod iter;
mod sequence;

pub use doubling::DoublingArray;
pub use error::Error;
pub use incremental::IncrementalArray;
pub use index::SeqIndex;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};
pub use sequence::{Sequence, SortOrder};

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::fmt::Debug;
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

    use quickcheck_macros::quickcheck;

    use crate::{DoublingArray, Error, IncrementalArray, Sequence, SortOrder};

    fn contents<T: Clone, S: Sequence<T>>(sequence: &S) -> Vec<T> {
        (0..sequence.len())
            .filter_map(|position| sequence.slot(position).cloned())
            .collect()
    }

    #[test]
    fn scenario_push_ten_elements() {
        fn _test<S: Sequence<i32> + Default>() {
            let mut sut = S::default();
            for value in 0..10 {
                sut.push(value);
            }

            assert_eq!(contents(&sut), (0..10).collect::<Vec<_>>());
            assert_eq!(sut.len(), 10);
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn scenario_insert_in_the_middle() {
        fn _test<S: Sequence<&'static str> + FromIterator<&'static str>>() {
            let mut sut: S = ["0", "1", "2", "3"].into_iter().collect();
            sut.insert(2, "+1").unwrap();
            assert_eq!(contents(&sut), ["0", "1", "+1", "2", "3"]);
        }

        _test::<DoublingArray<&'static str>>();
        _test::<IncrementalArray<&'static str>>();
    }

    #[test]
    fn scenario_delete_in_the_middle() {
        fn _test<S: Sequence<i32> + FromIterator<i32>>() {
            let mut sut: S = (0..4).collect();
            sut.delete(2).unwrap();
            assert_eq!(contents(&sut), [0, 1, 3]);
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn scenario_sort_descending() {
        fn _test<S: Sequence<i32> + FromIterator<i32>>() {
            let mut sut: S = [3, 0, 1, 2].into_iter().collect();
            sut.sort(SortOrder::Descending);
            assert_eq!(contents(&sut), [3, 2, 1, 0]);
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn scenario_copy_then_mutate() {
        fn _test<S: Sequence<i32> + FromIterator<i32> + Clone>() {
            let base: S = (0..4).collect();
            let mut sut = base.clone();
            sut.set(1, 999).unwrap();

            assert_eq!(contents(&base), [0, 1, 2, 3]);
            assert_eq!(contents(&sut), [0, 999, 2, 3]);
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn boundaries_fail_with_out_of_range() {
        fn _test<S: Sequence<i32> + FromIterator<i32>>() {
            let mut sut: S = (0..4).collect();

            assert_eq!(sut.get(4), Err(Error::OutOfRange { index: 4, len: 4 }));
            assert_eq!(sut.get(-5), Err(Error::OutOfRange { index: -5, len: 4 }));
            assert_eq!(sut.set(4, 9), Err(Error::OutOfRange { index: 4, len: 4 }));
            assert_eq!(sut.set(-5, 9), Err(Error::OutOfRange { index: -5, len: 4 }));
            assert_eq!(sut.delete(4), Err(Error::OutOfRange { index: 4, len: 4 }));
            assert_eq!(sut.delete(-5), Err(Error::OutOfRange { index: -5, len: 4 }));
            assert_eq!(contents(&sut), [0, 1, 2, 3]);

            assert_eq!(sut.insert(4, 4), Ok(()));
            assert_eq!(contents(&sut), [0, 1, 2, 3, 4]);
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn original_is_unaffected_by_any_copy_mutation() {
        fn _test<S>()
        where
            S: Sequence<i32> + FromIterator<i32> + Clone + PartialEq + Debug,
        {
            let mutations: [fn(&mut S); 11] = [
                |sut| sut.push(9),
                |sut| sut.extend([9, 10]),
                |sut| sut.insert(1, 9).unwrap(),
                |sut| sut.delete(0).unwrap(),
                |sut| sut.remove(&2).unwrap(),
                |sut| {
                    sut.set(-1, 9).unwrap();
                },
                |sut| {
                    sut.pop();
                },
                |sut| {
                    sut.pop_at(1).unwrap();
                },
                |sut| sut.sort(SortOrder::Ascending),
                |sut| sut.reverse(),
                |sut| sut.clear(),
            ];

            for mutation in mutations {
                let base: S = [3, 0, 1, 4, 2].into_iter().collect();
                let snapshot = contents(&base);

                let mut copy = base.clone();
                mutation(&mut copy);
                assert_ne!(copy, base);
                assert_eq!(contents(&base), snapshot);

                let mut base = base;
                mutation(&mut base);
                assert_eq!(copy, base);
            }
        }

        _test::<DoublingArray<i32>>();
        _test::<IncrementalArray<i32>>();
    }

    #[test]
    fn strategies_compare_equal_element_wise() {
        let doubling = DoublingArray::from([0, 1, 2, 3, 4]);
        let incremental = IncrementalArray::from([0, 1, 2, 3, 4]);

        assert!(doubling.iter().eq(incremental.iter()));
        assert_eq!(doubling.capacity(), incremental.capacity());
        assert_eq!(format!("{doubling:?}"), format!("{incremental:?}"));
    }

    #[test]
    fn strategies_share_the_same_trait_surface() {
        fn _test<S>(mut sut: S)
        where
            S: Sequence<i32> + Default + Eq + Ord + Hash + From<[i32; 3]>,
            S: for<'a> Extend<&'a i32>,
            for<'a> &'a S: IntoIterator<Item = &'a i32>,
            for<'a> &'a mut S: IntoIterator<Item = &'a mut i32>,
        {
            let hasher = BuildHasherDefault::<DefaultHasher>::default();

            assert_eq!(S::default().len(), 0);
            assert!(S::from([0, 1, 2]) < S::from([0, 1, 3]));
            assert_eq!(S::from([2, 1, 0]).cmp(&sut), Ordering::Greater);
            assert_eq!(hasher.hash_one(&sut), hasher.hash_one(S::from([0, 1, 2])));
            assert_ne!(hasher.hash_one(&sut), hasher.hash_one(S::from([0, 1, 3])));

            for value in &mut sut {
                *value *= 10;
            }
            assert_eq!((&sut).into_iter().copied().collect::<Vec<_>>(), [0, 10, 20]);

            Extend::<&i32>::extend(&mut sut, &[30, 40]);
            assert_eq!(contents(&sut), [0, 10, 20, 30, 40]);
        }

        _test(DoublingArray::from([0, 1, 2]));
        _test(IncrementalArray::from([0, 1, 2]));
    }

    #[quickcheck]
    fn strategies_agree_on_every_operation(seed: Vec<i16>, script: Vec<(u8, i16)>) {
        let mut doubling = DoublingArray::from_iter(seed.iter().copied());
        let mut incremental = IncrementalArray::from_iter(seed.iter().copied());

        for (op, value) in script {
            let index = isize::from(value) % 8;
            match op % 7 {
                0 => {
                    doubling.push(value);
                    incremental.push(value);
                }
                1 => assert_eq!(
                    doubling.insert(index, value),
                    incremental.insert(index, value)
                ),
                2 => assert_eq!(doubling.delete(index), incremental.delete(index)),
                3 => assert_eq!(doubling.set(index, value), incremental.set(index, value)),
                4 => assert_eq!(doubling.remove(&value), incremental.remove(&value)),
                5 => {
                    doubling.sort_by_key(|v| v.rem_euclid(4), SortOrder::Descending);
                    incremental.sort_by_key(|v| v.rem_euclid(4), SortOrder::Descending);
                }
                6 => assert_eq!(doubling.pop(), incremental.pop()),
                _ => unreachable!(),
            }

            assert_eq!(doubling.len(), incremental.len());
            assert_eq!(doubling.capacity(), incremental.capacity());
            assert!(doubling.iter().eq(incremental.iter()));
        }
    }
}
