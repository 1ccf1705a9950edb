/// Implements the construction, comparison, hashing and borrowing-iteration traits
/// for an array type providing inherent `new`, `len`, `iter` and `iter_mut`.
macro_rules! impl_array_traits {
    ($array:ident) => {
        impl<T, const M: usize> From<[T; M]> for $array<T> {
            fn from(values: [T; M]) -> Self {
                values.into_iter().collect()
            }
        }

        impl<T> FromIterator<T> for $array<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut this = Self::new();
                this.extend(iter);
                this
            }
        }

        impl<T> Extend<T> for $array<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                iter.into_iter()
                    .for_each(|value| $crate::Sequence::push(self, value));
            }
        }

        impl<'a, T> Extend<&'a T> for $array<T>
        where
            T: Clone,
        {
            fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
                self.extend(iter.into_iter().cloned());
            }
        }

        impl<T> Default for $array<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T, const M: usize> PartialEq<[T; M]> for $array<T>
        where
            T: PartialEq,
        {
            fn eq(&self, other: &[T; M]) -> bool {
                self.len() == other.len() && self.iter().eq(other)
            }
        }

        impl<T> PartialEq<&[T]> for $array<T>
        where
            T: PartialEq,
        {
            fn eq(&self, other: &&[T]) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T> PartialEq<[T]> for $array<T>
        where
            T: PartialEq,
        {
            fn eq(&self, other: &[T]) -> bool {
                self.len() == other.len() && self.iter().eq(other)
            }
        }

        impl<T> PartialEq for $array<T>
        where
            T: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other)
            }
        }

        impl<T> Eq for $array<T> where T: Eq {}

        impl<T> PartialOrd for $array<T>
        where
            T: PartialOrd,
        {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.iter().partial_cmp(other)
            }
        }

        impl<T> Ord for $array<T>
        where
            T: Ord,
        {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.iter().cmp(other)
            }
        }

        impl<T> core::hash::Hash for $array<T>
        where
            T: core::hash::Hash,
        {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_usize(self.len());
                self.iter().for_each(|v| v.hash(state));
            }
        }

        impl<T> core::fmt::Debug for $array<T>
        where
            T: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<'a, T> IntoIterator for &'a $array<T> {
            type Item = &'a T;
            type IntoIter = $crate::Iter<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T> IntoIterator for &'a mut $array<T> {
            type Item = &'a mut T;
            type IntoIter = $crate::IterMut<'a, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }
    };
}
