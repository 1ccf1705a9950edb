use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::Error;

const TOO_LARGE: Error = Error::InvalidArgument {
    reason: "index does not fit in isize",
};

const SLICE: Error = Error::InvalidArgument {
    reason: "slice indexing is not supported",
};

/// Types accepted as an index argument by [`Sequence`](crate::Sequence) operations.
///
/// Every primitive integer type is an index; negative values count from the end.
/// Range types are accepted by the type system only to be rejected at runtime with
/// [`Error::InvalidArgument`]: slice-style indexing is not supported.
///
/// # Example
/// ```rust
/// use smooth_array::{DoublingArray, Error, Sequence};
///
/// let array = DoublingArray::from([10, 20, 30]);
///
/// assert_eq!(array.get(-1), Ok(&30));
/// assert_eq!(array.get(1u8), Ok(&20));
/// assert!(matches!(array.get(0..2), Err(Error::InvalidArgument { .. })));
/// ```
pub trait SeqIndex {
    /// Returns the signed offset this index denotes.
    fn offset(self) -> Result<isize, Error>;
}

macro_rules! integer_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl SeqIndex for $t {
                #[inline]
                fn offset(self) -> Result<isize, Error> {
                    isize::try_from(self).map_err(|_| TOO_LARGE)
                }
            }
        )*
    };
}

integer_index!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! range_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl<I> SeqIndex for $t {
                #[inline]
                fn offset(self) -> Result<isize, Error> {
                    Err(SLICE)
                }
            }
        )*
    };
}

range_index!(
    Range<I>,
    RangeFrom<I>,
    RangeTo<I>,
    RangeInclusive<I>,
    RangeToInclusive<I>,
);

impl SeqIndex for RangeFull {
    #[inline]
    fn offset(self) -> Result<isize, Error> {
        Err(SLICE)
    }
}

/// Resolves `index` to a position in `0..len`.
pub(crate) fn element_position<I: SeqIndex>(index: I, len: usize) -> Result<usize, Error> {
    let offset = index.offset()?;
    normalize(offset, len)
        .filter(|&position| position < len)
        .ok_or(Error::OutOfRange { index: offset, len })
}

/// Resolves `index` to a position in `0..=len`.
pub(crate) fn insertion_position<I: SeqIndex>(index: I, len: usize) -> Result<usize, Error> {
    let offset = index.offset()?;
    normalize(offset, len)
        .filter(|&position| position <= len)
        .ok_or(Error::OutOfRange { index: offset, len })
}

#[inline]
fn normalize(offset: isize, len: usize) -> Option<usize> {
    if offset < 0 {
        len.checked_add_signed(offset)
    } else {
        usize::try_from(offset).ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;
    use crate::index::{SeqIndex, element_position, insertion_position};

    #[test]
    fn integers_convert_to_offsets() {
        assert_eq!(3i8.offset(), Ok(3));
        assert_eq!((-3i64).offset(), Ok(-3));
        assert_eq!(7u16.offset(), Ok(7));
        assert_eq!(usize::MAX.offset(), Err(super::TOO_LARGE));
        assert_eq!(u128::MAX.offset(), Err(super::TOO_LARGE));
        assert_eq!(i128::MIN.offset(), Err(super::TOO_LARGE));
    }

    #[test]
    fn ranges_are_rejected() {
        assert_eq!((0..2).offset(), Err(super::SLICE));
        assert_eq!((0..).offset(), Err(super::SLICE));
        assert_eq!((..2).offset(), Err(super::SLICE));
        assert_eq!((..).offset(), Err(super::SLICE));
        assert_eq!((0..=2).offset(), Err(super::SLICE));
        assert_eq!((..=2).offset(), Err(super::SLICE));
    }

    #[test]
    fn element_position_normalizes_negative_indices() {
        assert_eq!(element_position(0, 4), Ok(0));
        assert_eq!(element_position(3, 4), Ok(3));
        assert_eq!(element_position(-1, 4), Ok(3));
        assert_eq!(element_position(-4, 4), Ok(0));

        assert_eq!(
            element_position(4, 4),
            Err(Error::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            element_position(-5, 4),
            Err(Error::OutOfRange { index: -5, len: 4 })
        );
        assert_eq!(
            element_position(0, 0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            element_position(isize::MIN, 4),
            Err(Error::OutOfRange {
                index: isize::MIN,
                len: 4
            })
        );
    }

    #[test]
    fn insertion_position_accepts_len() {
        assert_eq!(insertion_position(0, 0), Ok(0));
        assert_eq!(insertion_position(4, 4), Ok(4));
        assert_eq!(insertion_position(-1, 4), Ok(3));
        assert_eq!(insertion_position(-4, 4), Ok(0));

        assert_eq!(
            insertion_position(5, 4),
            Err(Error::OutOfRange { index: 5, len: 4 })
        );
        assert_eq!(
            insertion_position(-5, 4),
            Err(Error::OutOfRange { index: -5, len: 4 })
        );
        assert_eq!(insertion_position(1..2, 4), Err(super::SLICE));
    }
}
