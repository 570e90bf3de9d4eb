use num_traits::{AsPrimitive, PrimInt, Signed};

use crate::sealed;

// -------------------- InputElement with implementations for u8, u16, i32, i64 --------------------
/// A symbol type of the input text.
///
/// `u8`/`u16`-based texts use all values of the type as their alphabet. For `i32`/`i64`-based texts, the
/// alphabet size is either supplied by the caller or computed as the maximum of the text plus one.
pub trait InputElement:
    sealed::Sealed
    + std::fmt::Debug
    + std::hash::Hash
    + Copy
    + Ord
    + PrimInt
    + AsPrimitive<usize>
    + Into<i64>
    + Send
    + Sync
{
    const ZERO: Self;

    /// `Some` if the alphabet size is determined by the type alone.
    const IMPLIED_ALPHABET_SIZE: Option<usize>;

    #[inline]
    fn rank(self) -> usize {
        self.as_()
    }
}

macro_rules! input_element_impl {
    ($t:ty, $implied_alphabet_size:expr) => {
        impl sealed::Sealed for $t {}

        impl InputElement for $t {
            const ZERO: Self = 0;
            const IMPLIED_ALPHABET_SIZE: Option<usize> = $implied_alphabet_size;
        }
    };
}

input_element_impl!(u8, Some(1 << 8));
input_element_impl!(u16, Some(1 << 16));
input_element_impl!(i32, None);
input_element_impl!(i64, None);

/// Marker for the input types that need an explicit or computed alphabet size.
pub trait LargeAlphabet: InputElement {}

impl LargeAlphabet for i32 {}
impl LargeAlphabet for i64 {}

// -------------------- OutputElement with implementations for i32, i64 --------------------
/// The index width of the suffix array, LCP array and document array.
///
/// A text can be at most `Self::MAX` symbols long. Output elements are also used as the symbols of the
/// reduced texts during recursion, which is why every output element is an input element as well.
pub trait OutputElement:
    InputElement + Signed + TryFrom<usize, Error: std::fmt::Debug> + std::fmt::Display
{
    const MAX: Self;

    /// Marks a suffix array slot that is not filled yet.
    const EMPTY: Self;

    /// Only valid for indices that were checked to fit into `Self` beforehand.
    fn from_index(index: usize) -> Self;

    /// Only valid for non-negative values.
    fn as_index(self) -> usize;
}

macro_rules! output_element_impl {
    ($t:ty) => {
        impl OutputElement for $t {
            const MAX: Self = <$t>::MAX;
            const EMPTY: Self = -1;

            #[inline]
            fn from_index(index: usize) -> Self {
                debug_assert!(<$t>::try_from(index).is_ok());
                index as Self
            }

            #[inline]
            fn as_index(self) -> usize {
                debug_assert!(self >= 0);
                self as usize
            }
        }
    };
}

output_element_impl!(i32);
output_element_impl!(i64);

/// Checks that a text of `text_len` symbols can be indexed with `O`.
pub(crate) fn fits_into<O: OutputElement>(text_len: usize) -> bool {
    O::try_from(text_len).is_ok()
}
