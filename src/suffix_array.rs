/*!
 * Construct the (generalized) [suffix array] for a text using [`SuffixArrayConstruction`], optionally together
 * with the LCP array and the document array.
 *
 * The entry point to the API is the [`SuffixArrayConstruction`] builder-like struct. It is always required to
 * pass the input text and to register the output element by choosing an owned or borrowed output buffer.
 * Further configuration options include the generalized suffix array mode, the alphabet size for
 * `i32`/`i64`-based texts and the auxiliary arrays to compute.
 *
 * The following is a fully-configured example with borrowed buffers:
 * ```
 * use gsais::SuffixArrayConstruction;
 *
 * let text = b"abab\0ba\0".as_slice();
 *
 * // additional space in the buffers is not used
 * let mut suffix_array = vec![0i64; 10];
 * let mut lcp = vec![0i64; 8];
 * let mut document_array = vec![0i64; 8];
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_borrowed_buffer(&mut suffix_array)
 *     .generalized_suffix_array()
 *     .with_lcp_array_in_borrowed_buffer(&mut lcp)
 *     .with_document_array_in_borrowed_buffer(&mut document_array)
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.suffix_array(), &[4, 7, 6, 2, 0, 3, 5, 1]);
 * assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 1, 2, 0, 1, 2]);
 * assert_eq!(res.document_array().unwrap(), &[0, 1, 1, 0, 0, 0, 1, 0]);
 * ```
 *
 * # Sentinel Convention and Suffix Array Length
 *
 * The text has to end with 0 (not ASCII '0'). The suffixes are sorted as if a unique, lexicographically
 * smallest character followed the text, so the resulting arrays have the same length as the text. Borrowed
 * buffers have to be at least as long as the text; the result only refers to their first `text.len()` slots.
 *
 * # Return Type and PLCP
 *
 * The read-only return type of [`SuffixArrayConstruction::run`] bundles the suffix array, the requested
 * auxiliary arrays and a reference to the input text. It is generic over whether owned or borrowed buffers are
 * used. The object can be destructured into parts or used to compute a permuted longest common prefix (PLCP)
 * array, see [`plcp`](super::plcp).
 *
 * # Large Alphabets
 *
 * For `i32`/`i64`-based texts, it is recommended to pass an alphabet size using
 * [`SuffixArrayConstruction::with_alphabet_size`]. Otherwise, the largest value in the text plus one is used.
 * The memory usage of the algorithm is linear in the alphabet size. It is therefore wasteful to use a text with
 * a large maximum value when many values smaller than the maximum do not occur in the text. In such a
 * scenario, mapping the text into the range [0, k) is a good option, where k is the number of distinct values.
 *
 * Negative values are not allowed and the alphabet size is validated against the text in any case.
 *
 * # Generalized Suffix Array
 *
 * The generalized suffix array is a suffix array for a set of texts `{t1, t2, ..., tn}`. The set of all
 * suffixes of all texts is sorted to obtain this data structure.
 *
 * The texts are concatenated using the 0 symbol as a separator, like so: `t0 = t1 0 t2 0 ... tn 0`
 * (see [`concatenate_texts_for_generalized_suffix_array`](crate::concatenate_texts_for_generalized_suffix_array)).
 * With [`SuffixArrayConstruction::generalized_suffix_array`], every 0 is treated as a unique separator. The
 * separators are ordered by their position, `$1 < $2 < ... < $n`, and are smaller than every other symbol.
 * Common prefixes in the LCP array never extend over a separator.
 *
 * [suffix array]: https://en.wikipedia.org/wiki/Suffix_array
 */

use std::marker::PhantomData;

use crate::{
    GsaisError, InputElement, LargeAlphabet, OutputElement,
    induced_sorting::{self, Annotations, allocate},
    owned_or_borrowed::OwnedOrBorrowed,
    plcp,
    typestate::{
        BorrowedBuffer, BufferMode, BufferModeOrUndecided, OutputElementOrUndecided, OwnedBuffer,
        Undecided,
    },
};

/// The main entry point of this library, for constructing suffix arrays.
///
/// See [`suffix_array`](self) for details.
#[derive(Debug)]
pub struct SuffixArrayConstruction<
    's,
    't,
    I: InputElement,
    O: OutputElementOrUndecided,
    B: BufferModeOrUndecided,
> {
    text: &'t [I],
    suffix_array_buffer: Option<&'s mut [O]>,
    lcp: AuxiliaryArray<'s, O>,
    document_array: AuxiliaryArray<'s, O>,
    generalized_suffix_array: bool,
    alphabet_size: AlphabetSizeInner,
    _buffer_mode_marker: PhantomData<B>,
}

impl<'s, 't, I: InputElement, O: OutputElementOrUndecided, B: BufferModeOrUndecided>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    fn init(text: &'t [I]) -> Self {
        Self {
            text,
            suffix_array_buffer: None,
            lcp: AuxiliaryArray::Skip,
            document_array: AuxiliaryArray::Skip,
            generalized_suffix_array: false,
            alphabet_size: AlphabetSizeInner::ComputeFromMaxOfText,
            _buffer_mode_marker: PhantomData,
        }
    }
}

impl<'t, I: InputElement> SuffixArrayConstruction<'static, 't, I, Undecided, Undecided> {
    /// The first method to call.
    ///
    /// The text has to end with 0 and be at most as long as the maximum value of the output element type you
    /// will choose.
    pub fn for_text(text: &'t [I]) -> Self {
        Self::init(text)
    }

    /// Provide a buffer to the library in which the suffix array will be stored.
    ///
    /// The buffer has to be at least as large as the text. After choosing a borrowed buffer for the suffix
    /// array, the LCP and document arrays can only be requested in borrowed buffers as well.
    pub fn in_borrowed_buffer<'s, O: OutputElement>(
        self,
        suffix_array_buffer: &'s mut [O],
    ) -> SuffixArrayConstruction<'s, 't, I, O, BorrowedBuffer> {
        SuffixArrayConstruction {
            suffix_array_buffer: Some(suffix_array_buffer),
            ..SuffixArrayConstruction::init(self.text)
        }
    }

    /// Inform the library of your desired output element type,
    /// if you want to obtain the suffix array in a [`Vec`].
    pub fn in_owned_buffer<O: OutputElement>(
        self,
    ) -> SuffixArrayConstruction<'static, 't, I, O, OwnedBuffer> {
        SuffixArrayConstruction::init(self.text)
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<i32>`].
    pub fn in_owned_buffer32(self) -> SuffixArrayConstruction<'static, 't, I, i32, OwnedBuffer> {
        self.in_owned_buffer()
    }

    /// Inform the library that you want to obtain the suffix array in a [`Vec<i64>`].
    pub fn in_owned_buffer64(self) -> SuffixArrayConstruction<'static, 't, I, i64, OwnedBuffer> {
        self.in_owned_buffer()
    }
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Construct the generalized suffix array, which is the suffix array of a set of strings.
    ///
    /// See [`suffix_array`](self#generalized-suffix-array) for details.
    pub fn generalized_suffix_array(self) -> Self {
        Self {
            generalized_suffix_array: true,
            ..self
        }
    }
}

impl<'s, 't, I: LargeAlphabet, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Supply the algorithm with an alphabet size for large alphabets.
    ///
    /// All values of the text have to be in the range [0, alphabet_size), otherwise [`Self::run`] returns an
    /// error. See [`suffix_array`](self#large-alphabets) for details.
    pub fn with_alphabet_size(self, alphabet_size: AlphabetSize) -> Self {
        Self {
            alphabet_size: alphabet_size.0,
            ..self
        }
    }
}

impl<'t, I: InputElement, O: OutputElement> SuffixArrayConstruction<'static, 't, I, O, OwnedBuffer> {
    /// Additionally compute the LCP array in a [`Vec`].
    pub fn with_lcp_array(self) -> Self {
        Self {
            lcp: AuxiliaryArray::Owned,
            ..self
        }
    }

    /// Additionally compute the document array in a [`Vec`].
    ///
    /// Without the generalized suffix array mode, the whole text is a single document.
    pub fn with_document_array(self) -> Self {
        Self {
            document_array: AuxiliaryArray::Owned,
            ..self
        }
    }
}

impl<'s, 't, I: InputElement, O: OutputElement> SuffixArrayConstruction<'s, 't, I, O, BorrowedBuffer> {
    /// Additionally compute the LCP array in the given buffer, which has to be at least as large as the text.
    pub fn with_lcp_array_in_borrowed_buffer(self, lcp_buffer: &'s mut [O]) -> Self {
        Self {
            lcp: AuxiliaryArray::Borrowed(lcp_buffer),
            ..self
        }
    }

    /// Additionally compute the document array in the given buffer, which has to be at least as large as the
    /// text.
    pub fn with_document_array_in_borrowed_buffer(self, document_array_buffer: &'s mut [O]) -> Self {
        Self {
            document_array: AuxiliaryArray::Borrowed(document_array_buffer),
            ..self
        }
    }
}

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayConstruction<'s, 't, I, O, B>
{
    /// Construct the suffix array and the requested auxiliary arrays for the given text.
    ///
    /// # Returns
    ///
    /// An error or a type that bundles the arrays with a reference to the text.
    /// See [`suffix_array`](self#return-type-and-plcp) for details. No error is transient. Borrowed buffers are
    /// untouched after an `InvalidInput` or `Overflow` error, but their content is unspecified after `OutOfMemory`.
    pub fn run(mut self) -> Result<SuffixArrayWithText<'s, 't, I, O, B>, GsaisError> {
        let text_len = self.text.len();
        let alphabet_size = match (I::IMPLIED_ALPHABET_SIZE, self.alphabet_size) {
            (_, AlphabetSizeInner::Fixed { value }) => value,
            (Some(implied), AlphabetSizeInner::ComputeFromMaxOfText) => implied,
            (None, AlphabetSizeInner::ComputeFromMaxOfText) => {
                compute_alphabet_size(self.text)?
            }
        };

        // fail early, before allocating any owned buffer
        induced_sorting::validate_sizes::<O>(text_len, alphabet_size)?;

        let mut suffix_array =
            OwnedOrBorrowed::take_buffer_or_allocate(self.suffix_array_buffer.take(), || {
                allocate(text_len, O::ZERO)
            })?;
        let mut lcp = self.lcp.into_buffer::<B>(text_len)?;
        let mut document_array = self.document_array.into_buffer::<B>(text_len)?;

        let recursion_depth = induced_sorting::construct(
            self.text,
            alphabet_size,
            self.generalized_suffix_array,
            suffix_array.as_mut_slice(),
            Annotations {
                lcp: lcp.as_mut().map(OwnedOrBorrowed::as_mut_slice),
                documents: document_array.as_mut().map(OwnedOrBorrowed::as_mut_slice),
            },
        )?;

        suffix_array.truncate_to_text(text_len);
        for buffer in [lcp.as_mut(), document_array.as_mut()].into_iter().flatten() {
            buffer.truncate_to_text(text_len);
        }

        Ok(SuffixArrayWithText {
            suffix_array,
            lcp,
            document_array,
            text: self.text,
            is_generalized_suffix_array: self.generalized_suffix_array,
            recursion_depth,
        })
    }
}

/// The read-only return type of a suffix array construction.
///
/// It keeps a reference to the text to allow safely constructing a PLCP array.
#[derive(Debug)]
pub struct SuffixArrayWithText<'s, 't, I: InputElement, O: OutputElement, B: BufferMode> {
    pub(crate) suffix_array: OwnedOrBorrowed<'s, O, B>,
    pub(crate) lcp: Option<OwnedOrBorrowed<'s, O, B>>,
    pub(crate) document_array: Option<OwnedOrBorrowed<'s, O, B>>,
    pub(crate) text: &'t [I],
    pub(crate) is_generalized_suffix_array: bool,
    pub(crate) recursion_depth: usize,
}

/// The parts of a [`SuffixArrayWithText`]: suffix array, LCP array, document array and text.
pub type SuffixArrayParts<'s, 't, I, O, B> = (
    <B as BufferMode>::Buffer<'s, O>,
    Option<<B as BufferMode>::Buffer<'s, O>>,
    Option<<B as BufferMode>::Buffer<'s, O>>,
    &'t [I],
);

impl<'s, 't, I: InputElement, O: OutputElement, B: BufferMode>
    SuffixArrayWithText<'s, 't, I, O, B>
{
    pub fn suffix_array(&self) -> &[O] {
        self.suffix_array.as_slice()
    }

    /// `None` if the LCP array was not requested.
    pub fn lcp(&self) -> Option<&[O]> {
        self.lcp.as_ref().map(OwnedOrBorrowed::as_slice)
    }

    /// `None` if the document array was not requested.
    pub fn document_array(&self) -> Option<&[O]> {
        self.document_array.as_ref().map(OwnedOrBorrowed::as_slice)
    }

    pub fn text(&self) -> &'t [I] {
        self.text
    }

    pub fn is_generalized_suffix_array(&self) -> bool {
        self.is_generalized_suffix_array
    }

    /// The number of recursion levels the algorithm needed, 0 if all LMS substrings of the text were unique.
    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }

    /// Compute the PLCP array from the suffix array, see [`plcp`](super::plcp).
    pub fn permuted_lcp_array(&self) -> Result<Vec<O>, GsaisError> {
        plcp::permuted_lcp_array(
            self.text,
            self.suffix_array(),
            self.is_generalized_suffix_array,
        )
    }

    pub fn into_parts(self) -> SuffixArrayParts<'s, 't, I, O, B> {
        (
            self.suffix_array.into_inner(),
            self.lcp.map(OwnedOrBorrowed::into_inner),
            self.document_array.map(OwnedOrBorrowed::into_inner),
            self.text,
        )
    }
}

impl<'t, I: InputElement, O: OutputElement> SuffixArrayWithText<'static, 't, I, O, OwnedBuffer> {
    pub fn into_vec(self) -> Vec<O> {
        self.suffix_array.into_inner()
    }
}

/// An alphabet size for `i32`/`i64`-based texts.
///
/// See [`suffix_array`](self#large-alphabets) for details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlphabetSize(AlphabetSizeInner);

impl AlphabetSize {
    pub fn new(value: usize) -> Self {
        Self(AlphabetSizeInner::Fixed { value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum AlphabetSizeInner {
    ComputeFromMaxOfText,
    Fixed { value: usize },
}

#[derive(Debug)]
enum AuxiliaryArray<'s, O> {
    Skip,
    Owned,
    Borrowed(&'s mut [O]),
}

impl<'s, O: OutputElement> AuxiliaryArray<'s, O> {
    fn into_buffer<B: BufferMode>(
        self,
        text_len: usize,
    ) -> Result<Option<OwnedOrBorrowed<'s, O, B>>, GsaisError> {
        let borrowed = match self {
            AuxiliaryArray::Skip => return Ok(None),
            AuxiliaryArray::Owned => None,
            AuxiliaryArray::Borrowed(buffer) => Some(buffer),
        };

        OwnedOrBorrowed::take_buffer_or_allocate(borrowed, || allocate(text_len, O::ZERO)).map(Some)
    }
}

// The largest value of the text plus one. Negative values are reported by the validation of the text.
fn compute_alphabet_size<I: InputElement>(text: &[I]) -> Result<usize, GsaisError> {
    let max = text.iter().map(|&c| Into::<i64>::into(c)).max().unwrap_or(0).max(0);

    usize::try_from(max)
        .ok()
        .and_then(|max| max.checked_add(1))
        .ok_or(GsaisError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_size_from_text() {
        assert_eq!(compute_alphabet_size(&[3i32, 1, 0]), Ok(4));
        assert_eq!(compute_alphabet_size(&[-3i64, 0]), Ok(1));
        assert_eq!(compute_alphabet_size::<i32>(&[]), Ok(1));
    }

    #[test]
    fn borrowed_buffers_are_shortened() {
        let mut suffix_array = [-1i32; 6];
        let mut lcp = [-1i32; 5];

        let res = SuffixArrayConstruction::for_text(b"aab\0".as_slice())
            .in_borrowed_buffer(&mut suffix_array)
            .with_lcp_array_in_borrowed_buffer(&mut lcp)
            .run()
            .unwrap();

        assert_eq!(res.suffix_array(), &[3, 0, 1, 2]);
        assert_eq!(res.lcp(), Some([0, 0, 1, 0].as_slice()));
        assert_eq!(res.document_array(), None);

        let (suffix_array_part, lcp_part, document_array_part, text) = res.into_parts();
        assert_eq!(suffix_array_part.len(), 4);
        assert_eq!(lcp_part.map(|lcp| lcp.len()), Some(4));
        assert!(document_array_part.is_none());
        assert_eq!(text, b"aab\0");

        assert_eq!(suffix_array[4..], [-1, -1]);
        assert_eq!(lcp[4], -1);
    }
}
