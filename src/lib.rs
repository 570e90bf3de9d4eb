/*!
 * Linear-time construction of (generalized) [suffix arrays] together with the [LCP array] and the document array.
 *
 * The algorithm is a generalized version of [Suffix Array Induced Sort] (SA-IS). A set of texts (documents) is
 * concatenated into a single text in which every document is followed by the separator 0 (not ASCII '0'). All
 * separators share the same symbol, but they are sorted as if they were distinct symbols
 * `$1 < $2 < ... < $d` that are smaller than every other symbol. This keeps the alphabet small no matter how many
 * documents there are.
 *
 * While the suffixes are sorted, two more arrays can be computed at almost no extra cost:
 *
 * - the longest common prefix (LCP) array: `LCP[i]` is the length of the longest common prefix of the suffixes
 *   at `SA[i - 1]` and `SA[i]`. `LCP[0]` is 0. Common prefixes never extend over a separator.
 * - the document array (DA): `DA[i]` is the index of the document that contains the suffix at `SA[i]`.
 *
 * The main entry point is the builder-like [`SuffixArrayConstruction`]. It is configured by choosing an output
 * element type (`i32` or `i64`) and by choosing between an owned [`Vec`] and a borrowed slice as output buffers:
 *
 * ```
 * use gsais::{SuffixArrayConstruction, concatenate_texts_for_generalized_suffix_array};
 *
 * let text = concatenate_texts_for_generalized_suffix_array([b"banana".as_slice(), b"ananas"]);
 *
 * let res = SuffixArrayConstruction::for_text(&text)
 *     .in_owned_buffer32()
 *     .generalized_suffix_array()
 *     .with_lcp_array()
 *     .with_document_array()
 *     .run()
 *     .unwrap();
 *
 * assert_eq!(res.suffix_array(), &[6, 13, 5, 3, 1, 7, 9, 11, 0, 4, 2, 8, 10, 12]);
 * assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 1, 3, 5, 3, 1, 0, 0, 2, 4, 2, 0]);
 * assert_eq!(res.document_array().unwrap(), &[0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1]);
 * ```
 *
 * There are also four flat functions in the style of the C interface, [`sais`], [`sais_int`], [`gsais`] and
 * [`gsais_int`], which write into caller-provided buffers. Their result can be turned into the negative return
 * codes of the C interface with [`IntoReturnCode`].
 *
 * # Terminator Convention
 *
 * Every text has to end with the symbol 0, which acts as the sentinel of the last document. The end of the text is
 * additionally treated as a virtual sentinel that is smaller than every symbol. Therefore, the resulting suffix
 * array has the same length as the text.
 *
 * Without the generalized mode, 0 is an ordinary symbol. The last suffix then always comes first, but zeros inside
 * the text are not treated as separators and the document array consists of zeros only.
 *
 * # Output Element Types
 *
 * The output element type bounds the length of the text. Both `i32` and `i64` produce identical arrays for all
 * texts that fit into `i32`. The recursion of the algorithm uses the output element type for its reduced texts.
 *
 * # Logging
 *
 * The construction reports its progress through the [`log`](https://docs.rs/log) facade on the debug and trace
 * levels. No logger is installed by this library.
 *
 * [suffix arrays]: https://en.wikipedia.org/wiki/Suffix_array
 * [LCP array]: https://en.wikipedia.org/wiki/LCP_array
 * [Suffix Array Induced Sort]: https://www.doi.org/10.1109/TC.2010.188
 */

mod error;
mod helpers;
mod induced_sorting;
mod owned_or_borrowed;
mod type_model;

pub mod lcp;
pub mod plcp;
pub mod suffix_array;
pub mod typestate;

pub use error::{GsaisError, IntoReturnCode, InvalidInput};
pub use helpers::{concatenate_texts_for_generalized_suffix_array, document_ranges};
pub use suffix_array::{AlphabetSize, SuffixArrayConstruction, SuffixArrayWithText};
pub use type_model::{InputElement, LargeAlphabet, OutputElement};

use induced_sorting::{Annotations, construct};

const BYTE_ALPHABET_SIZE: usize = 1 << 8;

/// Constructs the suffix array of a byte text that ends with 0.
///
/// Returns the recursion depth of the algorithm.
pub fn sais<O: OutputElement>(text: &[u8], suffix_array: &mut [O]) -> Result<usize, GsaisError> {
    construct(
        text,
        BYTE_ALPHABET_SIZE,
        false,
        suffix_array,
        Annotations::none(),
    )
}

/// Constructs the suffix array of an integer text that ends with 0. All symbols have to be in the range
/// `[0, alphabet_size)`.
///
/// Returns the recursion depth of the algorithm.
pub fn sais_int<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &mut [O],
    alphabet_size: usize,
) -> Result<usize, GsaisError> {
    construct(text, alphabet_size, false, suffix_array, Annotations::none())
}

/// Constructs the generalized suffix array of a byte text in which every document ends with 0, and optionally
/// the LCP and document arrays.
///
/// Returns the recursion depth of the algorithm.
pub fn gsais<O: OutputElement>(
    text: &[u8],
    suffix_array: &mut [O],
    lcp: Option<&mut [O]>,
    document_array: Option<&mut [O]>,
) -> Result<usize, GsaisError> {
    gsais_int(text, suffix_array, lcp, document_array, BYTE_ALPHABET_SIZE)
}

/// Constructs the generalized suffix array of an integer text in which every document ends with 0, and
/// optionally the LCP and document arrays. All symbols have to be in the range `[0, alphabet_size)`.
///
/// Returns the recursion depth of the algorithm.
pub fn gsais_int<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &mut [O],
    lcp: Option<&mut [O]>,
    document_array: Option<&mut [O]>,
    alphabet_size: usize,
) -> Result<usize, GsaisError> {
    construct(
        text,
        alphabet_size,
        true,
        suffix_array,
        Annotations {
            lcp,
            documents: document_array,
        },
    )
}

pub(crate) mod sealed {
    pub trait Sealed {}
}
