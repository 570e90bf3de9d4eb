/*!
 * Construct the [permuted longest common prefix array]
 * (PLCP) for a suffix array and text.
 *
 * The PLCP is a similar data structure to the longest common prefix array (LCP). The difference is that
 * the longest common prefix values appear in text order rather than lexicographical order.
 * It can be defined as follows: `PLCP[SUF[j]] = p <=> LCP[j] = p`.
 *
 * The construction uses the Φ algorithm, which runs in linear time and needs no memory besides the PLCP
 * itself. It is independent of the LCP array computed during suffix sorting, which makes it useful for
 * verifying that array, and it works for every correct suffix array, no matter how it was obtained.
 *
 * ```
 * use gsais::SuffixArrayConstruction;
 *
 * let text = b"abracadabra\0".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .run()
 *     .unwrap();
 *
 * let plcp = res.permuted_lcp_array().unwrap();
 * assert_eq!(plcp, vec![4, 3, 2, 1, 0, 1, 0, 1, 0, 0, 0, 0]);
 * ```
 *
 * # Generalized Suffix Array Support
 *
 * When using the generalized suffix array mode, the longest common prefix calculation behaves as theoretically
 * expected. Only the prefixes of individual texts are compared and the separators stop the comparison.
 *
 * [permuted longest common prefix array]: https://doi.org/10.1007/978-3-642-02441-2_17
 */

use crate::{
    GsaisError, InputElement, InvalidInput, OutputElement,
    induced_sorting::{Text, allocate},
};

/// Construct the PLCP array from a text and its (generalized) suffix array.
///
/// Only the first `text.len()` entries of `suffix_array` are used. Fails if the suffix array is too short or
/// contains a value that is not a position of the text.
pub fn permuted_lcp_array<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    generalized_suffix_array: bool,
) -> Result<Vec<O>, GsaisError> {
    let n = text.len();

    if suffix_array.len() < n {
        return Err(InvalidInput::BufferTooSmall {
            required: n,
            actual: suffix_array.len(),
        }
        .into());
    }

    // first, plcp[SA[i]] = SA[i - 1], the lexicographical predecessor of every suffix
    let mut plcp = allocate(n, O::EMPTY)?;
    let mut predecessor = O::EMPTY;

    for (slot, &entry) in suffix_array[..n].iter().enumerate() {
        let position = checked_position(entry, n, slot)?;
        plcp[position] = predecessor;
        predecessor = entry;
    }

    let text = Text::new(text, generalized_suffix_array);
    let mut common_prefix = 0;

    for position in 0..n {
        let predecessor = plcp[position];

        if predecessor == O::EMPTY {
            plcp[position] = O::ZERO;
            common_prefix = 0;
            continue;
        }

        common_prefix = text.common_prefix_len(position, predecessor.as_index(), common_prefix);
        plcp[position] = O::from_index(common_prefix);
        common_prefix = common_prefix.saturating_sub(1);
    }

    Ok(plcp)
}

pub(crate) fn checked_position<O: OutputElement>(
    entry: O,
    len: usize,
    slot: usize,
) -> Result<usize, GsaisError> {
    if entry < O::ZERO || entry.as_index() >= len {
        Err(InvalidInput::SuffixArrayEntryOutOfRange { slot }.into())
    } else {
        Ok(entry.as_index())
    }
}
