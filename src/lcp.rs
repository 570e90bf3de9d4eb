/*!
 * Construct the [longest common prefix array] (LCP) from a permuted LCP array (PLCP) for a suffix array.
 *
 * The LCP array is usually computed together with the suffix array, see
 * [`SuffixArrayConstruction::with_lcp_array`](crate::SuffixArrayConstruction::with_lcp_array). This module
 * derives it from a PLCP instead, for suffix arrays that were obtained in some other way.
 *
 * ```
 * use gsais::{SuffixArrayConstruction, lcp::lcp_array_from_plcp};
 *
 * let text = b"abracadabra\0".as_slice();
 *
 * let res = SuffixArrayConstruction::for_text(text)
 *     .in_owned_buffer32()
 *     .with_lcp_array()
 *     .run()
 *     .unwrap();
 *
 * let plcp = res.permuted_lcp_array().unwrap();
 * let lcp = lcp_array_from_plcp(&plcp, res.suffix_array()).unwrap();
 *
 * assert_eq!(lcp, res.lcp().unwrap());
 * ```
 *
 * # Output Convention
 *
 * The LCP array always starts with a 0. The second entry is the LCP value for the first two suffixes
 * of the suffix array, and so on.
 *
 * [longest common prefix array]: https://en.wikipedia.org/wiki/LCP_array
 */

use crate::{GsaisError, OutputElement, induced_sorting::allocate, plcp::checked_position};

/// Construct the LCP array by permuting the PLCP array into suffix array order.
///
/// Fails if the suffix array contains a value that is not a position of the PLCP array.
pub fn lcp_array_from_plcp<O: OutputElement>(
    plcp: &[O],
    suffix_array: &[O],
) -> Result<Vec<O>, GsaisError> {
    let mut lcp = allocate(suffix_array.len(), O::ZERO)?;

    for (slot, &entry) in suffix_array.iter().enumerate() {
        lcp[slot] = plcp[checked_position(entry, plcp.len(), slot)?];
    }

    Ok(lcp)
}
