use super::{
    Buckets, SuffixTypes, Text, allocate,
    induce::{induce_l_types, induce_s_types, place_separators},
    try_with_capacity,
};
use crate::{GsaisError, InputElement, OutputElement};

/// Sorts the LMS substrings by one round of induction and moves the LMS positions, in that order, to the
/// front of `suffix_array`. Returns the number of LMS positions.
pub(crate) fn sort_lms_substrings<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    buckets: &mut Buckets,
    suffix_array: &mut [O],
) -> usize {
    suffix_array.fill(O::EMPTY);
    place_separators(text, buckets, suffix_array, None);

    buckets.reset_tails();
    for position in types.lms_positions() {
        if !text.is_separator(position) {
            let slot = buckets.push_back(text.symbol(position));
            suffix_array[slot] = O::from_index(position);
        }
    }

    induce_l_types(text, types, buckets, suffix_array, None, None);
    induce_s_types(text, types, buckets, suffix_array, None, None);

    let mut lms_count = 0;
    for slot in 0..suffix_array.len() {
        let entry = suffix_array[slot];
        if entry != O::EMPTY && types.is_lms(entry.as_index()) {
            suffix_array[lms_count] = entry;
            lms_count += 1;
        }
    }

    lms_count
}

/// The text of the next recursion level.
#[derive(Debug)]
pub(crate) struct ReducedText<O> {
    /// All LMS positions in text order.
    pub(crate) lms_positions: Vec<usize>,
    /// The name of the LMS substring at every LMS position, in text order.
    pub(crate) names: Vec<O>,
    pub(crate) name_count: usize,
}

impl<O> ReducedText<O> {
    pub(crate) fn has_unique_names(&self) -> bool {
        self.name_count == self.names.len()
    }
}

/// Gives every LMS substring its rank among the distinct LMS substrings.
///
/// `sorted_lms` holds the LMS positions ordered by their LMS substrings.
pub(crate) fn name_lms_substrings<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    sorted_lms: &[O],
) -> Result<ReducedText<O>, GsaisError> {
    // LMS positions are at least two apart
    let mut names_by_half = allocate(text.len() / 2 + 1, O::EMPTY)?;
    let mut name_count = 0;
    let mut previous = None;

    for entry in sorted_lms {
        let position = entry.as_index();

        let is_new_name = match previous {
            Some(previous) => !lms_substrings_equal(text, types, previous, position),
            None => true,
        };
        if is_new_name {
            name_count += 1;
        }

        names_by_half[position / 2] = O::from_index(name_count - 1);
        previous = Some(position);
    }

    let mut lms_positions = try_with_capacity(sorted_lms.len())?;
    lms_positions.extend(types.lms_positions());

    let mut names = try_with_capacity(lms_positions.len())?;
    names.extend(
        lms_positions
            .iter()
            .map(|&position| names_by_half[position / 2]),
    );

    Ok(ReducedText {
        lms_positions,
        names,
        name_count,
    })
}

/// Whether the LMS substrings starting at `p` and `q` are equal in symbols and types, up to and including the
/// next LMS position.
///
/// Substrings that contain a separator or run into the end of the text are unique.
pub(crate) fn lms_substrings_equal<C: InputElement>(
    text: &Text<C>,
    types: &SuffixTypes,
    p: usize,
    q: usize,
) -> bool {
    let n = text.len();

    if text.is_separator(p) || text.is_separator(q) {
        return false;
    }

    let mut offset = 0;

    loop {
        let (a, b) = (p + offset, q + offset);

        if a == n || b == n {
            return false;
        }

        if text.symbol(a) != text.symbol(b)
            || types.is_s(a) != types.is_s(b)
            || text.is_separator(a)
        {
            return false;
        }

        if offset > 0 && (types.is_lms(a) || types.is_lms(b)) {
            return types.is_lms(a) && types.is_lms(b);
        }

        offset += 1;
    }
}
