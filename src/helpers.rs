use std::ops::Range;

use crate::InputElement;

/// Concatenates texts into the input of a generalized suffix array construction.
///
/// Every text is followed by a 0 separator (not ASCII '0'), so the result also ends with 0. The individual
/// texts should not contain 0.
pub fn concatenate_texts_for_generalized_suffix_array<'a, I: InputElement + 'a>(
    iter: impl IntoIterator<Item = &'a [I]>,
) -> Vec<I> {
    let texts: Vec<_> = iter.into_iter().collect();
    let needed_capacity = texts.iter().map(|t| t.len()).sum::<usize>() + texts.len();
    let mut concatenated_text = Vec::with_capacity(needed_capacity);

    for t in texts {
        concatenated_text.extend_from_slice(t);
        concatenated_text.push(I::ZERO);
    }

    concatenated_text
}

/// The half-open ranges of the documents of a concatenated text, each including its separator.
///
/// Trailing symbols after the last separator form a final document.
pub fn document_ranges<I: InputElement>(concatenated_text: &[I]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for (position, &c) in concatenated_text.iter().enumerate() {
        if c == I::ZERO {
            ranges.push(start..position + 1);
            start = position + 1;
        }
    }

    if start < concatenated_text.len() {
        ranges.push(start..concatenated_text.len());
    }

    ranges
}
