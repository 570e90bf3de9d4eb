//! Generalized suffix array induced sorting (gSA-IS) with LCP and document array induction.
//!
//! One level of the recursion works as follows:
//!
//! 1. classify every position as S-type or L-type,
//! 2. sort the LMS substrings by inducing from their unsorted LMS positions,
//! 3. name the LMS substrings and, if two of them are equal, sort the reduced text recursively,
//! 4. induce the complete suffix array from the exactly sorted LMS suffixes.
//!
//! The LCP and document arrays are only computed on the top level, during the last induction.

mod buckets;
mod classify;
mod induce;
mod lcp;
mod lms;
mod text;

use log::debug;

use crate::{GsaisError, InputElement, InvalidInput, OutputElement, type_model::fits_into};

use buckets::Buckets;
use classify::SuffixTypes;
use induce::induce_suffix_array;
use lms::{name_lms_substrings, sort_lms_substrings};

pub(crate) use text::Text;

/// The optional output arrays that are computed alongside the suffix array.
#[derive(Debug)]
pub(crate) struct Annotations<'a, O> {
    pub(crate) lcp: Option<&'a mut [O]>,
    pub(crate) documents: Option<&'a mut [O]>,
}

impl<O> Annotations<'_, O> {
    pub(crate) fn none() -> Self {
        Self {
            lcp: None,
            documents: None,
        }
    }
}

pub(crate) fn allocate<T: Clone>(len: usize, value: T) -> Result<Vec<T>, GsaisError> {
    let mut buffer = try_with_capacity(len)?;
    buffer.resize(len, value);
    Ok(buffer)
}

pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>, GsaisError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| GsaisError::OutOfMemory)?;
    Ok(buffer)
}

/// The checks that only depend on the sizes of the input.
pub(crate) fn validate_sizes<O: OutputElement>(
    text_len: usize,
    alphabet_size: usize,
) -> Result<(), GsaisError> {
    if text_len == 0 {
        return Err(InvalidInput::EmptyText.into());
    }

    if alphabet_size == 0 {
        return Err(InvalidInput::EmptyAlphabet.into());
    }

    if !fits_into::<O>(text_len) || !fits_into::<O>(alphabet_size) {
        return Err(GsaisError::Overflow);
    }

    Ok(())
}

fn validate_buffer_len(required: usize, actual: usize) -> Result<(), GsaisError> {
    if actual < required {
        Err(InvalidInput::BufferTooSmall { required, actual }.into())
    } else {
        Ok(())
    }
}

/// Every check that is done before any output buffer is written to.
pub(crate) fn validate<I: InputElement, O: OutputElement>(
    text: &[I],
    alphabet_size: usize,
    suffix_array: &[O],
    annotations: &Annotations<'_, O>,
) -> Result<(), GsaisError> {
    let n = text.len();
    validate_sizes::<O>(n, alphabet_size)?;

    validate_buffer_len(n, suffix_array.len())?;
    if let Some(lcp) = annotations.lcp.as_deref() {
        validate_buffer_len(n, lcp.len())?;
    }
    if let Some(documents) = annotations.documents.as_deref() {
        validate_buffer_len(n, documents.len())?;
    }

    if text[n - 1] != I::ZERO {
        return Err(InvalidInput::MissingTerminator.into());
    }

    for (position, &c) in text.iter().enumerate() {
        let value: i64 = c.into();

        if value < 0 {
            return Err(InvalidInput::NegativeSymbol { position }.into());
        }

        if value as u64 >= alphabet_size as u64 {
            return Err(InvalidInput::SymbolOutOfRange {
                position,
                alphabet_size,
            }
            .into());
        }
    }

    Ok(())
}

/// Validates the input and sorts the suffixes of `text` into the first `text.len()` slots of `suffix_array`.
///
/// Returns the recursion depth.
pub(crate) fn construct<I: InputElement, O: OutputElement>(
    text: &[I],
    alphabet_size: usize,
    generalized: bool,
    suffix_array: &mut [O],
    annotations: Annotations<'_, O>,
) -> Result<usize, GsaisError> {
    validate(text, alphabet_size, suffix_array, &annotations)?;

    let n = text.len();
    debug!(
        "constructing {}suffix array of a text of length {n} with alphabet size {alphabet_size}",
        if generalized { "generalized " } else { "" },
    );

    let annotations = Annotations {
        lcp: annotations.lcp.map(|lcp| &mut lcp[..n]),
        documents: annotations.documents.map(|documents| &mut documents[..n]),
    };

    let depth = induced_sort(
        &Text::new(text, generalized),
        alphabet_size,
        &mut suffix_array[..n],
        annotations,
    )?;

    debug!("suffix array construction finished with recursion depth {depth}");

    Ok(depth)
}

/// One level of the recursion. `suffix_array` has exactly the length of the text.
fn induced_sort<C: InputElement, O: OutputElement>(
    text: &Text<C>,
    alphabet_size: usize,
    suffix_array: &mut [O],
    annotations: Annotations<'_, O>,
) -> Result<usize, GsaisError> {
    let types = SuffixTypes::classify(text)?;
    let mut buckets = Buckets::count(text, alphabet_size)?;

    let lms_count = sort_lms_substrings(text, &types, &mut buckets, suffix_array);
    let reduced = name_lms_substrings(text, &types, &suffix_array[..lms_count])?;

    debug!(
        "text of length {} has {lms_count} LMS substrings with {} distinct names",
        text.len(),
        reduced.name_count
    );

    let mut ranking = allocate(lms_count, O::ZERO)?;

    let depth = if reduced.has_unique_names() {
        for (q, name) in reduced.names.iter().enumerate() {
            ranking[name.as_index()] = O::from_index(q);
        }

        0
    } else {
        let reduced_text = Text::new(reduced.names.as_slice(), false);
        induced_sort(
            &reduced_text,
            reduced.name_count,
            &mut ranking,
            Annotations::none(),
        )? + 1
    };

    induce_suffix_array(
        text,
        &types,
        &mut buckets,
        suffix_array,
        &reduced.lms_positions,
        &ranking,
        annotations,
    )?;

    Ok(depth)
}
