#![allow(unused)]

use gsais::{InputElement, OutputElement, document_ranges};
use num_traits::NumCast;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn random_text(rng: &mut StdRng, len: usize, alphabet_size: u8) -> Vec<u8> {
    let mut text: Vec<u8> = std::iter::repeat_with(|| rng.random_range(1..alphabet_size))
        .take(len)
        .collect();
    text.push(0);
    text
}

/// Documents of random lengths, including empty ones.
pub fn random_collection(rng: &mut StdRng, documents: usize, alphabet_size: u8) -> Vec<u8> {
    let mut text = Vec::new();

    for _ in 0..documents {
        let len = rng.random_range(0..12);
        text.extend(std::iter::repeat_with(|| rng.random_range(1..alphabet_size)).take(len));
        text.push(0);
    }

    text
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn to_usize<O: OutputElement>(value: O) -> usize {
    <usize as NumCast>::from(value).unwrap()
}

/// Sort key of a suffix in generalized mode: separators are smaller than every symbol and ordered by position.
fn generalized_key<I: InputElement>(text: &[I], suffix: usize) -> Vec<(u8, i64)> {
    text[suffix..]
        .iter()
        .enumerate()
        .map(|(offset, &c)| {
            if c == I::zero() {
                (0, (suffix + offset) as i64)
            } else {
                (1, c.into())
            }
        })
        .collect()
}

pub fn is_suffix_array<I: InputElement, O: OutputElement>(
    text: &[I],
    maybe_suffix_array: &[O],
) -> bool {
    if text.len() != maybe_suffix_array.len() || !is_permutation(maybe_suffix_array) {
        return false;
    }

    maybe_suffix_array.windows(2).all(|indices| {
        let previous = to_usize(indices[0]);
        let current = to_usize(indices[1]);
        text[previous..] < text[current..]
    })
}

pub fn is_generalized_suffix_array<I: InputElement, O: OutputElement>(
    concatenated_text: &[I],
    maybe_suffix_array: &[O],
) -> bool {
    if concatenated_text.len() != maybe_suffix_array.len() || !is_permutation(maybe_suffix_array) {
        return false;
    }

    maybe_suffix_array.windows(2).all(|indices| {
        let previous = generalized_key(concatenated_text, to_usize(indices[0]));
        let current = generalized_key(concatenated_text, to_usize(indices[1]));
        previous < current
    })
}

fn is_permutation<O: OutputElement>(suffix_array: &[O]) -> bool {
    let mut seen = vec![false; suffix_array.len()];

    for &entry in suffix_array {
        let Some(position) = <usize as NumCast>::from(entry) else {
            return false;
        };

        if position >= seen.len() || seen[position] {
            return false;
        }

        seen[position] = true;
    }

    true
}

pub fn longest_common_prefix<I: InputElement>(
    t1: &[I],
    t2: &[I],
    is_generalized_suffix_array: bool,
) -> usize {
    std::iter::zip(t1, t2)
        .take_while(|&(&c1, &c2)| c1 == c2 && !(is_generalized_suffix_array && c1 == I::zero()))
        .count()
}

pub fn is_lcp_array<I: InputElement, O: OutputElement>(
    text: &[I],
    suffix_array: &[O],
    lcp: &[O],
    is_generalized_suffix_array: bool,
) -> bool {
    if lcp.len() != suffix_array.len() || lcp.first().is_some_and(|&l| l != O::zero()) {
        return false;
    }

    suffix_array.windows(2).enumerate().all(|(i, indices)| {
        let first = to_usize(indices[0]);
        let second = to_usize(indices[1]);

        longest_common_prefix(&text[first..], &text[second..], is_generalized_suffix_array)
            == to_usize(lcp[i + 1])
    })
}

pub fn is_document_array<I: InputElement, O: OutputElement>(
    concatenated_text: &[I],
    suffix_array: &[O],
    document_array: &[O],
) -> bool {
    let ranges = document_ranges(concatenated_text);

    document_array.len() == suffix_array.len()
        && std::iter::zip(suffix_array, document_array).all(|(&suffix, &document)| {
            ranges
                .get(to_usize(document))
                .is_some_and(|range| range.contains(&to_usize(suffix)))
        })
}

pub fn is_plcp<O: OutputElement>(suffix_array: &[O], plcp: &[O], lcp: &[O]) -> bool {
    // `PLCP[SUF[j]] = p <=> LCP[j] = p`
    std::iter::zip(suffix_array, lcp).all(|(&suffix, &l)| plcp[to_usize(suffix)] == l)
}
