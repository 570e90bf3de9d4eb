use std::collections::HashMap;

use gsais::{AlphabetSize, SuffixArrayConstruction};

// small for demonstration purposes, but it should work with large values (up to the realm of billions)
const TEXT_LEN: usize = 10;

fn create_random_text() -> Vec<i64> {
    let mut text: Vec<i64> = std::iter::repeat_with(rand::random)
        .filter(|&x| x > 0)
        .take(TEXT_LEN)
        .collect();

    // the terminator
    text.push(0);
    text
}

// the terminator stays 0, because it is the smallest value of the text
fn with_dense_alphabet(text: &[i64]) -> (Vec<i64>, usize) {
    let mut unique_characters = text.to_vec();
    unique_characters.sort_unstable();
    unique_characters.dedup();

    let transformation_table: HashMap<_, _> = unique_characters
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as i64))
        .collect();

    let dense_text = text.iter().map(|c| transformation_table[c]).collect();

    (dense_text, unique_characters.len())
}

fn main() {
    // a text of random, positive i64 values. (negative values are NOT allowed)
    let initial_text = create_random_text();
    println!("Initial text: {initial_text:?}");

    // Constructing a suffix array of the initial text like this is a very bad idea, because the SA-IS algorithm
    // is sensitive to the alphabet size (referred to as k) of the input text. It needs to hold in memory
    // two arrays of size k during the execution of the algorithm.

    // All values of the input text need to be in the range [0, k). It follows that for a random text,
    // k might have to be as large as i64::MAX. With the i32 output type, such an alphabet is rejected.
    let error = SuffixArrayConstruction::for_text(&initial_text)
        .in_owned_buffer32()
        .run()
        .unwrap_err();
    println!("Without a dense alphabet: {error}");

    // To solve this issue, we create a new "dense" text. To this end, we first calculate the
    // minimum necessary alphabet size k_min by counting the number of distinct values. Then, we map the values
    // of the original text to the range [0, k_min), preserving their relative order.
    let (dense_text, alphabet_size) = with_dense_alphabet(&initial_text);
    println!("Dense text: {dense_text:?}\nAlphabet size: {alphabet_size}");

    // Passing the alphabet size saves a linear scan of the text to determine it. The text is still checked
    // for values outside of the alphabet.
    let res = SuffixArrayConstruction::for_text(&dense_text)
        .in_owned_buffer64()
        .with_alphabet_size(AlphabetSize::new(alphabet_size))
        .run()
        .unwrap();

    // The resulting suffix array is valid for dense_text AND initial_text!
    println!("Suffix array: {:?}", res.suffix_array());
}
