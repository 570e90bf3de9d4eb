use gsais::{
    SuffixArrayConstruction, concatenate_texts_for_generalized_suffix_array, document_ranges, gsais,
    gsais_int,
};

mod common;

use common::*;

#[test]
fn two_documents() {
    let text = concatenate_texts_for_generalized_suffix_array([b"banana".as_slice(), b"ananas"]);

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_lcp_array()
        .with_document_array()
        .run()
        .expect("gsais should run without an error");

    assert_eq!(
        res.suffix_array(),
        &[6, 13, 5, 3, 1, 7, 9, 11, 0, 4, 2, 8, 10, 12]
    );
    assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 1, 3, 5, 3, 1, 0, 0, 2, 4, 2, 0]);
    assert_eq!(
        res.document_array().unwrap(),
        &[0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1]
    );
    assert_eq!(res.recursion_depth(), 1);
    assert!(res.is_generalized_suffix_array());
}

#[test]
fn nested_runs() {
    let text = b"aaaa\0aaa\0aa\0";

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer64()
        .generalized_suffix_array()
        .with_lcp_array()
        .with_document_array()
        .run()
        .unwrap();

    assert_eq!(res.suffix_array(), &[4, 8, 11, 3, 7, 10, 2, 6, 9, 1, 5, 0]);
    assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3]);
    assert_eq!(
        res.document_array().unwrap(),
        &[0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 0]
    );
}

#[test]
fn identical_documents_are_ordered_by_position() {
    let text = b"abcab\0abcab\0";

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_lcp_array()
        .with_document_array()
        .run()
        .unwrap();

    assert_eq!(res.suffix_array(), &[5, 11, 3, 9, 0, 6, 4, 10, 1, 7, 2, 8]);
    assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 2, 2, 5, 0, 1, 1, 4, 0, 3]);
    assert_eq!(
        res.document_array().unwrap(),
        &[0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1]
    );
}

#[test]
fn empty_documents() {
    let text = b"ab\0\0ab\0";

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_lcp_array()
        .with_document_array()
        .run()
        .unwrap();

    assert_eq!(res.suffix_array(), &[2, 3, 6, 0, 4, 1, 5]);
    assert_eq!(res.lcp().unwrap(), &[0, 0, 0, 0, 2, 0, 1]);
    assert_eq!(res.document_array().unwrap(), &[0, 1, 2, 0, 2, 0, 2]);

    let only_separators = SuffixArrayConstruction::for_text(b"\0\0\0")
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_document_array()
        .run()
        .unwrap();

    assert_eq!(only_separators.suffix_array(), &[0, 1, 2]);
    assert_eq!(only_separators.document_array().unwrap(), &[0, 1, 2]);
}

#[test]
fn plain_mode_ignores_separators() {
    let text = b"ab\0ab\0";

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .with_lcp_array()
        .with_document_array()
        .run()
        .unwrap();

    assert_eq!(res.suffix_array(), &[5, 2, 3, 0, 4, 1]);
    assert_eq!(res.lcp().unwrap(), &[0, 1, 0, 3, 0, 2]);
    assert_eq!(res.document_array().unwrap(), &[0; 6]);
}

#[test]
fn flat_functions() {
    let text = b"mississippi\0missouri\0";
    let mut suffix_array = vec![0i32; text.len()];
    let mut lcp = vec![0i32; text.len()];
    let mut document_array = vec![0i32; text.len() + 3];

    let depth = gsais(
        text,
        &mut suffix_array,
        Some(lcp.as_mut_slice()),
        Some(document_array.as_mut_slice()),
    )
    .expect("gsais should run without an error");

    assert_eq!(depth, 1);
    assert_eq!(
        suffix_array,
        vec![
            11, 20, 10, 19, 7, 4, 1, 13, 0, 12, 16, 9, 8, 18, 6, 3, 15, 5, 2, 14, 17
        ]
    );
    assert_eq!(
        lcp,
        vec![0, 0, 0, 1, 1, 1, 4, 3, 0, 4, 0, 0, 1, 0, 0, 2, 1, 1, 3, 2, 0]
    );
    assert_eq!(
        document_array[..text.len()],
        [0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1]
    );
    assert_eq!(document_array[text.len()..], [0, 0, 0]);

    let int_text: Vec<i64> = text.iter().map(|&c| c as i64).collect();
    let mut int_suffix_array = vec![0i64; text.len()];

    gsais_int(&int_text, &mut int_suffix_array, None, None, 128)
        .expect("gsais should run without an error");

    assert!(
        std::iter::zip(&int_suffix_array, &suffix_array).all(|(&wide, &narrow)| wide == narrow as i64)
    );
}

#[test]
fn random_collections() {
    let mut rng = seeded_rng(42);

    for round in 0..200 {
        let alphabet_size = [2, 3, 4, 27][round % 4];
        let text = random_collection(&mut rng, 1 + round % 9, alphabet_size);

        let res = SuffixArrayConstruction::for_text(text.as_slice())
            .in_owned_buffer32()
            .generalized_suffix_array()
            .with_lcp_array()
            .with_document_array()
            .run()
            .expect("gsais should run without an error");

        assert!(
            is_generalized_suffix_array(&text, res.suffix_array()),
            "{text:?}"
        );
        assert!(
            is_lcp_array(&text, res.suffix_array(), res.lcp().unwrap(), true),
            "{text:?}"
        );
        assert!(
            is_document_array(&text, res.suffix_array(), res.document_array().unwrap()),
            "{text:?}"
        );
    }
}

#[test]
fn construction_is_deterministic() {
    let mut rng = seeded_rng(7);
    let text = random_collection(&mut rng, 30, 3);

    let construct = || {
        SuffixArrayConstruction::for_text(text.as_slice())
            .in_owned_buffer64()
            .generalized_suffix_array()
            .with_lcp_array()
            .with_document_array()
            .run()
            .unwrap()
            .into_parts()
    };

    let (suffix_array, lcp, document_array, _) = construct();
    let (again_suffix_array, again_lcp, again_document_array, _) = construct();

    assert_eq!(suffix_array, again_suffix_array);
    assert_eq!(lcp, again_lcp);
    assert_eq!(document_array, again_document_array);
}

#[test]
fn documents_of_the_helper_ranges() {
    let texts = [b"tree".as_slice(), b"", b"three", b"eerie"];
    let text = concatenate_texts_for_generalized_suffix_array(texts);
    let ranges = document_ranges(&text);

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_document_array()
        .run()
        .unwrap();

    for (&suffix, &document) in std::iter::zip(res.suffix_array(), res.document_array().unwrap()) {
        let (suffix, document) = (suffix as usize, document as usize);
        assert!(ranges[document].contains(&suffix));

        let mut expected = texts[document][suffix - ranges[document].start..].to_vec();
        expected.push(0);
        assert_eq!(text[suffix..ranges[document].end], expected[..]);
    }
}
