use gsais::{
    SuffixArrayConstruction, concatenate_texts_for_generalized_suffix_array, document_ranges,
};

fn main() {
    let texts = [
        b"bababababa".as_slice(),
        b"lalalalala",
        b"mamamamama",
        b"papapapapa",
    ];

    // To create a generalized suffix array (GSA), we need to first concatenate all of the indiviual texts
    // into one text, separated by the 0 value (not '0' in ASCII). The individual texts should not contain this
    // value. The last character of the concatenated text also has to be 0.
    let concatenated_text = concatenate_texts_for_generalized_suffix_array(texts);

    // In the GSA mode, every separator is treated as a distinct symbol that is smaller than all others. The
    // separator of the first text is the smallest one. Common prefixes never extend over a separator.
    let res = SuffixArrayConstruction::for_text(&concatenated_text)
        .in_owned_buffer32()
        .generalized_suffix_array()
        .with_lcp_array()
        .with_document_array()
        .run()
        .unwrap();

    assert!(res.is_generalized_suffix_array());
    println!("Recursion depth: {}", res.recursion_depth());

    let ranges = document_ranges(&concatenated_text);
    let suffixes = std::iter::zip(res.suffix_array(), res.lcp().unwrap())
        .zip(res.document_array().unwrap());

    // the document array tells us where every suffix comes from, without a search in the document ranges
    for ((&suffix, &lcp), &document) in suffixes {
        let end = ranges[document as usize].end - 1;
        let suffix_text = String::from_utf8_lossy(&concatenated_text[suffix as usize..end]);
        println!("{suffix:>3} {lcp:>3} {document:>3}  {suffix_text}$");
    }
}
