use gsais::{SuffixArrayConstruction, lcp::lcp_array_from_plcp};

fn main() {
    let text = b"barnabasbabblesaboutbananas\0";

    // The LCP array is induced together with the suffix array, so requesting it is the cheapest way to get it.
    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .with_lcp_array()
        .run()
        .unwrap();

    // For a suffix array that was obtained in some other way, the LCP array can be derived from the permuted
    // LCP array (PLCP). Both ways lead to the same result.
    let plcp = res.permuted_lcp_array().unwrap();
    let lcp_from_plcp = lcp_array_from_plcp(&plcp, res.suffix_array()).unwrap();
    assert_eq!(res.lcp().unwrap(), lcp_from_plcp);

    // we can destructure the returned object and drop the document array and the text
    let (suffix_array, lcp, _, _) = res.into_parts();

    println!("Suffix array: {suffix_array:?}");
    println!("Longest common prefix array: {lcp:?}");
}
