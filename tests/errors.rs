use gsais::{
    AlphabetSize, GsaisError, IntoReturnCode, InvalidInput, SuffixArrayConstruction, gsais,
    gsais_int, sais, sais_int,
};

#[test]
fn empty_text() {
    let text: &[u8] = &[];

    let res = SuffixArrayConstruction::for_text(text)
        .in_owned_buffer32()
        .run();

    assert_eq!(res.unwrap_err(), InvalidInput::EmptyText.into());
    assert_eq!(sais::<i32>(text, &mut []).into_return_code(), -1);
}

#[test]
fn missing_terminator() {
    let res = SuffixArrayConstruction::for_text(b"banana")
        .in_owned_buffer32()
        .generalized_suffix_array()
        .run();

    assert_eq!(res.unwrap_err(), InvalidInput::MissingTerminator.into());

    let res = SuffixArrayConstruction::for_text(b"banana")
        .in_owned_buffer32()
        .run();

    assert_eq!(res.unwrap_err(), InvalidInput::MissingTerminator.into());
}

#[test]
fn symbols_outside_of_alphabet() {
    let text = [2i32, 1, 5, 0];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .with_alphabet_size(AlphabetSize::new(3))
        .run();

    assert_eq!(
        res.unwrap_err(),
        InvalidInput::SymbolOutOfRange {
            position: 2,
            alphabet_size: 3
        }
        .into()
    );

    let mut suffix_array = [0i64; 4];
    assert_eq!(
        sais_int(&[2i64, -1, 0, 0], &mut suffix_array, 3),
        Err(InvalidInput::NegativeSymbol { position: 1 }.into())
    );
    assert_eq!(
        gsais_int(&text, &mut suffix_array, None, None, 0),
        Err(InvalidInput::EmptyAlphabet.into())
    );
}

#[test]
fn negative_symbols_with_computed_alphabet() {
    let text = [-4i64, 2, 0];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer64()
        .run();

    assert_eq!(
        res.unwrap_err(),
        InvalidInput::NegativeSymbol { position: 0 }.into()
    );
}

#[test]
fn borrowed_buffers_are_untouched_on_error() {
    let text = b"ab\0ab";
    let mut suffix_array = vec![-7i32; 5];
    let mut lcp = vec![-7i32; 5];
    let mut document_array = vec![-7i32; 5];

    let res = gsais(
        text,
        &mut suffix_array,
        Some(lcp.as_mut_slice()),
        Some(document_array.as_mut_slice()),
    );

    assert_eq!(res, Err(InvalidInput::MissingTerminator.into()));
    assert_eq!(res.into_return_code(), -1);
    assert!(
        [&suffix_array, &lcp, &document_array]
            .iter()
            .all(|buffer| buffer.iter().all(|&value| value == -7))
    );
}

#[test]
fn late_validation_errors_leave_borrowed_buffers_untouched() {
    let text = [2i32, 1, 0, 2, 1, 0];
    let mut suffix_array = vec![-7i32; 6];
    let mut lcp = vec![-7i32; 6];
    let mut document_array = vec![-7i32; 5];

    // the document array is the last buffer that is checked
    let res = gsais_int(
        &text,
        &mut suffix_array,
        Some(lcp.as_mut_slice()),
        Some(document_array.as_mut_slice()),
        3,
    );

    assert_eq!(
        res,
        Err(InvalidInput::BufferTooSmall {
            required: 6,
            actual: 5
        }
        .into())
    );
    assert!(suffix_array.iter().chain(&lcp).all(|&value| value == -7));

    let res = gsais_int(
        &text,
        &mut suffix_array,
        Some(lcp.as_mut_slice()),
        None,
        i32::MAX as usize + 1,
    );

    assert_eq!(res, Err(GsaisError::Overflow));
    assert_eq!(res.into_return_code(), -3);
    assert!(
        [&suffix_array, &lcp, &document_array]
            .iter()
            .all(|buffer| buffer.iter().all(|&value| value == -7))
    );
}

#[test]
fn buffers_too_small() {
    let text = b"ab\0ab\0";
    let mut suffix_array = vec![0i32; 6];
    let mut short = vec![0i32; 5];

    let res = SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(&mut short)
        .run();

    assert_eq!(
        res.unwrap_err(),
        InvalidInput::BufferTooSmall {
            required: 6,
            actual: 5
        }
        .into()
    );

    let res = SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(&mut suffix_array)
        .generalized_suffix_array()
        .with_document_array_in_borrowed_buffer(&mut short)
        .run();

    assert!(matches!(
        res,
        Err(GsaisError::InvalidInput(InvalidInput::BufferTooSmall { .. }))
    ));
}

#[test]
fn alphabet_too_large_for_narrow_output() {
    let text = [1i64 << 40, 0];

    let res = SuffixArrayConstruction::for_text(&text)
        .in_owned_buffer32()
        .run();

    assert_eq!(res.unwrap_err(), GsaisError::Overflow);
    assert_eq!(GsaisError::Overflow.return_code(), -3);
}

#[test]
fn return_codes() {
    let mut suffix_array = vec![0i32; 7];

    assert_eq!(
        sais(b"banana\0", &mut suffix_array).into_return_code(),
        0
    );
    assert_eq!(suffix_array, vec![6, 5, 3, 1, 0, 4, 2]);

    assert_eq!(
        sais(b"banana", &mut suffix_array[..6]).into_return_code(),
        -1
    );
    assert_eq!(GsaisError::OutOfMemory.return_code(), -2);

    let message = InvalidInput::MissingTerminator.to_string();
    assert!(message.contains("needs to be 0"));
}
