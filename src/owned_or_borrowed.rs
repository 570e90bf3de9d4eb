use either::Either;

use std::marker::PhantomData;

use crate::{GsaisError, typestate::BufferMode};

/// One output array of a construction, the suffix array, the LCP array or the document array.
///
/// `B` is always `OwnedBuffer` for a `Vec` and `BorrowedBuffer` for a slice of the caller. A borrowed slice can
/// be longer than the text until [`truncate_to_text`](Self::truncate_to_text) is called.
#[derive(Debug)]
pub(crate) struct OwnedOrBorrowed<'a, T, B> {
    buffer: Either<Vec<T>, &'a mut [T]>,
    _marker: PhantomData<B>,
}

impl<'a, T: std::fmt::Debug, B: BufferMode> OwnedOrBorrowed<'a, T, B> {
    /// Takes the slice of the caller in borrowed mode and calls `allocate` in owned mode.
    pub(crate) fn take_buffer_or_allocate(
        borrowed: Option<&'a mut [T]>,
        allocate: impl FnOnce() -> Result<Vec<T>, GsaisError>,
    ) -> Result<Self, GsaisError> {
        let buffer = B::unwrap_or_allocate(borrowed, allocate)?;

        Ok(Self {
            buffer: B::buffer_to_either(buffer),
            _marker: PhantomData,
        })
    }

    pub(crate) fn into_inner(self) -> B::Buffer<'a, T> {
        B::either_to_buffer(self.buffer)
    }
}

impl<T, B> OwnedOrBorrowed<'_, T, B> {
    pub(crate) fn as_slice(&self) -> &[T] {
        self.buffer
            .as_ref()
            .either(|owned| owned.as_slice(), |borrowed| &**borrowed)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer
            .as_mut()
            .either(|owned| owned.as_mut_slice(), |borrowed| &mut **borrowed)
    }

    /// Keeps only the first `text_len` elements. Owned buffers also give back their spare capacity.
    pub(crate) fn truncate_to_text(&mut self, text_len: usize) {
        match &mut self.buffer {
            Either::Left(owned) => {
                owned.truncate(text_len);
                owned.shrink_to_fit();
            }
            Either::Right(borrowed) => {
                let full = std::mem::take(borrowed);
                *borrowed = &mut full[..text_len];
            }
        }
    }
}
