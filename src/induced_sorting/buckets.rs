use super::{Text, allocate};
use crate::{GsaisError, InputElement};

/// Bucket boundaries per symbol together with one movable pointer per bucket.
///
/// The pointers are either heads (next free slot from the front) or tails (one past the next free slot from
/// the back), depending on which reset was called last.
#[derive(Debug)]
pub(crate) struct Buckets {
    starts: Vec<usize>,
    pointers: Vec<usize>,
}

impl Buckets {
    pub(crate) fn count<C: InputElement>(
        text: &Text<C>,
        alphabet_size: usize,
    ) -> Result<Self, GsaisError> {
        let len = alphabet_size.checked_add(1).ok_or(GsaisError::Overflow)?;
        let mut starts = allocate(len, 0usize)?;

        for position in 0..text.len() {
            let count = starts
                .get_mut(text.symbol(position) + 1)
                .ok_or(GsaisError::OutOfMemory)?;
            *count += 1;
        }

        for c in 1..len {
            starts[c] += starts[c - 1];
        }

        if starts[alphabet_size] != text.len() {
            return Err(GsaisError::OutOfMemory);
        }

        Ok(Self {
            starts,
            pointers: allocate(alphabet_size, 0)?,
        })
    }

    #[inline]
    pub(crate) fn start(&self, c: usize) -> usize {
        self.starts[c]
    }

    pub(crate) fn alphabet_size(&self) -> usize {
        self.pointers.len()
    }

    pub(crate) fn reset_heads(&mut self) {
        self.pointers
            .copy_from_slice(&self.starts[..self.starts.len() - 1]);
    }

    pub(crate) fn reset_tails(&mut self) {
        self.pointers.copy_from_slice(&self.starts[1..]);
    }

    /// Claims the next free slot from the front of bucket `c`.
    #[inline]
    pub(crate) fn push_front(&mut self, c: usize) -> usize {
        let slot = self.pointers[c];
        self.pointers[c] += 1;
        slot
    }

    /// Claims the next free slot from the back of bucket `c`.
    #[inline]
    pub(crate) fn push_back(&mut self, c: usize) -> usize {
        self.pointers[c] -= 1;
        self.pointers[c]
    }

    #[inline]
    pub(crate) fn pointer(&self, c: usize) -> usize {
        self.pointers[c]
    }

    pub(crate) fn pointers(&self) -> &[usize] {
        &self.pointers
    }
}
