use std::cmp::Ordering;

use super::{Text, allocate};
use crate::{GsaisError, InputElement};

const WORD_BITS: usize = u64::BITS as usize;

/// S/L classification of every position of a text, packed into a bitset where a set bit means S-type.
///
/// The last position is compared to the virtual sentinel and therefore L-type, unless it is a separator.
/// Separators are always S-type.
#[derive(Debug)]
pub(crate) struct SuffixTypes {
    words: Vec<u64>,
    len: usize,
}

impl SuffixTypes {
    pub(crate) fn classify<C: InputElement>(text: &Text<C>) -> Result<Self, GsaisError> {
        let n = text.len();
        let mut types = Self {
            words: allocate(n.div_ceil(WORD_BITS), 0)?,
            len: n,
        };

        let mut successor_is_s = false;

        for position in (0..n).rev() {
            let is_s = if text.is_separator(position) {
                true
            } else if position + 1 == n {
                false
            } else {
                match text.symbol(position).cmp(&text.symbol(position + 1)) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => successor_is_s,
                }
            };

            if is_s {
                types.words[position / WORD_BITS] |= 1 << (position % WORD_BITS);
            }

            successor_is_s = is_s;
        }

        Ok(types)
    }

    #[inline]
    pub(crate) fn is_s(&self, position: usize) -> bool {
        (self.words[position / WORD_BITS] >> (position % WORD_BITS)) & 1 == 1
    }

    #[inline]
    pub(crate) fn is_l(&self, position: usize) -> bool {
        !self.is_s(position)
    }

    #[inline]
    pub(crate) fn is_lms(&self, position: usize) -> bool {
        position > 0 && self.is_s(position) && self.is_l(position - 1)
    }

    /// All LMS positions in ascending order.
    pub(crate) fn lms_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.len).filter(|&position| self.is_lms(position))
    }
}
