use crate::InputElement;

/// Read access to the symbols of one recursion level.
///
/// In generalized mode, every 0 is a separator that ends a document. Separators compare smaller than every
/// other symbol and among each other by position, and they never match anything when computing common
/// prefixes. The end of the text is a virtual sentinel in both modes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Text<'t, C> {
    symbols: &'t [C],
    generalized: bool,
}

impl<'t, C: InputElement> Text<'t, C> {
    pub(crate) fn new(symbols: &'t [C], generalized: bool) -> Self {
        Self {
            symbols,
            generalized,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub(crate) fn is_generalized(&self) -> bool {
        self.generalized
    }

    #[inline]
    pub(crate) fn symbol(&self, position: usize) -> usize {
        self.symbols[position].rank()
    }

    #[inline]
    pub(crate) fn is_separator(&self, position: usize) -> bool {
        self.generalized && self.symbols[position] == C::ZERO
    }

    /// Length of the longest common prefix of the suffixes at `a` and `b`, when the first `known` symbols are
    /// already known to match.
    pub(crate) fn common_prefix_len(&self, a: usize, b: usize, known: usize) -> usize {
        let n = self.len();
        let mut len = known;

        while a + len < n
            && b + len < n
            && self.symbols[a + len] == self.symbols[b + len]
            && !self.is_separator(a + len)
        {
            len += 1;
        }

        len
    }

    /// Whether the `len` symbols starting at `position` are all the same.
    pub(crate) fn is_run(&self, position: usize, len: usize) -> bool {
        let first = self.symbols[position];
        self.symbols[position..position + len]
            .iter()
            .all(|&c| c == first)
    }
}
