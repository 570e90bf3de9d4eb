use std::fmt;

/// The ways a construction can fail.
///
/// None of them are transient: running the same construction again fails in the same way. `InvalidInput` and
/// `Overflow` are detected before any caller-owned output buffer is written. `OutOfMemory` can also come from
/// scratch allocations during the construction, and then the suffix array buffer may already be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GsaisError {
    InvalidInput(InvalidInput),
    /// Scratch memory could not be allocated, or an internal consistency check failed.
    OutOfMemory,
    /// The text or the alphabet is too large for the chosen output element type.
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInput {
    EmptyText,
    EmptyAlphabet,
    /// The last symbol of the text has to be 0 (not ASCII '0').
    MissingTerminator,
    NegativeSymbol {
        position: usize,
    },
    SymbolOutOfRange {
        position: usize,
        alphabet_size: usize,
    },
    BufferTooSmall {
        required: usize,
        actual: usize,
    },
    /// A suffix array passed to a PLCP construction contains a value that is not a text position.
    SuffixArrayEntryOutOfRange {
        slot: usize,
    },
}

impl GsaisError {
    /// The negative return code of the C-style `gsais` interface.
    pub fn return_code(&self) -> i64 {
        match self {
            Self::InvalidInput(_) => -1,
            Self::OutOfMemory => -2,
            Self::Overflow => -3,
        }
    }
}

impl From<InvalidInput> for GsaisError {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}

impl fmt::Display for GsaisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::OutOfMemory => write!(f, "scratch memory could not be allocated"),
            Self::Overflow => write!(f, "the input is too large for the chosen output element type"),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyText => write!(f, "the text is empty"),
            Self::EmptyAlphabet => write!(f, "the alphabet size is 0"),
            Self::MissingTerminator => {
                write!(f, "the last character of the text needs to be 0 (not ASCII '0')")
            }
            Self::NegativeSymbol { position } => {
                write!(f, "the text contains a negative value at position {position}")
            }
            Self::SymbolOutOfRange {
                position,
                alphabet_size,
            } => write!(
                f,
                "the value at position {position} is not smaller than the alphabet size {alphabet_size}"
            ),
            Self::BufferTooSmall { required, actual } => write!(
                f,
                "an output buffer has length {actual}, but at least {required} is required"
            ),
            Self::SuffixArrayEntryOutOfRange { slot } => {
                write!(f, "suffix array slot {slot} does not contain a text position")
            }
        }
    }
}

impl std::error::Error for GsaisError {}

/// Conversion into the return code convention of the C-style interface: the recursion depth on success,
/// a negative value on failure.
pub trait IntoReturnCode {
    fn into_return_code(self) -> i64;
}

impl IntoReturnCode for Result<usize, GsaisError> {
    fn into_return_code(self) -> i64 {
        match self {
            Ok(depth) => depth as i64,
            Err(e) => e.return_code(),
        }
    }
}
