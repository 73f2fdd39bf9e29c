use thiserror::Error;

/// The result type for the `munch` crate.
pub type Result<T> = std::result::Result<T, MunchError>;

/// The error type for the `munch` crate.
#[derive(Error, Debug)]
pub struct MunchError {
    /// The source of the error.
    pub source: Box<MunchErrorKind>,
}

impl MunchError {
    /// Create a new `MunchError`.
    pub fn new(kind: MunchErrorKind) -> Self {
        MunchError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &MunchErrorKind {
        &self.source
    }
}

impl std::fmt::Display for MunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum MunchErrorKind {
    /// An error occurred during the compilation of a rule's regex pattern.
    #[error("'{1}' {0}")]
    PatternError(regex_automata::dfa::dense::BuildError, String),

    /// A std::io error occurred while reading from the input source.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// No rule matched any prefix of the remaining input.
    #[error("unrecognized input at byte {offset}: '{text}'")]
    UnrecognizedInput {
        /// The byte offset of the unrecognized input in the overall input.
        offset: usize,
        /// The unconsumed buffer content.
        text: String,
    },

    /// A match filled the whole input buffer, so the token may have been
    /// cut short at the capacity. Only raised under
    /// [crate::OverflowPolicy::Error].
    #[error("token exceeds the buffer capacity of {capacity} bytes: '{text}'")]
    TokenTooLong {
        /// The configured buffer capacity.
        capacity: usize,
        /// The buffer content at the time of the overflow.
        text: String,
    },
}

impl From<std::io::Error> for MunchError {
    fn from(error: std::io::Error) -> Self {
        MunchError::new(MunchErrorKind::IoError(error))
    }
}
