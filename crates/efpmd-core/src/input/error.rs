use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unable to open input file '{path}': {source}", path = path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while reading input: {0}")]
    Io(#[from] io::Error),

    #[error("Error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("At least one fragment must be specified")]
    NoFragments,

    #[error("Built-in default for option {option} does not parse")]
    InvalidDefault { option: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unknown option in input file")]
    UnknownOption,

    #[error("incorrect value for option {option}")]
    IncorrectValue { option: &'static str },

    #[error("option {option} value is out of range")]
    OutOfRange { option: &'static str },

    #[error("only one option per line is allowed")]
    TrailingContent,

    #[error("line is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("option coord cannot be changed after fragments are specified")]
    CoordChangedAfterFragments,

    #[error("unable to read fragment name")]
    MissingFragmentName,

    #[error("incorrect fragment coordinates format")]
    IncorrectCoordinates,

    #[error("incorrect fragment velocities format")]
    IncorrectVelocities,
}

impl InputError {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }

    /// The parse failure kind, if this is a parse error.
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Self::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
