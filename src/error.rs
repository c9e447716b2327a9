use std::error;
use std::fmt;
use std::result;

/// A type alias for `Result<T, csvsplit::Error>`.
pub type Result<T> = result::Result<T, Error>;

/// An error describing where a line violates the CSV quoting rules.
///
/// Errors are only produced by [`try_split`](crate::try_split). The plain
/// [`split`](crate::split) never fails: it settles on *some* parse for every
/// line, including the lines this error describes.
///
/// The error includes the index of the field being read when the violation
/// was found, and the byte offset of the offending quote in the line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    /// The index of the field being read when the violation was found.
    field: usize,
    /// The byte offset in the line of the quote at fault.
    offset: usize,
}

/// The specific quoting violation found in a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A quoted field was still open when the line ended.
    UnterminatedQuote,
    /// A quote appeared where the quoting rules do not allow one: inside an
    /// unquoted field, or after a closing quote without a comma or line end
    /// following it.
    UnexpectedQuote,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, field: usize, offset: usize) -> Error {
        Error { kind, field, offset }
    }

    /// The kind of violation found.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The zero-based index of the field being read when the violation was
    /// found.
    pub fn field(&self) -> usize {
        self.field
    }

    /// The byte offset in the line of the quote at fault.
    ///
    /// For [`ErrorKind::UnterminatedQuote`] this is the offset of the
    /// opening quote that was never closed.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::UnterminatedQuote => write!(
                f,
                "CSV parse error: field {} (byte {}): \
                 quoted field is missing its closing quote",
                self.field, self.offset,
            ),
            ErrorKind::UnexpectedQuote => write!(
                f,
                "CSV parse error: field {} (byte {}): \
                 unexpected quote in field",
                self.field, self.offset,
            ),
        }
    }
}

impl error::Error for Error {}
