use lince_common::read::ReadError;

/// Why detection gave no result
///
/// Every failure surfaces as one of these values; malformed input never
/// panics and never yields a partially populated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Magic bytes match no supported format")]
    UnrecognizedFormat,
    #[error("Header violates the format grammar")]
    MalformedHeader,
    #[error("Input ended inside the header")]
    Truncated,
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        // A failed read is terminal for the detection call either way.
        match err {
            ReadError::UnexpectedEof | ReadError::Io(_) => Self::Truncated,
        }
    }
}
