use core::fmt::{Debug, Display, Formatter};

/// Short version of `Err(error(..))`.
pub fn err<T>(kind: ErrorKind, msg: &'static str) -> Result<T, Error> {
    Err(error(kind, msg))
}

/// Creates an error with a message that might be displayed.
pub fn error(kind: ErrorKind, _msg: &'static str) -> Error {
    Error {
        kind,
        #[cfg(debug_assertions)]
        msg: _msg,
    }
}

/// What went wrong while encoding or decoding a temporal value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The payload is shorter than its wire type's fixed width.
    Eof,
    /// The payload is longer than its wire type's fixed width.
    TrailingBytes,
    /// The offset doesn't fit the wire integer or the target instant type.
    OutOfRange,
    /// Re-parsing a normalized timestamp failed.
    MalformedTimestamp,
}

impl ErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Eof => "unexpected end of payload",
            Self::TrailingBytes => "trailing bytes after payload",
            Self::OutOfRange => "temporal value out of range",
            Self::MalformedTimestamp => "malformed timestamp payload",
        }
    }
}

/// Encoding / decoding errors.
/// # Debug mode
/// In debug mode, the error also contains a reason.
/// # Release mode
/// In release mode, the error only contains its [`ErrorKind`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    #[cfg(debug_assertions)]
    msg: &'static str,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "Error({:?}, {:?})", self.kind, self.msg);
        #[cfg(not(debug_assertions))]
        write!(f, "Error({:?})", self.kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        #[cfg(debug_assertions)]
        return write!(f, "{}: {}", self.kind.as_str(), self.msg);
        #[cfg(not(debug_assertions))]
        f.write_str(self.kind.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
