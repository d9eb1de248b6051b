use std::io;

use thiserror::Error;

use crate::common::io_error_msg;

/// Everything that can end a transcoding run. All variants are fatal.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Fewer than two positional arguments.
    #[error("must pass two arguments, source encoding and target encoding")]
    Usage,

    /// A format token outside the alias set. `role` is "input" or "output".
    #[error("unrecognized {role} encoding: '{token}'")]
    UnrecognizedFormat { role: &'static str, token: String },

    /// Input that does not conform to the source encoding.
    #[error("invalid {format} input: {reason}")]
    MalformedInput { format: &'static str, reason: String },

    #[error("{}", io_error_msg(.0))]
    Io(io::Error),
}

impl TranscodeError {
    pub fn malformed(format: &'static str, reason: impl Into<String>) -> Self {
        TranscodeError::MalformedInput {
            format,
            reason: reason.into(),
        }
    }

    /// Wrap this error so it can travel through `io::Read`.
    /// `From<io::Error>` unwraps it again on the other side.
    pub fn into_io(self) -> io::Error {
        match self {
            TranscodeError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<io::Error> for TranscodeError {
    fn from(e: io::Error) -> Self {
        if !e
            .get_ref()
            .is_some_and(|inner| inner.is::<TranscodeError>())
        {
            return TranscodeError::Io(e);
        }
        let kind = e.kind();
        match e.into_inner() {
            Some(inner) => match inner.downcast::<TranscodeError>() {
                Ok(err) => *err,
                Err(other) => TranscodeError::Io(io::Error::new(kind, other)),
            },
            None => TranscodeError::Io(io::Error::from(kind)),
        }
    }
}
