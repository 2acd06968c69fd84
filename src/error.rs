//! Error types for parsing and validating colors.
//!
//! Every failure is caused by the input text. The messages are meant to be
//! shown to the end user as they are.

use thiserror::Error;

use crate::{color::ColorFormat, models::Bounds};

/// Color parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text does not follow the grammar of the declared format.
    #[error("invalid {format} format: \"{input}\"")]
    Syntax {
        /// The format the text was parsed as.
        format: ColorFormat,
        /// The offending text.
        input: String,
    },

    /// The text follows the grammar but a component is out of range.
    #[error("invalid {component} value: {value}. Expected range: {range}")]
    OutOfRange {
        /// The name of the component.
        component: &'static str,
        /// The value as it was written.
        value: String,
        /// The accepted range.
        range: Bounds,
    },

    /// No format could be detected for the text.
    #[error("unable to detect the color format of \"{input}\"")]
    Undetected {
        /// The offending text.
        input: String,
    },
}

/// The kind of an [`Error`], for callers that branch on the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Syntax`].
    Syntax,
    /// See [`Error::OutOfRange`].
    OutOfRange,
    /// See [`Error::Undetected`].
    Undetected,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::Undetected { .. } => ErrorKind::Undetected,
        }
    }

    pub(crate) fn syntax(format: ColorFormat, input: &str) -> Self {
        Error::Syntax {
            format,
            input: input.to_string(),
        }
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::syntax(ColorFormat::Rgb, "rgb(1, 2)");
        assert_eq!(err.to_string(), "invalid RGB format: \"rgb(1, 2)\"");
        assert_eq!(err.kind(), ErrorKind::Syntax);

        let err = Error::OutOfRange {
            component: "red",
            value: "256".to_string(),
            range: Bounds::new(0.0, 255.0),
        };
        assert_eq!(
            err.to_string(),
            "invalid red value: 256. Expected range: 0-255"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }
}
