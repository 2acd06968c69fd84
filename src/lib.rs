//! colorwell parses, validates and converts single color values between the
//! RGB, hex, HSL, HSV, CMYK and CIE-L*a*b* notations.
//!
//! All conversions go through RGB as the pivot representation. Every function
//! is pure: there is no shared state and nothing to synchronize.
//!
//! ```rust
//! use colorwell::{convert, parse, ColorFormat};
//!
//! let red = parse("#F00", ColorFormat::Hex).unwrap();
//! assert_eq!(red.hsl_string(), "hsl(0, 100%, 50%)");
//!
//! let white = convert("cmyk(0%, 0%, 0%, 0%)", ColorFormat::Cmyk, ColorFormat::Rgb);
//! assert_eq!(white.unwrap(), "rgb(255, 255, 255)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod detect;
mod error;
mod format;
mod math;
mod models;
mod parse;
mod representation;


use tracing::{debug, trace};

pub use color::{ColorFormat, Component, Components, Flags, UnknownFormat};
pub use detect::detect_format;
pub use error::{Error, ErrorKind, Result};
pub use format::to_hex;
pub use models::{Bounds, Cmyk, Field, Hsl, Hsv, Lab, Model, Rgb};
pub use parse::{parse_cmyk, parse_hex, parse_hsl, parse_hsv, parse_lab, parse_rgb};
pub use representation::ColorRepresentation;

/// The result of validating text against a format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// The text is a valid color in the format.
    Valid,
    /// The text is not valid, with the reason why.
    Invalid(String),
}

impl Validation {
    /// Return true if the text was valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Check that `text` is a valid color in the given format.
pub fn validate(text: &str, format: ColorFormat) -> Validation {
    match parse::parse_to_rgb(text.trim(), format) {
        Ok(_) => Validation::Valid,
        Err(err) => Validation::Invalid(err.to_string()),
    }
}

/// Parse `text` in the given format and derive all other representations.
pub fn parse(text: &str, format: ColorFormat) -> Result<ColorRepresentation> {
    let text = text.trim();
    trace!(text, %format, "parse");

    match parse::parse_to_rgb(text, format) {
        Ok((rgb, flags)) => Ok(ColorRepresentation::with_flags(rgb, flags)),
        Err(err) => {
            debug!(text, %format, %err, "color rejected");
            Err(err)
        }
    }
}

/// Detect the format of `text` and parse it.
pub fn parse_any(text: &str) -> Result<ColorRepresentation> {
    let format = detect_format(text).ok_or_else(|| {
        debug!(text, "unable to detect color format");
        Error::Undetected {
            input: text.trim().to_string(),
        }
    })?;

    parse(text, format)
}

/// Parse `text` in the `from` format and return its canonical string in the
/// `to` format.
pub fn convert(text: &str, from: ColorFormat, to: ColorFormat) -> Result<String> {
    trace!(text, %from, %to, "convert");
    parse(text, from).map(|color| color.format(to))
}
