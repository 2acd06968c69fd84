//! Primitives shared by every color model: the scalar [`Component`] type, the
//! closed set of textual [`ColorFormat`]s and the [`Flags`] attached to a
//! representation.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Three components of an intermediate color value, like linear light RGB or
/// CIE-XYZ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Facts about a color that can not be read from its components alone.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// The color has no chroma, so its hue is powerless and reported as 0.
        const ACHROMATIC = 1 << 0;
        /// The alpha component is less than 1.
        const TRANSLUCENT = 1 << 1;
        /// The source color was outside of the sRGB gamut and had some of its
        /// channels clipped.
        const OUT_OF_GAMUT = 1 << 2;
    }
}

/// The textual formats a color can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum ColorFormat {
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Rgb = 0,
    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    Hex = 1,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    Hsl = 2,
    /// `hsv(h, s%, v%)` or `hsva(h, s%, v%, a)`.
    Hsv = 3,
    /// `cmyk(c%, m%, y%, k%)`.
    Cmyk = 4,
    /// `lab(l, a, b)` in CIE-L*a*b* with a D65 white point.
    Lab = 5,
}

impl ColorFormat {
    /// Every supported format.
    pub const ALL: [ColorFormat; 6] = [
        ColorFormat::Rgb,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Cmyk,
        ColorFormat::Lab,
    ];

    /// The name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hex => "Hex",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsv => "HSV",
            ColorFormat::Cmyk => "CMYK",
            ColorFormat::Lab => "LAB",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a format name is not one of [`ColorFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color format: \"{0}\"")]
pub struct UnknownFormat(pub String);

impl FromStr for ColorFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownFormat(name.to_string()))
    }
}
