//! A [`ColorRepresentation`] bundles one color in every supported format.

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{ColorFormat, Flags},
    error::Error,
    format::to_hex,
    math::almost_zero,
    models::{Cmyk, Hsl, Hsv, Lab, Model, Rgb},
};

/// One color in all of the supported formats. Every representation is
/// derived from the same RGB pivot, so they all denote the same color within
/// rounding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorRepresentation {
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
    cmyk: Cmyk,
    lab: Lab,
    hex: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    flags: Flags,
}

impl ColorRepresentation {
    /// Derive every representation from the RGB pivot.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::with_flags(rgb, Flags::empty())
    }

    pub(crate) fn with_flags(rgb: Rgb, mut flags: Flags) -> Self {
        let max = rgb.red.max(rgb.green).max(rgb.blue);
        let min = rgb.red.min(rgb.green).min(rgb.blue);
        if almost_zero(max - min) {
            flags |= Flags::ACHROMATIC;
        }
        if !rgb.is_opaque() {
            flags |= Flags::TRANSLUCENT;
        }

        Self {
            rgb,
            hsl: Hsl::from_rgb(&rgb),
            hsv: Hsv::from_rgb(&rgb),
            cmyk: Cmyk::from_rgb(&rgb),
            lab: Lab::from_rgb(&rgb),
            hex: to_hex(&rgb),
            flags,
        }
    }

    /// The RGB pivot.
    pub fn rgb(&self) -> &Rgb {
        &self.rgb
    }

    /// The color in the HSL notation.
    pub fn hsl(&self) -> &Hsl {
        &self.hsl
    }

    /// The color in the HSV notation.
    pub fn hsv(&self) -> &Hsv {
        &self.hsv
    }

    /// The color in the CMYK notation. Alpha is not carried.
    pub fn cmyk(&self) -> &Cmyk {
        &self.cmyk
    }

    /// The color in CIE-L*a*b*. Alpha is not carried.
    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    /// The hex string, `#RRGGBB` or `#RRGGBBAA`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Facts about the color that its components do not carry.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn rgb_string(&self) -> String {
        self.rgb.to_string()
    }

    /// `#RRGGBB` or `#RRGGBBAA`.
    pub fn hex_string(&self) -> String {
        self.hex.clone()
    }

    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    pub fn hsl_string(&self) -> String {
        self.hsl.to_string()
    }

    /// `hsv(h, s%, v%)` or `hsva(h, s%, v%, a)`.
    pub fn hsv_string(&self) -> String {
        self.hsv.to_string()
    }

    /// `cmyk(c%, m%, y%, k%)`.
    pub fn cmyk_string(&self) -> String {
        self.cmyk.to_string()
    }

    /// `lab(l, a, b)`.
    pub fn lab_string(&self) -> String {
        self.lab.to_string()
    }

    /// The canonical string of the color in the given format.
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Rgb => self.rgb_string(),
            ColorFormat::Hex => self.hex_string(),
            ColorFormat::Hsl => self.hsl_string(),
            ColorFormat::Hsv => self.hsv_string(),
            ColorFormat::Cmyk => self.cmyk_string(),
            ColorFormat::Lab => self.lab_string(),
        }
    }
}

impl From<Rgb> for ColorRepresentation {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

/// Writes the hex string.
impl fmt::Display for ColorRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Detects the format of the text before parsing it.
impl FromStr for ColorRepresentation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_any(s)
    }
}
