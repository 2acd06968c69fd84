//! Parsers for the textual formats. Each parser takes text that already had
//! its surrounding whitespace removed and returns the matching model.
//!
//! A parser fails with [`Error::Syntax`] when the text does not follow the
//! grammar of the format at all, and with [`Error::OutOfRange`] when the text
//! is well formed but one of the components is outside of its range. All
//! components are checked for syntax before any of them is checked for range.
//!
//! The allowed forms are:
//! * `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! * `#RGB`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
//! * `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! * `hsv(h, s%, v%)`, `hsva(h, s%, v%, a)`
//! * `cmyk(c%, m%, y%, k%)`
//! * `lab(l, a, b)`

use crate::{
    color::{ColorFormat, Component, Flags},
    error::{Error, Result},
    models::{Cmyk, Field, Hsl, Hsv, Lab, Model, Rgb},
};

/// How an argument of a color function is written.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Unit {
    /// A plain number.
    Number,
    /// A number with an optional `%` suffix.
    Percent,
}

/// The grammar of a color function like `rgb(..)`.
struct Function<const N: usize> {
    format: ColorFormat,
    names: &'static [&'static str],
    units: [Unit; N],
    /// The value used for the last argument when it is omitted.
    optional_last: Option<Component>,
}

impl<const N: usize> Function<N> {
    fn parse(&self, input: &str, fields: &[Field; N]) -> Result<[Component; N]> {
        let syntax = || Error::syntax(self.format, input);

        let (name, args) = split_function(input).ok_or_else(syntax)?;

        if !self.names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            return Err(syntax());
        }

        let omitted_last = match self.optional_last {
            Some(_) if args.len() == N - 1 => true,
            _ if args.len() == N => false,
            _ => return Err(syntax()),
        };

        let mut values = [0.0; N];
        for (i, (arg, unit)) in args.iter().copied().zip(self.units).enumerate() {
            let number = match unit {
                Unit::Number => arg,
                Unit::Percent => arg.strip_suffix('%').map(str::trim_end).unwrap_or(arg),
            };
            values[i] = parse_number(number).ok_or_else(syntax)?;
        }

        for (i, arg) in args.iter().enumerate() {
            let field = &fields[i];
            if !field.range.contains(values[i]) {
                return Err(Error::OutOfRange {
                    component: field.name,
                    value: arg.to_string(),
                    range: field.range,
                });
            }
        }

        if omitted_last {
            if let Some(default) = self.optional_last {
                values[N - 1] = default;
            }
        }

        Ok(values)
    }
}

/// Split `name(a, b, c)` into the name and trimmed arguments.
fn split_function(input: &str) -> Option<(&str, Vec<&str>)> {
    let open = input.find('(')?;
    let inner = input[open + 1..].strip_suffix(')')?;

    if inner.contains(['(', ')']) {
        return None;
    }

    let name = input[..open].trim_end();
    Some((name, inner.split(',').map(str::trim).collect()))
}

/// Parse a plain decimal number with an optional sign. Exponents, `inf` and
/// `NaN` are not accepted.
fn parse_number(token: &str) -> Option<Component> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);

    let mut digits = 0;
    let mut dots = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }

    if digits == 0 || dots > 1 {
        return None;
    }

    token.parse().ok()
}

const RGB: Function<4> = Function {
    format: ColorFormat::Rgb,
    names: &["rgb", "rgba"],
    units: [Unit::Number; 4],
    optional_last: Some(1.0),
};

const HSL: Function<4> = Function {
    format: ColorFormat::Hsl,
    names: &["hsl", "hsla"],
    units: [Unit::Number, Unit::Percent, Unit::Percent, Unit::Number],
    optional_last: Some(1.0),
};

const HSV: Function<4> = Function {
    format: ColorFormat::Hsv,
    names: &["hsv", "hsva"],
    units: [Unit::Number, Unit::Percent, Unit::Percent, Unit::Number],
    optional_last: Some(1.0),
};

const CMYK: Function<4> = Function {
    format: ColorFormat::Cmyk,
    names: &["cmyk"],
    units: [Unit::Percent; 4],
    optional_last: None,
};

const LAB: Function<3> = Function {
    format: ColorFormat::Lab,
    names: &["lab"],
    units: [Unit::Number; 3],
    optional_last: None,
};

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_rgb(input: &str) -> Result<Rgb> {
    RGB.parse(input, &Rgb::FIELDS).map(Rgb::from)
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`, case insensitive.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let syntax = || Error::syntax(ColorFormat::Hex, input);

    let digits = input.strip_prefix('#').unwrap_or(input);

    if !matches!(digits.len(), 3 | 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(syntax());
    }

    let value = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(Component::from)
            .map_err(|_| syntax())
    };

    if digits.len() == 3 {
        // #RGB, each digit is doubled.
        return Ok(Rgb::opaque(
            value(0..1)? * 17.0,
            value(1..2)? * 17.0,
            value(2..3)? * 17.0,
        ));
    }

    let alpha = if digits.len() == 8 {
        value(6..8)? / 255.0
    } else {
        1.0
    };

    Ok(Rgb::new(value(0..2)?, value(2..4)?, value(4..6)?, alpha))
}

/// Parse `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
pub fn parse_hsl(input: &str) -> Result<Hsl> {
    HSL.parse(input, &Hsl::FIELDS).map(Hsl::from)
}

/// Parse `hsv(h, s%, v%)` or `hsva(h, s%, v%, a)`.
pub fn parse_hsv(input: &str) -> Result<Hsv> {
    HSV.parse(input, &Hsv::FIELDS).map(Hsv::from)
}

/// Parse `cmyk(c%, m%, y%, k%)`.
pub fn parse_cmyk(input: &str) -> Result<Cmyk> {
    CMYK.parse(input, &Cmyk::FIELDS).map(Cmyk::from)
}

/// Parse `lab(l, a, b)`.
pub fn parse_lab(input: &str) -> Result<Lab> {
    LAB.parse(input, &Lab::FIELDS).map(Lab::from)
}

/// Parse the input in the given format and convert it to the RGB pivot. Also
/// returns any flags that are only known while parsing.
pub(crate) fn parse_to_rgb(input: &str, format: ColorFormat) -> Result<(Rgb, Flags)> {
    let rgb = match format {
        ColorFormat::Rgb => parse_rgb(input)?,
        ColorFormat::Hex => parse_hex(input)?,
        ColorFormat::Hsl => parse_hsl(input)?.to_rgb(),
        ColorFormat::Hsv => parse_hsv(input)?.to_rgb(),
        ColorFormat::Cmyk => parse_cmyk(input)?.to_rgb(),
        ColorFormat::Lab => {
            let (rgb, clipped) = parse_lab(input)?.to_rgb_clipped();
            let flags = if clipped {
                Flags::OUT_OF_GAMUT
            } else {
                Flags::empty()
            };
            return Ok((rgb, flags));
        }
    };

    Ok((rgb, Flags::empty()))
}
