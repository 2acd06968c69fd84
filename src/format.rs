//! The canonical string of every model. Models with alpha use their alpha
//! bearing form (`rgba`, `hsla`, `hsva`) only when the written alpha is less
//! than 1.

use std::fmt;

use crate::{
    color::Component,
    math::round_to,
    models::{Cmyk, Hsl, Hsv, Lab, Rgb},
};

/// Writes a number rounded to `decimals` places without trailing zeros.
struct Number(Component, i32);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = round_to(self.0, self.1);
        // Avoid printing "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        write!(f, "{}", value)
    }
}

fn integer(value: Component) -> Number {
    Number(value, 0)
}

fn fraction(value: Component) -> Number {
    Number(value, 2)
}

fn percent(value: Component) -> String {
    format!("{}%", fraction(value))
}

/// A hue that rounds up to 360 is written as 0.
fn hue(value: Component) -> Number {
    let rounded = round_to(value, 2);
    fraction(if rounded >= 360.0 { 0.0 } else { rounded })
}

fn write_function(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    args: [&dyn fmt::Display; 3],
    alpha: Component,
) -> fmt::Result {
    let [c0, c1, c2] = args;
    // Compare the rounded alpha so 0.999 is not written as `rgba(.., 1)`.
    if round_to(alpha, 2) < 1.0 {
        write!(f, "{name}a({c0}, {c1}, {c2}, {})", fraction(alpha))
    } else {
        write!(f, "{name}({c0}, {c1}, {c2})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(
            f,
            "rgb",
            [&integer(self.red), &integer(self.green), &integer(self.blue)],
            self.alpha,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saturation = percent(self.saturation);
        let lightness = percent(self.lightness);
        write_function(f, "hsl", [&hue(self.hue), &saturation, &lightness], self.alpha)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saturation = percent(self.saturation);
        let value = percent(self.value);
        write_function(f, "hsv", [&hue(self.hue), &saturation, &value], self.alpha)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            fraction(self.cyan),
            fraction(self.magenta),
            fraction(self.yellow),
            fraction(self.key)
        )
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lab({}, {}, {})",
            fraction(self.lightness),
            fraction(self.a),
            fraction(self.b)
        )
    }
}

/// Format the color as `#RRGGBB`, or `#RRGGBBAA` when it is not opaque.
pub fn to_hex(rgb: &Rgb) -> String {
    let [red, green, blue, alpha] = rgb.to_bytes();
    if rgb.is_opaque() {
        format!("#{red:02X}{green:02X}{blue:02X}")
    } else {
        format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_chooses_the_alpha_form() {
        assert_eq!(Rgb::opaque(255.0, 0.0, 0.0).to_string(), "rgb(255, 0, 0)");
        assert_eq!(
            Rgb::new(254.6, 0.2, 10.0, 0.5).to_string(),
            "rgba(255, 0, 10, 0.5)"
        );
        assert_eq!(
            Rgb::new(0.0, 0.0, 0.0, 0.333).to_string(),
            "rgba(0, 0, 0, 0.33)"
        );
        assert_eq!(Rgb::new(0.0, 0.0, 0.0, 0.0).to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn alpha_that_rounds_to_one_is_opaque() {
        assert_eq!(Rgb::new(0.0, 0.0, 0.0, 0.996).to_string(), "rgb(0, 0, 0)");
        assert_eq!(
            Hsl::new(0.0, 0.0, 0.0, 0.996).to_string(),
            "hsl(0, 0%, 0%)"
        );
        assert_eq!(
            Rgb::new(0.0, 0.0, 0.0, 0.994).to_string(),
            "rgba(0, 0, 0, 0.99)"
        );
    }

    #[test]
    fn hue_based_models() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0, 1.0).to_string(), "hsl(0, 100%, 50%)");
        assert_eq!(
            Hsl::new(210.4, 33.3, 66.6, 0.75).to_string(),
            "hsla(210.4, 33.3%, 66.6%, 0.75)"
        );
        assert_eq!(Hsv::new(359.999, 10.0, 20.0, 1.0).to_string(), "hsv(0, 10%, 20%)");
        assert_eq!(Hsv::new(359.7, 10.0, 20.0, 1.0).to_string(), "hsv(359.7, 10%, 20%)");
        assert_eq!(
            Hsv::new(120.0, 100.0, 100.0, 0.1).to_string(),
            "hsva(120, 100%, 100%, 0.1)"
        );
    }

    #[test]
    fn cmyk_and_lab() {
        assert_eq!(
            Cmyk::new(0.0, 50.0, 85.714, 17.647).to_string(),
            "cmyk(0%, 50%, 85.71%, 17.65%)"
        );
        assert_eq!(
            Lab::new(53.2408, 80.0925, 67.2032).to_string(),
            "lab(53.24, 80.09, 67.2)"
        );
        assert_eq!(Lab::new(0.0, -0.001, 0.0).to_string(), "lab(0, 0, 0)");
    }

    #[test]
    fn hex() {
        assert_eq!(to_hex(&Rgb::opaque(255.0, 0.0, 0.0)), "#FF0000");
        assert_eq!(to_hex(&Rgb::opaque(17.0, 34.0, 51.0)), "#112233");
        assert_eq!(to_hex(&Rgb::new(255.0, 0.0, 0.0, 0.5)), "#FF000080");
    }
}
