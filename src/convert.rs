//! Conversions between the color models. Every format converts to and from
//! the [`Rgb`] pivot; there are no direct paths between two other formats.
//!
//! Conversions can not fail: all models hold components that are already
//! within their ranges, and every result is constrained again on construction.
//!
//! ```rust
//! use colorwell::{Hsl, Model, Rgb};
//! let hsl = Hsl::from_rgb(&Rgb::opaque(255.0, 0.0, 0.0));
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (0.0, 100.0, 50.0));
//! ```

use crate::{
    color::{ColorFormat, Component, Components},
    models::{srgb_to_xyz, xyz_to_srgb, Cmyk, Hsl, Hsv, Lab, Model, Rgb},
};

impl Model for Rgb {
    const FORMAT: ColorFormat = ColorFormat::Rgb;

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }
}

impl Model for Hsl {
    const FORMAT: ColorFormat = ColorFormat::Hsl;

    fn to_rgb(&self) -> Rgb {
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        let rgb = if saturation <= 0.0 {
            // Achromatic, the hue does not contribute.
            Components(lightness, lightness, lightness)
        } else {
            let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
            util::from_sector(self.hue, chroma, lightness - chroma / 2.0)
        };

        Rgb::from_unit(rgb, self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, min, max) = util::rgb_to_hue_with_min_max(&rgb.to_unit());

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta <= 0.0 || lightness <= 0.0 || lightness >= 1.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl::new(hue, saturation * 100.0, lightness * 100.0, rgb.alpha)
    }
}

impl Model for Hsv {
    const FORMAT: ColorFormat = ColorFormat::Hsv;

    fn to_rgb(&self) -> Rgb {
        let saturation = self.saturation / 100.0;
        let value = self.value / 100.0;

        let rgb = if saturation <= 0.0 {
            Components(value, value, value)
        } else {
            let chroma = value * saturation;
            util::from_sector(self.hue, chroma, value - chroma)
        };

        Rgb::from_unit(rgb, self.alpha)
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let (hue, min, max) = util::rgb_to_hue_with_min_max(&rgb.to_unit());

        let saturation = if max <= 0.0 { 0.0 } else { (max - min) / max };

        Hsv::new(hue, saturation * 100.0, max * 100.0, rgb.alpha)
    }
}

/// The naive subtractive print model. It ignores ink and paper profiles, so it
/// is not colorimetrically accurate, but it is what the formatted values are
/// expected to match.
impl Model for Cmyk {
    const FORMAT: ColorFormat = ColorFormat::Cmyk;

    fn to_rgb(&self) -> Rgb {
        let key = 1.0 - self.key / 100.0;
        let channel = |ink: Component| 255.0 * (1.0 - ink / 100.0) * key;

        Rgb::opaque(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        )
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        let Components(red, green, blue) = rgb.to_unit();
        let key = 1.0 - red.max(green).max(blue);

        if key >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let ink = |channel: Component| (1.0 - channel - key) / (1.0 - key) * 100.0;

        Cmyk::new(ink(red), ink(green), ink(blue), key * 100.0)
    }
}

impl Lab {
    /// Convert to the RGB pivot and report whether any channel had to be
    /// clipped to fit into the sRGB gamut.
    pub fn to_rgb_clipped(&self) -> (Rgb, bool) {
        let Components(red, green, blue) = xyz_to_srgb(&self.to_xyz());

        // Allow for the rounding of the published matrices.
        const TOLERANCE: Component = 0.5 / 255.0;
        let outside = |v: Component| v < -TOLERANCE || v > 1.0 + TOLERANCE;
        let clipped = outside(red) || outside(green) || outside(blue);

        (Rgb::from_unit(Components(red, green, blue), 1.0), clipped)
    }
}

impl Model for Lab {
    const FORMAT: ColorFormat = ColorFormat::Lab;

    fn to_rgb(&self) -> Rgb {
        self.to_rgb_clipped().0
    }

    fn from_rgb(rgb: &Rgb) -> Self {
        Lab::from_xyz(&srgb_to_xyz(&rgb.to_unit()))
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::normalize_hue,
    };

    /// Calculate the hue from RGB components in [0, 1] and return it along
    /// with the min and max values. The hue is NaN when there is no chroma.
    pub fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Place `chroma` into the channels selected by the 60 degree sector the
    /// hue falls into and add the match value `m` to all of them.
    pub fn from_sector(hue: Component, chroma: Component, m: Component) -> Components {
        let h = normalize_hue(hue) / 60.0;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());

        let (red, green, blue) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Components(red + m, green + m, blue + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn assert_rgb(rgb: Rgb, red: Component, green: Component, blue: Component) {
        assert_component_eq!(rgb.red, red, 0.5);
        assert_component_eq!(rgb.green, green, 0.5);
        assert_component_eq!(rgb.blue, blue, 0.5);
    }

    #[test]
    fn test_conversions() {
        // chocolate: rgb(210, 105, 30)
        let chocolate = Rgb::opaque(210.0, 105.0, 30.0);

        let hsl = Hsl::from_rgb(&chocolate);
        assert_component_eq!(hsl.hue, 25.0, 0.01);
        assert_component_eq!(hsl.saturation, 75.0, 0.01);
        assert_component_eq!(hsl.lightness, 47.0588, 0.01);

        let hsv = Hsv::from_rgb(&chocolate);
        assert_component_eq!(hsv.hue, 25.0, 0.01);
        assert_component_eq!(hsv.saturation, 85.7143, 0.01);
        assert_component_eq!(hsv.value, 82.3529, 0.01);

        let cmyk = Cmyk::from_rgb(&chocolate);
        assert_component_eq!(cmyk.cyan, 0.0, 0.01);
        assert_component_eq!(cmyk.magenta, 50.0, 0.01);
        assert_component_eq!(cmyk.yellow, 85.7143, 0.01);
        assert_component_eq!(cmyk.key, 17.6471, 0.01);

        let lab = Lab::from_rgb(&chocolate);
        assert_component_eq!(lab.lightness, 55.99, 0.1);
        assert_component_eq!(lab.a, 37.05, 0.1);
        assert_component_eq!(lab.b, 56.74, 0.1);

        assert_rgb(hsl.to_rgb(), 210.0, 105.0, 30.0);
        assert_rgb(hsv.to_rgb(), 210.0, 105.0, 30.0);
        assert_rgb(cmyk.to_rgb(), 210.0, 105.0, 30.0);
        assert_rgb(lab.to_rgb(), 210.0, 105.0, 30.0);
    }

    #[test]
    fn every_hue_sector_round_trips() {
        let samples = [
            (255.0, 0.0, 0.0),
            (255.0, 128.0, 0.0),
            (128.0, 255.0, 0.0),
            (0.0, 255.0, 128.0),
            (0.0, 128.0, 255.0),
            (128.0, 0.0, 255.0),
            (255.0, 0.0, 128.0),
        ];
        for (red, green, blue) in samples {
            let rgb = Rgb::opaque(red, green, blue);
            assert_rgb(Hsl::from_rgb(&rgb).to_rgb(), red, green, blue);
            assert_rgb(Hsv::from_rgb(&rgb).to_rgb(), red, green, blue);
        }
    }

    #[test]
    fn red_in_hsl() {
        let hsl = Hsl::from_rgb(&Rgb::opaque(255.0, 0.0, 0.0));
        assert_eq!(hsl.hue, 0.0);
        assert_component_eq!(hsl.saturation, 100.0, 1e-3);
        assert_component_eq!(hsl.lightness, 50.0, 1e-3);
    }

    #[test]
    fn achromatic_hsl_ignores_hue() {
        for hue in [0.0, 90.0, 200.0, 359.0] {
            let rgb = Hsl::new(hue, 0.0, 50.0, 1.0).to_rgb();
            assert_rgb(rgb, 127.5, 127.5, 127.5);
            assert_component_eq!(rgb.red, 127.5, 1e-3);
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(Hsl::from_rgb(&Rgb::opaque(255.0, 255.0, 255.0)).hue, 0.0);
        assert_eq!(Hsv::from_rgb(&Rgb::opaque(0.0, 0.0, 0.0)).hue, 0.0);
        assert_eq!(Hsl::from_rgb(&Rgb::opaque(128.0, 128.0, 128.0)).saturation, 0.0);
    }

    #[test]
    fn cmyk_extremes() {
        assert_rgb(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_rgb(), 255.0, 255.0, 255.0);
        assert_rgb(Cmyk::new(0.0, 0.0, 0.0, 100.0).to_rgb(), 0.0, 0.0, 0.0);
        assert_eq!(
            Cmyk::from_rgb(&Rgb::opaque(0.0, 0.0, 0.0)).to_array(),
            [0.0, 0.0, 0.0, 100.0]
        );
    }

    #[test]
    fn lab_extremes() {
        assert_rgb(Lab::new(100.0, 0.0, 0.0).to_rgb(), 255.0, 255.0, 255.0);
        assert_rgb(Lab::new(0.0, 0.0, 0.0).to_rgb(), 0.0, 0.0, 0.0);
    }

    #[test]
    fn lab_outside_of_srgb_is_clipped() {
        let (rgb, clipped) = Lab::new(50.0, 120.0, -120.0).to_rgb_clipped();
        assert!(clipped);
        assert!(Rgb::FIELDS[0].range.contains(rgb.red));
        assert!(Rgb::FIELDS[2].range.contains(rgb.blue));

        let (_, clipped) = Lab::new(50.0, 10.0, 10.0).to_rgb_clipped();
        assert!(!clipped);
    }

    #[test]
    fn alpha_is_carried_through_the_pivot() {
        let rgb = Rgb::new(10.0, 20.0, 30.0, 0.25);
        assert_eq!(Hsl::from_rgb(&rgb).alpha, 0.25);
        assert_eq!(Hsv::from_rgb(&rgb).to_rgb().alpha, 0.25);
    }
}
