//! Model a color in the sRGB color space, the pivot every conversion goes
//! through.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3},
    models::xyz::Xyz,
};

colorwell_macros::gen_model! {
    /// A color specified in the sRGB color space. Channels are real valued so
    /// no precision is lost before the final formatting.
    pub struct Rgb {
        /// The red component of the color.
        #[range(0.0, 255.0)]
        pub red: Component,
        /// The green component of the color.
        #[range(0.0, 255.0)]
        pub green: Component,
        /// The blue component of the color.
        #[range(0.0, 255.0)]
        pub blue: Component,
        /// The alpha component of the color.
        #[range(0.0, 1.0)]
        pub alpha: Component,
    }
}

impl Rgb {
    /// Create an opaque color.
    pub fn opaque(red: Component, green: Component, blue: Component) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Return the channels scaled to [0, 1].
    pub fn to_unit(&self) -> Components {
        Components(self.red, self.green, self.blue).map(|v| v / 255.0)
    }

    /// Create a color from channels in [0, 1].
    pub fn from_unit(components: Components, alpha: Component) -> Self {
        let Components(red, green, blue) = components.map(|v| v * 255.0);
        Self::new(red, green, blue, alpha)
    }

    /// The channels rounded to bytes, as written in the hex notation.
    pub fn to_bytes(&self) -> [u8; 4] {
        // Components are always within range, so the casts can not truncate.
        [
            self.red.round() as u8,
            self.green.round() as u8,
            self.blue.round() as u8,
            (self.alpha * 255.0).round() as u8,
        ]
    }

    /// True if the alpha component is opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

/// Convert gamma encoded sRGB channels in [0, 1] to linear light.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs < 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

/// Convert linear light sRGB channels to gamma encoded channels.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs > 0.0031308 {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        } else {
            12.92 * value
        }
    })
}

/// Convert gamma encoded sRGB channels in [0, 1] to CIE-XYZ scaled so that
/// the reference white has Y = 100.
pub fn srgb_to_xyz(rgb: &Components) -> Xyz {
    #[rustfmt::skip]
    let to_xyz = transform_3x3(
        0.4124564, 0.2126729, 0.0193339,
        0.3575761, 0.7151522, 0.1191920,
        0.1804375, 0.0721750, 0.9503041,
    );

    let linear = to_linear_light(rgb);
    let Components(x, y, z) = transform(&to_xyz, linear).map(|v| v * 100.0);
    Xyz { x, y, z }
}

/// Convert CIE-XYZ (Y = 100 for white) to gamma encoded sRGB channels. The
/// result is not clipped and may fall outside of [0, 1].
pub fn xyz_to_srgb(xyz: &Xyz) -> Components {
    #[rustfmt::skip]
    let from_xyz = transform_3x3(
         3.2404542, -0.9692660,  0.0556434,
        -1.5371385,  1.8760108, -0.2040259,
        -0.4985314,  0.0415560,  1.0572252,
    );

    let scaled = Components(xyz.x, xyz.y, xyz.z).map(|v| v / 100.0);
    to_gamma_encoded(&transform(&from_xyz, scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn channels_are_clamped() {
        let rgb = Rgb::new(300.0, -20.0, 12.5, 2.0);
        assert_eq!(rgb.red, 255.0);
        assert_eq!(rgb.green, 0.0);
        assert_eq!(rgb.blue, 12.5);
        assert_eq!(rgb.alpha, 1.0);
    }

    #[test]
    fn fields_describe_the_channels() {
        let names = Rgb::FIELDS.map(|f| f.name);
        assert_eq!(names, ["red", "green", "blue", "alpha"]);
        assert_eq!(Rgb::FIELDS[0].range.to_string(), "0-255");
        assert_eq!(Rgb::FIELDS[3].range.to_string(), "0-1");
    }

    #[test]
    fn to_bytes_rounds() {
        assert_eq!(Rgb::new(254.6, 0.4, 127.5, 0.5).to_bytes(), [255, 0, 128, 128]);
    }

    #[test]
    fn gamma_round_trip() {
        let encoded = Components(0.823529, 0.411765, 0.117647);
        let linear = to_linear_light(&encoded);
        assert_component_eq!(linear.0, 0.644480, 1e-4);
        assert_component_eq!(linear.1, 0.141263, 1e-4);
        assert_component_eq!(linear.2, 0.012983, 1e-4);

        let back = to_gamma_encoded(&linear);
        assert_component_eq!(back.0, encoded.0, 1e-4);
        assert_component_eq!(back.1, encoded.1, 1e-4);
        assert_component_eq!(back.2, encoded.2, 1e-4);
    }

    #[test]
    fn white_maps_to_reference_white() {
        let xyz = srgb_to_xyz(&Components(1.0, 1.0, 1.0));
        assert_component_eq!(xyz.x, 95.047, 0.01);
        assert_component_eq!(xyz.y, 100.0, 0.01);
        assert_component_eq!(xyz.z, 108.883, 0.01);
    }
}
