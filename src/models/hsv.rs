//! Model a color with the HSV notation in the sRGB color space.

use crate::color::Component;

colorwell_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue in degrees.
        #[range(0.0, 360.0)]
        #[wrapping]
        pub hue: Component,
        /// The saturation as a percentage.
        #[range(0.0, 100.0)]
        pub saturation: Component,
        /// The value (brightness) as a percentage.
        #[range(0.0, 100.0)]
        #[label("brightness")]
        pub value: Component,
        /// The alpha component of the color.
        #[range(0.0, 1.0)]
        pub alpha: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversions_constrain() {
        let hsv = Hsv::from([-60.0, 50.0, 150.0, 1.0]);
        assert_eq!(hsv.to_array(), [300.0, 50.0, 100.0, 1.0]);
    }

    #[test]
    fn value_is_labelled_brightness() {
        let names = Hsv::FIELDS.map(|field| field.name);
        assert_eq!(names, ["hue", "saturation", "brightness", "alpha"]);
    }
}
