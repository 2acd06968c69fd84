//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

colorwell_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue in degrees.
        #[range(0.0, 360.0)]
        #[wrapping]
        pub hue: Component,
        /// The saturation as a percentage.
        #[range(0.0, 100.0)]
        pub saturation: Component,
        /// The lightness as a percentage.
        #[range(0.0, 100.0)]
        pub lightness: Component,
        /// The alpha component of the color.
        #[range(0.0, 1.0)]
        pub alpha: Component,
    }
}
