//! Model a color with the subtractive CMYK notation.

use crate::color::Component;

colorwell_macros::gen_model! {
    /// A color specified as print style cyan, magenta, yellow and key (black)
    /// percentages. There is no alpha channel.
    pub struct Cmyk {
        /// The cyan ink coverage.
        #[range(0.0, 100.0)]
        pub cyan: Component,
        /// The magenta ink coverage.
        #[range(0.0, 100.0)]
        pub magenta: Component,
        /// The yellow ink coverage.
        #[range(0.0, 100.0)]
        pub yellow: Component,
        /// The key (black) ink coverage.
        #[range(0.0, 100.0)]
        pub key: Component,
    }
}
