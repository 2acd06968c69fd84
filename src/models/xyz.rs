//! The CIE-XYZ intermediate used between sRGB and CIE-L*a*b*.

use crate::color::Component;

/// The D65 reference white, scaled so that Y = 100.
pub struct D65;

impl D65 {
    pub const X: Component = 95.047;
    pub const Y: Component = 100.0;
    pub const Z: Component = 108.883;
}

/// A color in the CIE-XYZ color space relative to [`D65`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    pub x: Component,
    pub y: Component,
    pub z: Component,
}
