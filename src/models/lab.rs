//! Model a color in the CIE-L*a*b* color space with a D65 white point.

use crate::{
    color::Component,
    models::xyz::{Xyz, D65},
};

colorwell_macros::gen_model! {
    /// A color specified in the CIE-L*a*b* color space.
    pub struct Lab {
        /// The perceptual lightness.
        #[range(0.0, 100.0)]
        pub lightness: Component,
        /// The green-red axis.
        #[range(-128.0, 127.0)]
        pub a: Component,
        /// The blue-yellow axis.
        #[range(-128.0, 127.0)]
        pub b: Component,
    }
}

const DELTA: Component = 6.0 / 29.0;

fn f(t: Component) -> Component {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn f_inv(t: Component) -> Component {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

impl Lab {
    /// Convert this color to CIE-XYZ.
    pub(crate) fn to_xyz(&self) -> Xyz {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz {
            x: D65::X * f_inv(fx),
            y: D65::Y * f_inv(fy),
            z: D65::Z * f_inv(fz),
        }
    }

    /// Convert a CIE-XYZ color to CIE-L*a*b*.
    pub(crate) fn from_xyz(xyz: &Xyz) -> Self {
        let fx = f(xyz.x / D65::X);
        let fy = f(xyz.y / D65::Y);
        let fz = f(xyz.z / D65::Z);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}
