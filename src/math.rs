//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

/// A 3x3 color matrix, stored in the upper left of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from 3x3 values. The first three values are what the
/// first input component contributes to each of the three outputs.
#[allow(clippy::too_many_arguments)]
pub fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Return true if the value is close enough to zero to be considered zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative values.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Round the value to the given number of decimal places.
pub fn round_to(value: Component, decimals: i32) -> Component {
    let factor = (10.0 as Component).powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_keeps_components() {
        let identity = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            transform(&identity, Components(0.1, 0.2, 0.3)),
            Components(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn transform_values_are_column_major() {
        // First output component is 1*x + 2*y + 3*z.
        let t = transform_3x3(1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 0.0);
        assert_eq!(transform(&t, Components(1.0, 1.0, 1.0)).0, 6.0);
    }

    #[test]
    fn hues_wrap_around() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(720.0 + 15.0), 15.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(53.2408, 2), 53.24);
        assert_eq!(round_to(0.5, 0), 1.0);
    }
}
