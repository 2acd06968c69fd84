//! The canonical numeric structures for every supported format. Each model
//! keeps its components inside the ranges declared on its fields; anything
//! outside of them is clamped (or wrapped, for hues) at construction.

use std::fmt;

use crate::color::{ColorFormat, Component};

mod cmyk;
mod hsl;
mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Rgb;
pub(crate) use rgb::{srgb_to_xyz, xyz_to_srgb};

/// An inclusive range of values a component accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The smallest accepted value.
    pub min: Component,
    /// The largest accepted value.
    pub max: Component,
}

impl Bounds {
    /// Create new bounds from `min` to `max`, both inclusive.
    pub const fn new(min: Component, max: Component) -> Self {
        Self { min, max }
    }

    /// Return true if the value lies within the bounds.
    pub fn contains(&self, value: Component) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Describes a single component of a model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// The name of the component as shown in diagnostics.
    pub name: &'static str,
    /// The range of values the component accepts.
    pub range: Bounds,
    /// Wrapping components (hues) go around instead of being clamped.
    pub wraps: bool,
}

impl Field {
    /// Bring a value into the range of this field. NaN becomes the minimum,
    /// and so does an infinity on a wrapping field.
    pub fn constrain(&self, value: Component) -> Component {
        let Bounds { min, max } = self.range;

        if value.is_nan() {
            return min;
        }

        if self.wraps {
            if value.is_infinite() {
                return min;
            }
            let wrapped = (value - min).rem_euclid(max - min) + min;
            if wrapped >= max {
                min
            } else {
                wrapped
            }
        } else {
            num_traits::clamp(value, min, max)
        }
    }
}

/// A trait implemented by every color model. The RGB model is the pivot all
/// conversions go through.
pub trait Model: Sized {
    /// The textual format this model is written in.
    const FORMAT: ColorFormat;

    /// Convert this model to the RGB pivot.
    fn to_rgb(&self) -> Rgb;

    /// Convert the RGB pivot to this model.
    fn from_rgb(rgb: &Rgb) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNEL: Field = Field {
        name: "red",
        range: Bounds::new(0.0, 255.0),
        wraps: false,
    };

    const HUE: Field = Field {
        name: "hue",
        range: Bounds::new(0.0, 360.0),
        wraps: true,
    };

    #[test]
    fn clamping_fields() {
        assert_eq!(CHANNEL.constrain(300.0), 255.0);
        assert_eq!(CHANNEL.constrain(-1.0), 0.0);
        assert_eq!(CHANNEL.constrain(127.5), 127.5);
        assert_eq!(CHANNEL.constrain(Component::NAN), 0.0);
    }

    #[test]
    fn wrapping_fields() {
        assert_eq!(HUE.constrain(360.0), 0.0);
        assert_eq!(HUE.constrain(370.0), 10.0);
        assert_eq!(HUE.constrain(-90.0), 270.0);
        assert_eq!(HUE.constrain(Component::INFINITY), 0.0);
        assert_eq!(HUE.constrain(Component::NEG_INFINITY), 0.0);
    }

    #[test]
    fn infinities_clamp_on_plain_fields() {
        assert_eq!(CHANNEL.constrain(Component::INFINITY), 255.0);
        assert_eq!(CHANNEL.constrain(Component::NEG_INFINITY), 0.0);
    }

    #[test]
    fn bounds_display() {
        assert_eq!(Bounds::new(0.0, 255.0).to_string(), "0-255");
        assert_eq!(Bounds::new(-128.0, 127.0).to_string(), "-128-127");
        assert_eq!(Bounds::new(0.0, 1.0).to_string(), "0-1");
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(0.0, 360.0);
        assert!(bounds.contains(0.0));
        assert!(bounds.contains(360.0));
        assert!(!bounds.contains(360.5));
        assert!(!bounds.contains(Component::NAN));
    }
}
