//! Dominant axis selection
//!
//! Used to pick the direction a capsule should extend along, given the offset
//! from a bone to its farthest child.

use crate::foundation::math::{Axis, Vec3};

/// Component-wise absolute value
pub fn abs_components(vector: &Vec3) -> Vec3 {
    vector.abs()
}

/// Axis with the strictly largest absolute component
///
/// X and Y only win with a strict lead over both other components; every tie
/// and the zero vector resolve to Z.
pub fn dominant_axis(vector: &Vec3) -> Axis {
    let magnitude = abs_components(vector);
    let (x, y, z) = (magnitude.x, magnitude.y, magnitude.z);

    if x > y && x > z {
        Axis::X
    } else if y > x && y > z {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// World unit vector of [`dominant_axis`]: right, up or forward
pub fn dominant_axis_unit_vector(vector: &Vec3) -> Vec3 {
    dominant_axis(vector).unit_vector()
}
