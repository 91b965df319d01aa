//! Affine transform helpers.

use crate::foundation::core::{Affine, Point, Vec2};

/// Compose two transforms; `b` is applied first.
#[inline]
pub fn compose(a: Affine, b: Affine) -> Affine {
    a * b
}

/// Rotate by `degrees` around `pivot`.
///
/// Positive angles turn clockwise on screen (pixel space, y down).
pub fn rotate_about(pivot: Point, degrees: f64) -> Affine {
    let to_pivot = Affine::translate(pivot.to_vec2());
    let from_pivot = Affine::translate(-pivot.to_vec2());
    let rotate = Affine::rotate(degrees.to_radians());

    // T(pivot) * R * T(-pivot)
    compose(to_pivot, compose(rotate, from_pivot))
}

/// Place a `size`-sized local box at `offset`, rotated around its own center.
pub fn place_centered_rotation(offset: Vec2, size: Vec2, degrees: f64) -> Affine {
    let local_center = Point::new(size.x * 0.5, size.y * 0.5);
    compose(Affine::translate(offset), rotate_about(local_center, degrees))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
