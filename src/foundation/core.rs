pub use kurbo::{Affine, Point, Rect, Vec2};

/// Size at which a base image is currently displayed, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedSize {
    /// Displayed width.
    pub width: f64,
    /// Displayed height.
    pub height: f64,
}

impl RenderedSize {
    /// Create a rendered size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Image resolution a delimitation was authored against.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceSize {
    /// Reference width in pixels.
    pub width: f64,
    /// Reference height in pixels.
    pub height: f64,
}

impl ReferenceSize {
    /// Create a reference size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both axes are finite and strictly positive.
    pub fn is_usable(self) -> bool {
        // `>` is false for NaN, so NaN is rejected too.
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Axis-aligned rectangle in rendered pixel space, origin top-left, y down.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoneRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ZoneRect {
    /// Create a rect from its top-left corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Center point.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Convert to a kurbo rect (`x0,y0,x1,y1`).
    pub fn to_kurbo(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A delimitation mapped onto the rendered image.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MappedZone {
    /// Source delimitation id.
    pub delimitation_id: u64,
    /// Source delimitation name (e.g. "chest", "sleeve").
    pub name: Option<String>,
    /// Zone rectangle in rendered pixels.
    pub rect: ZoneRect,
    /// Zone rotation, passed through from authoring.
    pub rotation_degrees: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
