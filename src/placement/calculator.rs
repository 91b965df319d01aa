use crate::{
    catalog::model::DesignSize,
    foundation::core::{Affine, MappedZone, Point, Rect, Vec2},
    foundation::error::{MockupError, MockupResult},
    transform::affine::place_centered_rotation,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Where inside the zone the design is anchored.
pub enum PositioningMode {
    /// Zone center.
    #[default]
    Center,
    /// Zone top-left corner.
    TopLeft,
    /// Zone center shifted by the manual offsets.
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Caller-supplied placement settings for one design application.
pub struct PlacementConfig {
    /// Anchor selection.
    #[serde(default)]
    pub positioning_mode: PositioningMode,
    /// Uniform scale applied to the design's intrinsic size.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Horizontal anchor offset for [`PositioningMode::Custom`], in zone pixels.
    #[serde(default)]
    pub manual_offset_x: f64,
    /// Vertical anchor offset for [`PositioningMode::Custom`], in zone pixels.
    #[serde(default)]
    pub manual_offset_y: f64,
    /// Rotation in degrees, clockwise positive. Unset means 0, unless
    /// `inherit_zone_rotation` is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_degrees_override: Option<f64>,
    /// Use the zone's authored rotation when no override is set.
    #[serde(default)]
    pub inherit_zone_rotation: bool,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            positioning_mode: PositioningMode::Center,
            scale: default_scale(),
            manual_offset_x: 0.0,
            manual_offset_y: 0.0,
            rotation_degrees_override: None,
            inherit_zone_rotation: false,
        }
    }
}

impl PlacementConfig {
    /// Decode a placement config from JSON, filling unspecified fields with defaults.
    pub fn from_json(s: &str) -> MockupResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    pub fn validate(&self) -> MockupResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MockupError::validation(
                "placement scale must be finite and > 0",
            ));
        }
        if !self.manual_offset_x.is_finite() || !self.manual_offset_y.is_finite() {
            return Err(MockupError::validation(
                "placement manual offsets must be finite",
            ));
        }
        if let Some(deg) = self.rotation_degrees_override
            && !deg.is_finite()
        {
            return Err(MockupError::validation(
                "placement rotationDegreesOverride must be finite when set",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Final draw transform for a design, in rendered-image pixels.
///
/// The design is drawn into the box `(offset_x, offset_y, rendered_width,
/// rendered_height)` and then rotated around that box's center.
pub struct PlacementResult {
    /// Left edge of the unrotated design box.
    pub offset_x: f64,
    /// Top edge of the unrotated design box.
    pub offset_y: f64,
    /// Draw width (already scaled).
    pub rendered_width: f64,
    /// Draw height (already scaled).
    pub rendered_height: f64,
    /// Rotation around the design's center, clockwise positive.
    pub rotation_degrees: f64,
}

impl PlacementResult {
    /// Transform mapping the design's local box `(0, 0, w, h)` into image space.
    pub fn to_affine(&self) -> Affine {
        place_centered_rotation(
            Vec2::new(self.offset_x, self.offset_y),
            Vec2::new(self.rendered_width, self.rendered_height),
            self.rotation_degrees,
        )
    }

    /// Center of the design in image space. Rotation does not move it.
    pub fn center(&self) -> Point {
        Point::new(
            self.offset_x + self.rendered_width * 0.5,
            self.offset_y + self.rendered_height * 0.5,
        )
    }

    /// Axis-aligned bounds of the (possibly rotated) design in image space.
    pub fn bounding_box(&self) -> Rect {
        let local = Rect::new(0.0, 0.0, self.rendered_width, self.rendered_height);
        self.to_affine().transform_rect_bbox(local)
    }

    /// Whether the design bleeds past its zone. Diagnostic only; placements
    /// are never clipped.
    pub fn overflows(&self, zone: &MappedZone) -> bool {
        let bounds = self.bounding_box();
        let zone = zone.rect.to_kurbo();
        // Tolerate float noise from the rotation matrix.
        const EPS: f64 = 1e-9;
        bounds.x0 < zone.x0 - EPS
            || bounds.y0 < zone.y0 - EPS
            || bounds.x1 > zone.x1 + EPS
            || bounds.y1 > zone.y1 + EPS
    }
}

/// Compute where a design lands inside a mapped zone.
///
/// Size is `intrinsic * scale` on both axes. The design is centered on the
/// anchor chosen by the positioning mode, then rotated around its own center
/// by the override angle (0 when unset).
pub fn compute_placement(
    zone: &MappedZone,
    design: DesignSize,
    config: &PlacementConfig,
) -> MockupResult<PlacementResult> {
    let (iw, ih) = (design.intrinsic_width, design.intrinsic_height);
    if !(iw > 0.0 && ih > 0.0 && iw.is_finite() && ih.is_finite()) {
        return Err(MockupError::InvalidDesignAsset {
            design_id: design.design_id,
            width: iw,
            height: ih,
        });
    }
    config.validate()?;

    let width = iw * config.scale;
    let height = ih * config.scale;

    let anchor = match config.positioning_mode {
        PositioningMode::Center => zone.rect.center(),
        PositioningMode::TopLeft => zone.rect.origin(),
        PositioningMode::Custom => {
            zone.rect.center() + Vec2::new(config.manual_offset_x, config.manual_offset_y)
        }
    };

    Ok(PlacementResult {
        offset_x: anchor.x - width * 0.5,
        offset_y: anchor.y - height * 0.5,
        rendered_width: width,
        rendered_height: height,
        rotation_degrees: resolve_rotation(zone, config),
    })
}

fn resolve_rotation(zone: &MappedZone, config: &PlacementConfig) -> f64 {
    match config.rotation_degrees_override {
        Some(deg) => deg,
        None if config.inherit_zone_rotation => zone.rotation_degrees,
        None => 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/calculator.rs"]
mod tests;
