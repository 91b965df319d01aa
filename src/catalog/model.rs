use crate::foundation::{
    core::ReferenceSize,
    error::{MockupError, MockupResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Immutable product snapshot as served by the upstream catalog.
///
/// Every legacy or duplicate image field the catalog may populate lives here.
/// [`crate::assemble_candidates`] folds them into one ordered list, so nothing
/// downstream knows these field names.
pub struct ProductSnapshot {
    /// Catalog product id.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Ordered per-view images not tied to a color.
    #[serde(default)]
    pub views: Vec<ProductImage>,
    /// Color variants, each with its own per-view images.
    #[serde(default)]
    pub color_variants: Vec<ColorVariant>,
    /// Dedicated design-asset url field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_url: Option<String>,
    /// Legacy inline design payload (data URL or bare base64).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_inline: Option<String>,
    /// Generic default product image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One photographed view of one color variant.
pub struct ProductImage {
    /// Image id.
    pub id: u64,
    /// View label ("front", "back", ...).
    #[serde(default)]
    pub view_label: String,
    /// Image url; `None` and `""` both mean absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Natural pixel width of the photograph.
    #[serde(default)]
    pub natural_width: f64,
    /// Natural pixel height of the photograph.
    #[serde(default)]
    pub natural_height: f64,
    /// Print zones authored on this view, in authoring order.
    #[serde(default)]
    pub delimitations: Vec<Delimitation>,
    /// Flags the dedicated design/overlay view.
    #[serde(default)]
    pub is_design_view: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A color variant of a product.
pub struct ColorVariant {
    /// Variant id.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Color code, usually `#rrggbb`.
    #[serde(default)]
    pub color_code: String,
    /// Per-view images of this variant.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Vendor design graphic. Owned by the catalog; read-only here.
pub struct DesignAsset {
    /// Design id.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Design image url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Intrinsic width in pixels.
    #[serde(default)]
    pub intrinsic_width: f64,
    /// Intrinsic height in pixels.
    #[serde(default)]
    pub intrinsic_height: f64,
}

impl DesignAsset {
    /// Intrinsic size tagged with this design's id.
    pub fn size(&self) -> DesignSize {
        DesignSize {
            design_id: Some(self.id),
            intrinsic_width: self.intrinsic_width,
            intrinsic_height: self.intrinsic_height,
        }
    }
}

/// Intrinsic size of a design, all the placement calculator needs from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignSize {
    /// Source design id, for error reporting.
    pub design_id: Option<u64>,
    /// Intrinsic width in pixels.
    pub intrinsic_width: f64,
    /// Intrinsic height in pixels.
    pub intrinsic_height: f64,
}

impl DesignSize {
    /// An anonymous design size.
    pub const fn new(intrinsic_width: f64, intrinsic_height: f64) -> Self {
        Self {
            design_id: None,
            intrinsic_width,
            intrinsic_height,
        }
    }
}

/// Coordinate system a delimitation was authored in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneCoordinates {
    /// x/y/width/height are percentages (0–100) of the reference image.
    Percentage {
        /// Image the percentages were measured against.
        reference: ReferenceSize,
    },
    /// x/y/width/height are pixels at the reference resolution.
    Absolute {
        /// Resolution the pixels belong to.
        reference: ReferenceSize,
    },
}

impl ZoneCoordinates {
    /// Reference size, whichever the mode.
    pub fn reference(self) -> ReferenceSize {
        match self {
            Self::Percentage { reference } | Self::Absolute { reference } => reference,
        }
    }
}

impl Default for ZoneCoordinates {
    fn default() -> Self {
        Self::Percentage {
            reference: ReferenceSize::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "DelimitationRecord", into = "DelimitationRecord")]
/// A named print zone on a product image.
pub struct Delimitation {
    /// Delimitation id.
    pub id: u64,
    /// Optional zone name ("chest", "sleeve").
    pub name: Option<String>,
    /// Left edge, in the units of [`Self::coordinates`].
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Zone rotation in degrees, clockwise positive.
    pub rotation_degrees: f64,
    /// Coordinate system and reference resolution.
    pub coordinates: ZoneCoordinates,
}

impl Delimitation {
    /// Validate authoring invariants.
    ///
    /// The mapper only insists on a usable reference size; this check is for
    /// callers that want to reject malformed zones up front.
    pub fn validate(&self) -> MockupResult<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotationDegrees", self.rotation_degrees),
        ] {
            if !value.is_finite() {
                return Err(MockupError::validation(format!(
                    "delimitation {} {field} must be finite",
                    self.id
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MockupError::validation(format!(
                "delimitation {} width/height must be > 0",
                self.id
            )));
        }
        if !self.coordinates.reference().is_usable() {
            return Err(MockupError::validation(format!(
                "delimitation {} referenceWidth/referenceHeight must be > 0",
                self.id
            )));
        }
        if let ZoneCoordinates::Percentage { .. } = self.coordinates {
            for (field, value) in [
                ("x", self.x),
                ("y", self.y),
                ("width", self.width),
                ("height", self.height),
            ] {
                if !(0.0..=100.0).contains(&value) {
                    return Err(MockupError::validation(format!(
                        "delimitation {} {field} must be within 0..=100 in percentage mode",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Wire literal of [`ZoneCoordinates`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum CoordinateType {
    #[default]
    Percentage,
    Absolute,
}

// Flat catalog shape; missing reference dims become 0 so the mapper, not the
// parser, reports them.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DelimitationRecord {
    id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation_degrees: f64,
    #[serde(default)]
    coordinate_type: CoordinateType,
    #[serde(default)]
    reference_width: f64,
    #[serde(default)]
    reference_height: f64,
}

impl From<DelimitationRecord> for Delimitation {
    fn from(r: DelimitationRecord) -> Self {
        let reference = ReferenceSize::new(r.reference_width, r.reference_height);
        let coordinates = match r.coordinate_type {
            CoordinateType::Percentage => ZoneCoordinates::Percentage { reference },
            CoordinateType::Absolute => ZoneCoordinates::Absolute { reference },
        };
        Self {
            id: r.id,
            name: r.name,
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
            rotation_degrees: r.rotation_degrees,
            coordinates,
        }
    }
}

impl From<Delimitation> for DelimitationRecord {
    fn from(d: Delimitation) -> Self {
        let (coordinate_type, reference) = match d.coordinates {
            ZoneCoordinates::Percentage { reference } => (CoordinateType::Percentage, reference),
            ZoneCoordinates::Absolute { reference } => (CoordinateType::Absolute, reference),
        };
        Self {
            id: d.id,
            name: d.name,
            x: d.x,
            y: d.y,
            width: d.width,
            height: d.height,
            rotation_degrees: d.rotation_degrees,
            coordinate_type,
            reference_width: reference.width,
            reference_height: reference.height,
        }
    }
}

impl ProductSnapshot {
    /// Decode a product snapshot from catalog JSON.
    pub fn from_json(s: &str) -> MockupResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// All images on the product, product-level views first, then each
    /// variant's images.
    pub fn all_images(&self) -> impl Iterator<Item = &ProductImage> {
        self.views
            .iter()
            .chain(self.color_variants.iter().flat_map(|c| c.images.iter()))
    }

    /// Validate every delimitation on every image.
    pub fn validate(&self) -> MockupResult<()> {
        for image in self.all_images() {
            for zone in &image.delimitations {
                zone.validate()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
