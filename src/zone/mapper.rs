use crate::{
    catalog::model::{Delimitation, ZoneCoordinates},
    foundation::core::{MappedZone, RenderedSize, ZoneRect},
    foundation::error::{MockupError, MockupResult},
};

/// Which of an image's delimitations a design goes into.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneSelector {
    /// The first zone in authoring order (usually the only one).
    #[default]
    First,
    /// Zone with this delimitation id.
    ById(u64),
    /// Zone with this name, e.g. `"chest"`.
    ByName(String),
}

/// Choose a delimitation. `None` when the image has no matching zone.
pub fn select_zone<'a>(
    zones: &'a [Delimitation],
    selector: &ZoneSelector,
) -> Option<&'a Delimitation> {
    match selector {
        ZoneSelector::First => zones.first(),
        ZoneSelector::ById(id) => zones.iter().find(|z| z.id == *id),
        ZoneSelector::ByName(name) => zones
            .iter()
            .find(|z| z.name.as_deref() == Some(name.as_str())),
    }
}

/// Map a delimitation onto the image's current rendered size.
///
/// Absolute zones are rescaled by `rendered / reference` per axis; percentage
/// zones are taken as fractions of the rendered size directly. Rotation is
/// carried over unchanged.
pub fn map_zone(zone: &Delimitation, rendered: RenderedSize) -> MockupResult<MappedZone> {
    let reference = zone.coordinates.reference();
    if !reference.is_usable() {
        return Err(MockupError::InvalidReference {
            delimitation_id: zone.id,
            width: reference.width,
            height: reference.height,
        });
    }

    let rect = match zone.coordinates {
        ZoneCoordinates::Absolute { reference } => {
            let sx = rendered.width / reference.width;
            let sy = rendered.height / reference.height;
            ZoneRect::new(zone.x * sx, zone.y * sy, zone.width * sx, zone.height * sy)
        }
        ZoneCoordinates::Percentage { .. } => ZoneRect::new(
            percent_of(zone.x, rendered.width),
            percent_of(zone.y, rendered.height),
            percent_of(zone.width, rendered.width),
            percent_of(zone.height, rendered.height),
        ),
    };

    Ok(MappedZone {
        delimitation_id: zone.id,
        name: zone.name.clone(),
        rect,
        rotation_degrees: zone.rotation_degrees,
    })
}

/// Map every zone independently; one bad zone does not affect the others.
pub fn map_zones(zones: &[Delimitation], rendered: RenderedSize) -> Vec<MockupResult<MappedZone>> {
    zones.iter().map(|z| map_zone(z, rendered)).collect()
}

// Multiply first so whole percentages of whole extents stay exact.
fn percent_of(pct: f64, extent: f64) -> f64 {
    pct * extent / 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/zone/mapper.rs"]
mod tests;
