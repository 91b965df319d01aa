use rayon::prelude::*;

use crate::{
    catalog::candidates::{InlineUrls, Selection, assemble_candidates, interactive_candidate},
    catalog::model::{DesignAsset, ProductSnapshot},
    foundation::core::{MappedZone, RenderedSize},
    foundation::error::{MockupError, MockupResult},
    placement::calculator::{PlacementConfig, PlacementResult, compute_placement},
    resolve::resolver::{ResolvedImage, resolve_candidate},
    zone::mapper::{ZoneSelector, map_zone, select_zone},
};

/// Everything needed to compose one product card.
#[derive(Clone, Debug)]
pub struct CompositeRequest<'a> {
    /// Product snapshot, borrowed for the duration of the call.
    pub product: &'a ProductSnapshot,
    /// Interactive selection on the card.
    pub selection: Selection,
    /// Design to overlay, if any.
    pub design: Option<&'a DesignAsset>,
    /// Placement settings for the design.
    pub config: PlacementConfig,
    /// Which zone on the resolved image receives the design.
    pub zone: ZoneSelector,
    /// Size the base image is currently displayed at.
    pub rendered: RenderedSize,
}

impl<'a> CompositeRequest<'a> {
    /// Request for `product` with no design and default settings.
    pub fn new(product: &'a ProductSnapshot, rendered: RenderedSize) -> Self {
        Self {
            product,
            selection: Selection::default(),
            design: None,
            config: PlacementConfig::default(),
            zone: ZoneSelector::default(),
            rendered,
        }
    }

    /// Overlay `design` with `config`.
    pub fn with_design(mut self, design: &'a DesignAsset, config: PlacementConfig) -> Self {
        self.design = Some(design);
        self.config = config;
        self
    }

    /// Set the interactive selection.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the zone selector.
    pub fn with_zone(mut self, zone: ZoneSelector) -> Self {
        self.zone = zone;
        self
    }
}

/// Why a composite carries no overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum OverlaySkip {
    /// No design was requested.
    NoDesign,
    /// The resolved image has no zone matching the selector.
    NoZone,
    /// The selected zone has unusable reference dimensions.
    InvalidReference {
        /// Offending delimitation.
        delimitation_id: u64,
    },
    /// The design has no usable intrinsic size.
    InvalidDesignAsset {
        /// Offending design.
        design_id: Option<u64>,
    },
    /// The placement config was rejected.
    InvalidConfig {
        /// Validation message.
        message: String,
    },
}

/// Output handed to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Composite {
    /// Base image to draw.
    pub image: ResolvedImage,
    /// Zone the design was placed in, when one was mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<MappedZone>,
    /// Design placement, when an overlay applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<PlacementResult>,
    /// Why there is no overlay, when there is none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<OverlaySkip>,
}

impl Composite {
    fn base_only(image: ResolvedImage, zone: Option<MappedZone>, reason: OverlaySkip) -> Self {
        Self {
            image,
            zone,
            overlay: None,
            skipped: Some(reason),
        }
    }
}

/// Run one product through resolve → map → place.
///
/// Only [`MockupError::NoImageAvailable`] is returned as an error. Malformed
/// zones, designs or configs degrade to the base image with a skip reason.
#[tracing::instrument(skip(req), fields(product_id = req.product.id))]
pub fn compose(req: &CompositeRequest<'_>) -> MockupResult<Composite> {
    let inline = InlineUrls::for_product(req.product);
    let candidates = assemble_candidates(req.product, req.selection, &inline);
    let interactive = interactive_candidate(req.product, req.selection);

    let winner = resolve_candidate(&candidates, interactive.as_ref())?;
    let image = ResolvedImage::from(winner);
    tracing::debug!(
        url = %image.url,
        source = ?image.source_kind,
        view = ?image.view_label,
        "resolved base image"
    );

    let Some(design) = req.design else {
        return Ok(Composite::base_only(image, None, OverlaySkip::NoDesign));
    };

    let Some(zone) = select_zone(winner.delimitations, &req.zone) else {
        tracing::debug!(selector = ?req.zone, "no zone on resolved image");
        return Ok(Composite::base_only(image, None, OverlaySkip::NoZone));
    };

    let mapped = match map_zone(zone, req.rendered) {
        Ok(m) => m,
        Err(err) => {
            tracing::warn!(%err, "skipping overlay");
            return Ok(Composite::base_only(image, None, skip_reason(err)?));
        }
    };

    match compute_placement(&mapped, design.size(), &req.config) {
        Ok(placement) => {
            if placement.overflows(&mapped) {
                tracing::trace!(
                    zone = mapped.delimitation_id,
                    design = design.id,
                    "design bleeds past zone"
                );
            }
            tracing::debug!(?placement, "placed design");
            Ok(Composite {
                image,
                zone: Some(mapped),
                overlay: Some(placement),
                skipped: None,
            })
        }
        Err(err) => {
            tracing::warn!(%err, "skipping overlay");
            Ok(Composite::base_only(image, Some(mapped), skip_reason(err)?))
        }
    }
}

/// Compose many products in parallel. Output order matches input order and
/// one product's failure never affects another.
#[tracing::instrument(skip(reqs), fields(count = reqs.len()))]
pub fn compose_batch(reqs: &[CompositeRequest<'_>]) -> Vec<MockupResult<Composite>> {
    reqs.par_iter().map(|req| compose(req)).collect()
}

fn skip_reason(err: MockupError) -> MockupResult<OverlaySkip> {
    match err {
        MockupError::InvalidReference {
            delimitation_id, ..
        } => Ok(OverlaySkip::InvalidReference { delimitation_id }),
        MockupError::InvalidDesignAsset { design_id, .. } => {
            Ok(OverlaySkip::InvalidDesignAsset { design_id })
        }
        MockupError::Validation(message) => Ok(OverlaySkip::InvalidConfig { message }),
        other => Err(other),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/compose.rs"]
mod tests;
