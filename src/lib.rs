//! printzone resolves which product image to show and where a vendor design
//! lands on it.
//!
//! A marketplace card is a base product photo with a design drawn inside a
//! print zone ("delimitation"). This crate computes the *which* and the
//! *where*; drawing pixels is left to the caller's renderer.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `ProductSnapshot + Selection -> ResolvedImage`. Every image
//!    source on the product is folded into one fixed-order candidate list and
//!    the first non-empty url wins.
//! 2. **Map**: `Delimitation + RenderedSize -> MappedZone`. Zones authored as
//!    percentages or as pixels at a reference resolution are converted to the
//!    image's current display size.
//! 3. **Place**: `MappedZone + DesignSize + PlacementConfig -> PlacementResult`.
//!    The design is scaled uniformly, centered on an anchor, and rotated around
//!    its own center.
//!
//! Each stage is a pure function over borrowed, immutable data, so any number
//! of products can be composed concurrently (see [`compose_batch`]).
//!
//! Coordinates are pixels in the displayed image, origin top-left, y down.
//! Positive rotation is clockwise on screen.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod foundation;
mod pipeline;
mod placement;
mod resolve;
mod zone;

/// Shared transform helpers.
pub mod transform;

pub use catalog::candidates::{
    InlineUrls, Selection, assemble_candidates, inline_payload_url, interactive_candidate,
};
pub use catalog::model::{
    ColorVariant, Delimitation, DesignAsset, DesignSize, ProductImage, ProductSnapshot,
    ZoneCoordinates,
};
pub use foundation::core::{
    Affine, MappedZone, Point, Rect, ReferenceSize, RenderedSize, Vec2, ZoneRect,
};
pub use foundation::error::{MockupError, MockupResult};
pub use pipeline::compose::{Composite, CompositeRequest, OverlaySkip, compose, compose_batch};
pub use placement::calculator::{
    PlacementConfig, PlacementResult, PositioningMode, compute_placement,
};
pub use resolve::resolver::{
    Candidates, ImageCandidate, ResolvedImage, SourceKind, resolve, resolve_candidate,
};
pub use zone::mapper::{ZoneSelector, map_zone, map_zones, select_zone};
