use smallvec::SmallVec;

use crate::{
    catalog::model::Delimitation,
    foundation::error::{MockupError, MockupResult},
};

/// Where a candidate image came from. Provenance only; resolution never
/// branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    /// View or color the user is currently hovering or clicking.
    InteractiveSelection,
    /// View flagged as the dedicated design/overlay view.
    DesignView,
    /// First view in the ordered view list.
    FirstView,
    /// Dedicated design-asset url field.
    DesignField,
    /// Legacy inline/embedded design payload.
    InlineDesign,
    /// Selected (or first) color variant's image.
    ColorVariant,
    /// Generic default product image.
    DefaultImage,
}

/// One optional image source, borrowed from the caller's product snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageCandidate<'a> {
    /// Provenance.
    pub kind: SourceKind,
    /// Candidate url; `None` and `""` are both absent.
    pub url: Option<&'a str>,
    /// Color variant the image belongs to, if any.
    pub color_variant_id: Option<u64>,
    /// View label of the image, if any.
    pub view_label: Option<&'a str>,
    /// Print zones on the image. Empty for sources without zones.
    pub delimitations: &'a [Delimitation],
}

impl<'a> ImageCandidate<'a> {
    /// A bare candidate with no color, view or zones.
    pub fn new(kind: SourceKind, url: Option<&'a str>) -> Self {
        Self {
            kind,
            url,
            color_variant_id: None,
            view_label: None,
            delimitations: &[],
        }
    }

    /// The url, when present and non-empty.
    pub fn usable_url(&self) -> Option<&'a str> {
        self.url.filter(|u| !u.is_empty())
    }
}

/// Fixed-order candidate list. Most products carry fewer than eight sources.
pub type Candidates<'a> = SmallVec<[ImageCandidate<'a>; 8]>;

/// The single winning image and why it won.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedImage {
    /// Image url to display.
    pub url: String,
    /// Provenance of the winning candidate.
    pub source_kind: SourceKind,
    /// Color variant of the winning candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_variant_id: Option<u64>,
    /// View label of the winning candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_label: Option<String>,
}

impl From<&ImageCandidate<'_>> for ResolvedImage {
    fn from(c: &ImageCandidate<'_>) -> Self {
        Self {
            url: c.url.unwrap_or_default().to_string(),
            source_kind: c.kind,
            color_variant_id: c.color_variant_id,
            view_label: c.view_label.map(str::to_string),
        }
    }
}

/// Pick the first candidate with a non-empty url.
///
/// `interactive` is tried before everything else; `candidates` are then tried
/// in the order given.
pub fn resolve_candidate<'c, 'a>(
    candidates: &'c [ImageCandidate<'a>],
    interactive: Option<&'c ImageCandidate<'a>>,
) -> MockupResult<&'c ImageCandidate<'a>> {
    interactive
        .into_iter()
        .chain(candidates.iter())
        .find(|c| c.usable_url().is_some())
        .ok_or(MockupError::NoImageAvailable)
}

/// Resolve a candidate list to exactly one displayable image.
pub fn resolve<'a>(
    candidates: &[ImageCandidate<'a>],
    interactive: Option<&ImageCandidate<'a>>,
) -> MockupResult<ResolvedImage> {
    resolve_candidate(candidates, interactive).map(ResolvedImage::from)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
