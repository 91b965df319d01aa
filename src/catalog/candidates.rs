//! Product snapshot → fixed-order candidate list.
//!
//! This is the one place that knows the catalog's image field names. The
//! resolver only ever sees the ordered [`Candidates`] built here.

use std::borrow::Cow;

use crate::{
    catalog::model::{ColorVariant, ProductImage, ProductSnapshot},
    resolve::resolver::{Candidates, ImageCandidate, SourceKind},
};

const INLINE_PNG_PREFIX: &str = "data:image/png;base64,";

/// What the user is currently pointing at on a product card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected color variant index.
    #[serde(default)]
    pub color_index: Option<usize>,
    /// Selected view index.
    #[serde(default)]
    pub view_index: Option<usize>,
}

/// Build the fixed-order fallback candidates for `product`.
///
/// Order: design view, first view, design url, inline design, color variant,
/// default image. The interactive selection is separate, see
/// [`interactive_candidate`].
pub fn assemble_candidates<'a>(
    product: &'a ProductSnapshot,
    selection: Selection,
    inline_urls: &'a InlineUrls<'a>,
) -> Candidates<'a> {
    let mut out = Candidates::new();

    let design_view = product
        .views
        .iter()
        .find(|v| v.is_design_view && has_url(v));
    out.push(match design_view {
        Some(v) => image_candidate(SourceKind::DesignView, v, None),
        None => ImageCandidate::new(SourceKind::DesignView, None),
    });

    let first_view = product.views.iter().find(|v| has_url(v));
    out.push(match first_view {
        Some(v) => image_candidate(SourceKind::FirstView, v, None),
        None => ImageCandidate::new(SourceKind::FirstView, None),
    });

    out.push(ImageCandidate::new(
        SourceKind::DesignField,
        product.design_url.as_deref(),
    ));
    out.push(ImageCandidate::new(
        SourceKind::InlineDesign,
        inline_urls.design.as_deref(),
    ));

    let variant = selection
        .color_index
        .and_then(|i| product.color_variants.get(i))
        .or_else(|| product.color_variants.first());
    out.push(
        match variant.and_then(|c| c.images.iter().find(|i| has_url(i)).map(|i| (c, i))) {
            Some((c, i)) => image_candidate(SourceKind::ColorVariant, i, Some(c)),
            None => ImageCandidate {
                color_variant_id: variant.map(|c| c.id),
                ..ImageCandidate::new(SourceKind::ColorVariant, None)
            },
        },
    );

    out.push(ImageCandidate::new(
        SourceKind::DefaultImage,
        product.image_url.as_deref(),
    ));

    out
}

/// Candidate for the view the user is interacting with, if any.
///
/// With a color selected, the view index addresses that variant's images and
/// a missing view index picks the variant's first image with a url. Without a
/// color, the view index addresses the product-level views.
pub fn interactive_candidate(
    product: &ProductSnapshot,
    selection: Selection,
) -> Option<ImageCandidate<'_>> {
    match (selection.color_index, selection.view_index) {
        (Some(ci), view_index) => {
            let variant = product.color_variants.get(ci)?;
            let image = match view_index {
                Some(vi) => variant.images.get(vi)?,
                None => variant.images.iter().find(|i| has_url(i))?,
            };
            Some(image_candidate(
                SourceKind::InteractiveSelection,
                image,
                Some(variant),
            ))
        }
        (None, Some(vi)) => product
            .views
            .get(vi)
            .map(|v| image_candidate(SourceKind::InteractiveSelection, v, None)),
        (None, None) => None,
    }
}

/// Owned storage for urls derived from payloads, borrowed by candidates.
#[derive(Clone, Debug, Default)]
pub struct InlineUrls<'a> {
    /// Inline design payload normalized to a `data:` url.
    pub design: Option<Cow<'a, str>>,
}

impl<'a> InlineUrls<'a> {
    /// Normalize the inline payloads on `product`.
    pub fn for_product(product: &'a ProductSnapshot) -> Self {
        Self {
            design: product.design_inline.as_deref().and_then(inline_payload_url),
        }
    }
}

/// Turn an inline design payload into something a renderer can load.
///
/// `data:` urls and anything that already looks like a url pass through; a
/// bare base64 body is wrapped as PNG. Blank payloads are absent.
pub fn inline_payload_url(payload: &str) -> Option<Cow<'_, str>> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("data:") || trimmed.contains("://") || trimmed.starts_with('/') {
        return Some(Cow::Borrowed(trimmed));
    }
    Some(Cow::Owned(format!("{INLINE_PNG_PREFIX}{trimmed}")))
}

fn has_url(image: &ProductImage) -> bool {
    image.url.as_deref().is_some_and(|u| !u.is_empty())
}

fn image_candidate<'a>(
    kind: SourceKind,
    image: &'a ProductImage,
    variant: Option<&'a ColorVariant>,
) -> ImageCandidate<'a> {
    ImageCandidate {
        kind,
        url: image.url.as_deref(),
        color_variant_id: variant.map(|c| c.id),
        view_label: Some(image.view_label.as_str()).filter(|l| !l.is_empty()),
        delimitations: &image.delimitations,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/candidates.rs"]
mod tests;
