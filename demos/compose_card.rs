use printzone::{
    CompositeRequest, DesignAsset, PlacementConfig, ProductSnapshot, RenderedSize, compose,
    compose_batch,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let product = ProductSnapshot::from_json(include_str!("../tests/data/product.json"))?;
    let design: DesignAsset = serde_json::from_str(include_str!("../tests/data/design.json"))?;
    let config = PlacementConfig::from_json(r#"{"positioningMode": "CENTER", "scale": 1.5}"#)?;

    let card = CompositeRequest::new(&product, RenderedSize::new(1000.0, 1000.0))
        .with_design(&design, config);
    let composite = compose(&card)?;
    println!("{}", serde_json::to_string_pretty(&composite)?);
    if let Some(overlay) = composite.overlay {
        println!("affine: {:?}", overlay.to_affine().as_coeffs());
    }

    // A grid of thumbnails at different display sizes.
    let grid: Vec<_> = [200.0, 320.0, 480.0, 640.0]
        .into_iter()
        .map(|px| {
            CompositeRequest::new(&product, RenderedSize::new(px, px)).with_design(&design, config)
        })
        .collect();
    for (req, out) in grid.iter().zip(compose_batch(&grid)) {
        let overlay = out?.overlay;
        println!("{:>4}px -> {:?}", req.rendered.width, overlay);
    }

    Ok(())
}
