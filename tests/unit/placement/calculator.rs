use super::*;
use crate::foundation::core::ZoneRect;

fn zone(x: f64, y: f64, w: f64, h: f64) -> MappedZone {
    MappedZone {
        delimitation_id: 1,
        name: None,
        rect: ZoneRect::new(x, y, w, h),
        rotation_degrees: 0.0,
    }
}

fn config(mode: PositioningMode) -> PlacementConfig {
    PlacementConfig {
        positioning_mode: mode,
        ..PlacementConfig::default()
    }
}

#[test]
fn center_mode_centers_design_in_zone() {
    let p = compute_placement(
        &zone(100.0, 100.0, 200.0, 200.0),
        DesignSize::new(50.0, 50.0),
        &config(PositioningMode::Center),
    )
    .unwrap();
    assert_eq!(
        p,
        PlacementResult {
            offset_x: 175.0,
            offset_y: 175.0,
            rendered_width: 50.0,
            rendered_height: 50.0,
            rotation_degrees: 0.0,
        }
    );
}

#[test]
fn scale_is_uniform_and_keeps_center() {
    let cfg = PlacementConfig {
        scale: 2.0,
        ..PlacementConfig::default()
    };
    let p = compute_placement(&zone(0.0, 0.0, 400.0, 200.0), DesignSize::new(30.0, 20.0), &cfg)
        .unwrap();
    assert_eq!((p.rendered_width, p.rendered_height), (60.0, 40.0));
    assert_eq!(p.center(), Point::new(200.0, 100.0));
}

#[test]
fn top_left_mode_centers_design_on_zone_corner() {
    let p = compute_placement(
        &zone(100.0, 60.0, 200.0, 200.0),
        DesignSize::new(40.0, 20.0),
        &config(PositioningMode::TopLeft),
    )
    .unwrap();
    assert_eq!((p.offset_x, p.offset_y), (80.0, 50.0));
}

#[test]
fn custom_mode_offsets_from_center() {
    let cfg = PlacementConfig {
        positioning_mode: PositioningMode::Custom,
        manual_offset_x: 10.0,
        manual_offset_y: -20.0,
        ..PlacementConfig::default()
    };
    let p = compute_placement(&zone(0.0, 0.0, 100.0, 100.0), DesignSize::new(20.0, 20.0), &cfg)
        .unwrap();
    assert_eq!((p.offset_x, p.offset_y), (50.0, 20.0));
}

#[test]
fn manual_offsets_ignored_outside_custom_mode() {
    let cfg = PlacementConfig {
        manual_offset_x: 999.0,
        manual_offset_y: 999.0,
        ..PlacementConfig::default()
    };
    let p = compute_placement(&zone(0.0, 0.0, 100.0, 100.0), DesignSize::new(20.0, 20.0), &cfg)
        .unwrap();
    assert_eq!((p.offset_x, p.offset_y), (40.0, 40.0));
}

#[test]
fn rotation_defaults_to_zero_even_on_rotated_zone() {
    let mut z = zone(0.0, 0.0, 100.0, 100.0);
    z.rotation_degrees = 20.0;

    let p = compute_placement(&z, DesignSize::new(10.0, 10.0), &PlacementConfig::default())
        .unwrap();
    assert_eq!(p.rotation_degrees, 0.0);

    let cfg = PlacementConfig {
        rotation_degrees_override: Some(-30.0),
        ..PlacementConfig::default()
    };
    let p = compute_placement(&z, DesignSize::new(10.0, 10.0), &cfg).unwrap();
    assert_eq!(p.rotation_degrees, -30.0);
}

#[test]
fn zone_rotation_applies_only_when_inherited() {
    let mut z = zone(0.0, 0.0, 100.0, 100.0);
    z.rotation_degrees = 15.0;

    let inherit = PlacementConfig {
        inherit_zone_rotation: true,
        ..PlacementConfig::default()
    };
    let p = compute_placement(&z, DesignSize::new(10.0, 10.0), &inherit).unwrap();
    assert_eq!(p.rotation_degrees, 15.0);

    let both = PlacementConfig {
        rotation_degrees_override: Some(5.0),
        ..inherit
    };
    let p = compute_placement(&z, DesignSize::new(10.0, 10.0), &both).unwrap();
    assert_eq!(p.rotation_degrees, 5.0);

    let cfg = PlacementConfig::from_json(r#"{"inheritZoneRotation": true}"#).unwrap();
    assert!(cfg.inherit_zone_rotation);
}

#[test]
fn invalid_design_size_is_rejected() {
    for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 10.0), (f64::NAN, 10.0)] {
        let design = DesignSize {
            design_id: Some(8),
            intrinsic_width: w,
            intrinsic_height: h,
        };
        assert!(matches!(
            compute_placement(&zone(0.0, 0.0, 10.0, 10.0), design, &PlacementConfig::default()),
            Err(MockupError::InvalidDesignAsset {
                design_id: Some(8),
                ..
            })
        ));
    }
}

#[test]
fn invalid_scale_is_a_validation_error() {
    for scale in [0.0, -1.0, f64::INFINITY] {
        let cfg = PlacementConfig {
            scale,
            ..PlacementConfig::default()
        };
        assert!(matches!(
            compute_placement(&zone(0.0, 0.0, 10.0, 10.0), DesignSize::new(5.0, 5.0), &cfg),
            Err(MockupError::Validation(_))
        ));
    }
}

#[test]
fn oversized_design_bleeds_without_clipping() {
    let z = zone(100.0, 100.0, 50.0, 50.0);
    let p = compute_placement(&z, DesignSize::new(200.0, 100.0), &PlacementConfig::default())
        .unwrap();
    assert_eq!((p.rendered_width, p.rendered_height), (200.0, 100.0));
    assert_eq!((p.offset_x, p.offset_y), (25.0, 75.0));
    assert!(p.overflows(&z));
}

#[test]
fn rotation_can_push_a_fitting_design_out_of_its_zone() {
    let z = zone(0.0, 0.0, 100.0, 100.0);
    let design = DesignSize::new(90.0, 90.0);
    let flat = compute_placement(&z, design, &PlacementConfig::default()).unwrap();
    assert!(!flat.overflows(&z));

    let cfg = PlacementConfig {
        rotation_degrees_override: Some(45.0),
        ..PlacementConfig::default()
    };
    let tilted = compute_placement(&z, design, &cfg).unwrap();
    assert!(tilted.overflows(&z));
}

#[test]
fn affine_maps_local_box_onto_offset_box() {
    let p = PlacementResult {
        offset_x: 175.0,
        offset_y: 175.0,
        rendered_width: 50.0,
        rendered_height: 50.0,
        rotation_degrees: 0.0,
    };
    let bbox = p.bounding_box();
    assert!((bbox.x0 - 175.0).abs() < 1e-9 && (bbox.y0 - 175.0).abs() < 1e-9);
    assert!((bbox.x1 - 225.0).abs() < 1e-9 && (bbox.y1 - 225.0).abs() < 1e-9);
}

#[test]
fn quarter_turn_swaps_bounding_box_extent() {
    let p = PlacementResult {
        offset_x: 0.0,
        offset_y: 0.0,
        rendered_width: 40.0,
        rendered_height: 20.0,
        rotation_degrees: 90.0,
    };
    let bbox = p.bounding_box();
    assert!((bbox.width() - 20.0).abs() < 1e-9);
    assert!((bbox.height() - 40.0).abs() < 1e-9);
    let c = p.to_affine() * Point::new(20.0, 10.0);
    assert!((c.x - 20.0).abs() < 1e-9 && (c.y - 10.0).abs() < 1e-9);
}

#[test]
fn config_defaults_from_json() {
    let cfg = PlacementConfig::from_json("{}").unwrap();
    assert_eq!(cfg, PlacementConfig::default());

    let cfg = PlacementConfig::from_json(
        r#"{"positioningMode": "TOP_LEFT", "scale": 0.5, "rotationDegreesOverride": 10}"#,
    )
    .unwrap();
    assert_eq!(cfg.positioning_mode, PositioningMode::TopLeft);
    assert_eq!(cfg.scale, 0.5);
    assert_eq!(cfg.rotation_degrees_override, Some(10.0));
}

#[test]
fn config_from_json_validates() {
    assert!(matches!(
        PlacementConfig::from_json(r#"{"scale": 0}"#),
        Err(MockupError::Validation(_))
    ));
    assert!(matches!(
        PlacementConfig::from_json(r#"{"positioningMode": "MIDDLE"}"#),
        Err(MockupError::Serde(_))
    ));
}
