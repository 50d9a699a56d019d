//! Saving and restoring features as JSON.

use honeycomb::{
    CellClip, ConfigurationError, FeatureState, HoneycombFeature, LatticeParameters, MeshKernel,
    TilingConfig,
};

#[test]
fn test_state_round_trips_through_json() {
    let mut feature = HoneycombFeature::new().with_config(TilingConfig {
        row_margin: 4.0,
        clip: CellClip::Contained,
    });
    feature.set_property("Length", 42.0).unwrap();
    feature.set_property("Thickness", 0.5).unwrap();

    let json = serde_json::to_string(&feature.state()).unwrap();
    let state: FeatureState = serde_json::from_str(&json).unwrap();
    let restored = HoneycombFeature::from_state(MeshKernel, state).unwrap();

    assert_eq!(restored.parameters(), feature.parameters());
    assert_eq!(restored.state(), feature.state());
    assert!(restored.is_touched());
    assert!(restored.shape().is_none());
}

#[test]
fn test_state_json_layout() {
    let json = serde_json::to_value(HoneycombFeature::new().state()).unwrap();
    assert_eq!(json["type"], "HoneycombSolid");
    assert_eq!(json["parameters"]["circumradius"], 5.0);
    assert_eq!(json["tiling"]["clip"], "overlap");
}

#[test]
fn test_partial_state_uses_defaults() {
    let state: FeatureState = serde_json::from_str(
        r#"{"type": "HoneycombSolid", "version": "0.0.1", "parameters": {"height": 4.0}}"#,
    )
    .unwrap();
    let feature = HoneycombFeature::from_state(MeshKernel, state).unwrap();

    assert_eq!(
        *feature.parameters(),
        LatticeParameters {
            height: 4.0,
            ..LatticeParameters::default()
        }
    );
    assert_eq!(feature.state().tiling, TilingConfig::default());
}

#[test]
fn test_restoring_other_feature_type_fails() {
    let state: FeatureState =
        serde_json::from_str(r#"{"type": "BoxSolid", "version": "1.0"}"#).unwrap();
    match HoneycombFeature::from_state(MeshKernel, state) {
        Err(ConfigurationError::StateMismatch { expected, found }) => {
            assert_eq!(expected, "HoneycombSolid");
            assert_eq!(found, "BoxSolid");
        }
        other => panic!("expected state mismatch, got {other:?}"),
    }
}

#[test]
fn test_restored_feature_recomputes() {
    let mut feature = HoneycombFeature::new();
    feature.set_parameters(LatticeParameters::new(24.0, 18.0, 1.5, 2.5, 0.8));
    let state = feature.state();

    let mut restored = HoneycombFeature::from_state(MeshKernel, state).unwrap();
    let a = feature.recompute().unwrap().volume();
    let b = restored.recompute().unwrap().volume();
    assert!((a - b).abs() < 1e-9);
}
