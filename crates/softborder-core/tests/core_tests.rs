//! Tests for softborder-core: config normalization, bounds, naming, errors

use softborder_core::*;
use std::io::Write;

// ===========================================================================
// Effect normalization
// ===========================================================================

fn effect_from(json: &str) -> Effect {
    let raw: RawEffect = serde_json::from_str(json).unwrap();
    raw.normalize()
}

#[test]
fn effect_level_is_decremented() {
    let effect = effect_from(r#"{"id":"minecraft:slowness","level":2}"#);
    assert_eq!(effect.amplifier, 1);
}

#[test]
fn effect_level_absent_defaults_to_zero() {
    let effect = effect_from(r#"{"id":"minecraft:slowness"}"#);
    assert_eq!(effect.amplifier, 0);
}

#[test]
fn effect_level_one_is_base_amplifier() {
    let effect = effect_from(r#"{"id":"minecraft:nausea","level":1}"#);
    assert_eq!(effect.amplifier, 0);
}

#[test]
fn effect_type_absent_is_constant() {
    let effect = effect_from(r#"{"id":"minecraft:slowness"}"#);
    assert_eq!(effect.kind, EffectKind::Constant);
}

#[test]
fn effect_type_null_is_constant() {
    let effect = effect_from(r#"{"id":"minecraft:slowness","type":null}"#);
    assert_eq!(effect.kind, EffectKind::Constant);
}

#[test]
fn effect_type_constant_keyword() {
    let effect = effect_from(r#"{"id":"minecraft:slowness","type":"constant"}"#);
    assert_eq!(effect.kind, EffectKind::Constant);
    assert!(!effect.kind.is_periodic());
}

#[test]
fn effect_type_periodic_object() {
    let effect = effect_from(r#"{"id":"minecraft:darkness","level":1,"type":{"period":4,"pulse":3}}"#);
    assert_eq!(effect.kind, EffectKind::Periodic { period: 4, pulse: 3 });
    assert!(effect.kind.is_periodic());
    assert_eq!(effect.id, "minecraft:darkness");
}

#[test]
fn effect_type_unknown_keyword_is_schema_error() {
    let result = serde_json::from_str::<RawEffect>(r#"{"id":"x","type":"sometimes"}"#);
    assert!(result.is_err());
}

// ===========================================================================
// Bounds
// ===========================================================================

#[test]
fn bounds_from_optional_pair() {
    assert_eq!(Bounds::new(None, None), None);
    assert_eq!(Bounds::new(None, Some(20)), Some(Bounds::Below { max: 20 }));
    assert_eq!(Bounds::new(Some(5), None), Some(Bounds::Above { min: 5 }));
    assert_eq!(
        Bounds::new(Some(5), Some(20)),
        Some(Bounds::Between { min: 5, max: 20 })
    );
}

#[test]
fn bounds_accessors() {
    let b = Bounds::Between { min: 5, max: 20 };
    assert_eq!(b.min(), Some(5));
    assert_eq!(b.max(), Some(20));
    assert_eq!(Bounds::Below { max: 7 }.min(), None);
    assert_eq!(Bounds::Above { min: 7 }.max(), None);
}

// ===========================================================================
// Config normalization
// ===========================================================================

#[test]
fn gain_steps_are_sorted_by_distance() {
    let config = Config::from_json_str(
        r#"{"insanityGain":[{"distance":300,"amount":3},{"distance":100,"amount":1},{"distance":200,"amount":2}]}"#,
    )
    .unwrap();
    let distances: Vec<i64> = config.gain_steps.iter().map(|s| s.distance).collect();
    assert_eq!(distances, vec![100, 200, 300]);
    let amounts: Vec<i64> = config.gain_steps.iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![1, 2, 3]);
}

#[test]
fn missing_top_level_lists_are_empty() {
    let config = Config::from_json_str("{}").unwrap();
    assert!(config.gain_steps.is_empty());
    assert!(config.distance_zones.is_empty());
    assert!(config.insanity_zones.is_empty());
}

#[test]
fn distance_zone_bounds_and_defaults() {
    let config = Config::from_json_str(
        r#"{"distanceZones":[{"minDistance":5,"maxDistance":null,"effect":{"id":"X","level":2,"type":"constant"}}]}"#,
    )
    .unwrap();
    let zone = &config.distance_zones[0];
    assert_eq!(zone.kind, ZoneKind::Distance);
    assert_eq!(zone.bounds, Bounds::Above { min: 5 });
    assert_eq!(zone.effect.amplifier, 1);
    assert_eq!(zone.name(), "dz_zone_5_inf");
}

#[test]
fn insanity_zone_absent_min_key() {
    let config = Config::from_json_str(
        r#"{"insanityZones":[{"maxInsanity":20,"effect":{"id":"minecraft:darkness","type":{"period":4,"pulse":3}}}]}"#,
    )
    .unwrap();
    let zone = &config.insanity_zones[0];
    assert_eq!(zone.kind, ZoneKind::Insanity);
    assert_eq!(zone.bounds, Bounds::Below { max: 20 });
    assert_eq!(zone.name(), "iz_zone_0_20");
}

#[test]
fn unbounded_zone_is_rejected_with_position() {
    let err = Config::from_json_str(
        r#"{"distanceZones":[
            {"minDistance":1,"effect":{"id":"a"}},
            {"minDistance":null,"maxDistance":null,"effect":{"id":"b"}}
        ]}"#,
    )
    .unwrap_err();
    match err {
        Error::UnboundedZone { kind, index } => {
            assert_eq!(kind, ZoneKind::Distance);
            assert_eq!(index, 1);
        }
        other => panic!("Expected UnboundedZone, got {other:?}"),
    }
}

#[test]
fn unbounded_insanity_zone_message() {
    let err = Config::from_json_str(r#"{"insanityZones":[{"effect":{"id":"a"}}]}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "insanity zone #0 sets neither a minimum nor a maximum bound"
    );
}

#[test]
fn malformed_json_surfaces_parser_error() {
    let err = Config::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn effect_zones_lists_insanity_before_distance() {
    let config = Config::from_json_str(
        r#"{
            "distanceZones":[{"maxDistance":10,"effect":{"id":"d"}}],
            "insanityZones":[{"minInsanity":50,"effect":{"id":"i"}}]
        }"#,
    )
    .unwrap();
    let ids: Vec<&str> = config.effect_zones().map(|z| z.effect.id.as_str()).collect();
    assert_eq!(ids, vec!["i", "d"]);
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"insanityGain":[{{"distance":10,"amount":1}}]}}"#).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.gain_steps, vec![InsanityGainStep { distance: 10, amount: 1 }]);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
    assert!(err.to_string().contains("nope.json"));
}

// ===========================================================================
// Names
// ===========================================================================

#[test]
fn gain_step_names() {
    assert_eq!(insanity_gain_name(0), "ig_zone_0");
    assert_eq!(insanity_gain_name(250), "ig_zone_250");
}

#[test]
fn distance_zone_names_substitute_missing_bounds() {
    assert_eq!(distance_zone_name(Some(5), None), "dz_zone_5_inf");
    assert_eq!(distance_zone_name(None, Some(100)), "dz_zone_0_100");
    assert_eq!(distance_zone_name(Some(5), Some(100)), "dz_zone_5_100");
}

#[test]
fn insanity_zone_names_substitute_missing_bounds() {
    assert_eq!(insanity_zone_name(None, Some(20)), "iz_zone_0_20");
    assert_eq!(insanity_zone_name(Some(20), None), "iz_zone_20_inf");
}

#[test]
fn explicit_zero_min_matches_missing_min() {
    // Identifier convention only: a zone from 0 and a zone with no min collide.
    assert_eq!(distance_zone_name(Some(0), Some(10)), distance_zone_name(None, Some(10)));
}

#[test]
fn names_are_pure() {
    for _ in 0..3 {
        assert_eq!(distance_zone_name(Some(1), Some(2)), "dz_zone_1_2");
        assert_eq!(insanity_zone_name(None, None), "iz_zone_0_inf");
    }
}

#[test]
fn zone_name_uses_kind_prefix() {
    let b = Bounds::Between { min: 3, max: 9 };
    assert_eq!(zone_name(ZoneKind::Distance, &b), "dz_zone_3_9");
    assert_eq!(zone_name(ZoneKind::Insanity, &b), "iz_zone_3_9");
}

#[test]
fn resource_references() {
    assert_eq!(predicate_ref("ig_zone_0"), "softborder:ig_zone_0");
    assert_eq!(function_ref("iz_zone_0_20"), "softborder:private/gen/iz_zone_0_20");
}

#[test]
fn zone_kind_display() {
    assert_eq!(ZoneKind::Distance.to_string(), "distance");
    assert_eq!(ZoneKind::Insanity.to_string(), "insanity");
}

// ===========================================================================
// Numeric edge cases
// ===========================================================================

#[test]
fn effect_level_minimum_saturates() {
    let config = Config::from_json_str(
        r#"{"distanceZones":[{"maxDistance":5,"effect":{"id":"x","level":-2147483648}}]}"#,
    )
    .unwrap();
    assert_eq!(config.distance_zones[0].effect.amplifier, i32::MIN);
}

#[test]
fn whole_number_floats_are_accepted() {
    let config = Config::from_json_str(
        r#"{
            "insanityGain":[{"distance":10.0,"amount":2.0}],
            "distanceZones":[{"minDistance":5.0,"maxDistance":null,"effect":{"id":"d"}}],
            "insanityZones":[{"maxInsanity":20.0,"effect":{"id":"i"}}]
        }"#,
    )
    .unwrap();
    assert_eq!(config.gain_steps, vec![InsanityGainStep { distance: 10, amount: 2 }]);
    assert_eq!(config.distance_zones[0].name(), "dz_zone_5_inf");
    assert_eq!(config.insanity_zones[0].name(), "iz_zone_0_20");
}

#[test]
fn fractional_distance_is_schema_error() {
    let err = Config::from_json_str(r#"{"insanityGain":[{"distance":10.5,"amount":1}]}"#).unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
}
