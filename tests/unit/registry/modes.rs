use super::*;

use std::collections::HashSet;

#[test]
fn ids_are_unique_and_round_trip() {
    let mut seen = HashSet::new();
    for mode in CompositeMode::all() {
        assert!(seen.insert(mode.id()), "duplicate id {}", mode.id());
        assert_eq!(CompositeMode::from_id(mode.id()).unwrap(), mode);
    }
    assert_eq!(seen.len(), MODES.len());
}

#[test]
fn every_separable_mode_is_listed() {
    let listed: HashSet<CompositeMode> = CompositeMode::all().collect();
    for sep in [
        S::Add,
        S::LinearDodge,
        S::Modulo,
        S::Negation,
        S::PenumbraD,
        S::SuperLight,
        S::EasyBurn,
        S::NotConverse,
        S::HeatGlowFreezeReflectHybrid,
    ] {
        assert!(listed.contains(&CompositeMode::Separable(sep)), "{sep:?}");
    }
}

#[test]
fn every_hsx_pair_is_listed() {
    let listed: HashSet<CompositeMode> = CompositeMode::all().collect();
    let functions = [
        F::Hue,
        F::Color,
        F::Saturation,
        F::IncreaseSaturation,
        F::DecreaseSaturation,
        F::Lightness,
        F::IncreaseLightness,
        F::DecreaseLightness,
    ];
    for model in [M::Hsy, M::Hsv, M::Hsl, M::Hsi] {
        for func in functions {
            assert!(listed.contains(&CompositeMode::NonSeparable(func, model)));
        }
    }
}

#[test]
fn known_ids_resolve() {
    assert_eq!(CompositeMode::from_id("normal").unwrap(), CompositeMode::Over);
    assert_eq!(
        CompositeMode::from_id("linear light").unwrap(),
        CompositeMode::Separable(S::LinearLight)
    );
    assert_eq!(
        CompositeMode::from_id("inc_value").unwrap(),
        CompositeMode::NonSeparable(F::IncreaseLightness, M::Hsv)
    );
    assert_eq!("darker color".parse::<CompositeMode>().unwrap(), CompositeMode::DarkerColor);
    assert_eq!(CompositeMode::from_id("greater").unwrap(), CompositeMode::Greater);
    assert_eq!(CompositeMode::from_id("destination-in").unwrap(), CompositeMode::DestinationIn);
    assert_eq!(
        CompositeMode::from_id("destination-atop").unwrap(),
        CompositeMode::DestinationAtop
    );
    assert_eq!(CompositeMode::from_id("luminosity_sai").unwrap(), CompositeMode::LuminositySai);
}

#[test]
fn unknown_ids_are_errors() {
    for id in ["", "Normal", "dissolve", "destination_in", "Greater"] {
        let err = CompositeMode::from_id(id).unwrap_err();
        assert!(err.to_string().starts_with("unknown composite mode:"), "{err}");
    }
}

#[test]
fn categories_follow_mode_families() {
    assert_eq!(CompositeMode::Over.category(), ModeCategory::Mix);
    assert_eq!(CompositeMode::Separable(S::Xor).category(), ModeCategory::Binary);
    assert_eq!(CompositeMode::Separable(S::ColorBurn).category(), ModeCategory::Dark);
    assert_eq!(CompositeMode::LighterColor.category(), ModeCategory::Light);
    assert_eq!(
        CompositeMode::NonSeparable(F::Hue, M::Hsi).category(),
        ModeCategory::Hsi
    );
    assert_eq!(CompositeMode::TangentNormalmap.category(), ModeCategory::Misc);
    assert_eq!(CompositeMode::DestinationAtop.category(), ModeCategory::Misc);
    assert_eq!(CompositeMode::Greater.category(), ModeCategory::Mix);
    assert_eq!(CompositeMode::LuminositySai.category(), ModeCategory::Light);
}

#[test]
fn serializes_as_identifier() {
    let json = serde_json::to_string(&CompositeMode::Separable(S::HardMix)).unwrap();
    assert_eq!(json, "\"hard mix\"");
    let mode: CompositeMode = serde_json::from_str("\"soft_light_svg\"").unwrap();
    assert_eq!(mode, CompositeMode::Separable(S::SoftLightSvg));
    assert!(serde_json::from_str::<CompositeMode>("\"nope\"").is_err());
}

#[test]
fn rgb_requirement_matches_non_separable_family() {
    assert!(CompositeMode::DarkerColor.needs_rgb());
    assert!(CompositeMode::NonSeparable(F::Color, M::Hsl).needs_rgb());
    assert!(!CompositeMode::Separable(S::Multiply).needs_rgb());
    assert!(!CompositeMode::Erase.needs_rgb());
}
