// Tests for health benefit rules

use nutrifacts_core::benefits::{describe_benefits, matching_benefits, BENEFIT_RULES};
use nutrifacts_core::nutrient::{Nutrient, NutrientProfile};

fn profile(values: &[(Nutrient, f64)]) -> NutrientProfile {
    values.iter().copied().collect()
}

#[test]
fn test_single_rule_fires() {
    let p = profile(&[
        (Nutrient::Protein, 20.0),
        (Nutrient::Fiber, 1.0),
        (Nutrient::VitaminC, 0.0),
    ]);

    assert_eq!(
        describe_benefits(&p, "Almonds"),
        "High in protein for muscle health."
    );
}

#[test]
fn test_no_rules_uses_food_name() {
    assert_eq!(
        describe_benefits(&NutrientProfile::new(), "Water"),
        "Water provides essential nutrients for overall health."
    );
}

#[test]
fn test_fallback_keeps_name_verbatim() {
    assert_eq!(
        describe_benefits(&NutrientProfile::new(), "APPLES, raw, with skin"),
        "APPLES, raw, with skin provides essential nutrients for overall health."
    );
}

#[test]
fn test_all_rules_in_fixed_order() {
    let p = profile(&[
        (Nutrient::Iron, 3.0),
        (Nutrient::Calcium, 101.0),
        (Nutrient::Potassium, 201.0),
        (Nutrient::VitaminC, 11.0),
        (Nutrient::Fiber, 4.0),
        (Nutrient::Protein, 16.0),
    ]);

    assert_eq!(
        describe_benefits(&p, "Kale"),
        "High in protein for muscle health. \
         Good source of fiber for digestive health. \
         Rich in vitamin C for immune support. \
         Contains potassium for heart health. \
         Good source of calcium for bone health. \
         Contains iron for blood health."
    );
}

#[test]
fn test_thresholds_are_strict() {
    let p = profile(&[
        (Nutrient::Protein, 15.0),
        (Nutrient::Fiber, 3.0),
        (Nutrient::VitaminC, 10.0),
        (Nutrient::Potassium, 200.0),
        (Nutrient::Calcium, 100.0),
        (Nutrient::Iron, 2.0),
    ]);

    assert!(matching_benefits(&p).is_empty());
}

#[test]
fn test_missing_nutrient_never_fires() {
    let p = profile(&[(Nutrient::Fiber, 3.5)]);

    assert_eq!(
        matching_benefits(&p),
        vec!["Good source of fiber for digestive health"]
    );
    for rule in BENEFIT_RULES.iter().filter(|r| r.nutrient != Nutrient::Fiber) {
        assert!(!rule.applies_to(&p));
    }
}

#[test]
fn test_two_rules_joined() {
    let p = profile(&[(Nutrient::Potassium, 358.0), (Nutrient::Iron, 2.01)]);

    assert_eq!(
        describe_benefits(&p, "Banana"),
        "Contains potassium for heart health. Contains iron for blood health."
    );
}
