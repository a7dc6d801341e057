// Canned health benefit sentences derived from nutrient thresholds

use crate::nutrient::{Nutrient, NutrientProfile};

#[derive(Debug, Clone, Copy)]
pub struct BenefitRule {
    pub nutrient: Nutrient,
    /// The rule fires when the value is strictly greater than this.
    pub threshold: f64,
    pub phrase: &'static str,
}

impl BenefitRule {
    /// A nutrient the food does not report never satisfies a rule.
    pub fn applies_to(&self, profile: &NutrientProfile) -> bool {
        profile
            .get(self.nutrient)
            .is_some_and(|value| value > self.threshold)
    }
}

/// Evaluated top to bottom; this order is the sentence order.
pub const BENEFIT_RULES: [BenefitRule; 6] = [
    BenefitRule {
        nutrient: Nutrient::Protein,
        threshold: 15.0,
        phrase: "High in protein for muscle health",
    },
    BenefitRule {
        nutrient: Nutrient::Fiber,
        threshold: 3.0,
        phrase: "Good source of fiber for digestive health",
    },
    BenefitRule {
        nutrient: Nutrient::VitaminC,
        threshold: 10.0,
        phrase: "Rich in vitamin C for immune support",
    },
    BenefitRule {
        nutrient: Nutrient::Potassium,
        threshold: 200.0,
        phrase: "Contains potassium for heart health",
    },
    BenefitRule {
        nutrient: Nutrient::Calcium,
        threshold: 100.0,
        phrase: "Good source of calcium for bone health",
    },
    BenefitRule {
        nutrient: Nutrient::Iron,
        threshold: 2.0,
        phrase: "Contains iron for blood health",
    },
];

pub fn matching_benefits(profile: &NutrientProfile) -> Vec<&'static str> {
    BENEFIT_RULES
        .iter()
        .filter(|rule| rule.applies_to(profile))
        .map(|rule| rule.phrase)
        .collect()
}

pub fn describe_benefits(profile: &NutrientProfile, food_name: &str) -> String {
    let phrases = matching_benefits(profile);
    if phrases.is_empty() {
        format!("{} provides essential nutrients for overall health.", food_name)
    } else {
        format!("{}.", phrases.join(". "))
    }
}
