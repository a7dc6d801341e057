// Response assembly: the record returned to callers for one food

use crate::benefits::describe_benefits;
use crate::nutrient::{Nutrient, NutrientProfile, extract_nutrients};
use nutrifacts_client::FoodItem;
use serde::{Deserialize, Serialize};

/// Vitamins and minerals listed on a fact card, in display order.
pub const MICRONUTRIENT_DISPLAY_ORDER: [Nutrient; 16] = [
    Nutrient::VitaminC,
    Nutrient::VitaminK,
    Nutrient::VitaminE,
    Nutrient::VitaminD,
    Nutrient::VitaminB12,
    Nutrient::Thiamin,
    Nutrient::Riboflavin,
    Nutrient::Folate,
    Nutrient::Potassium,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Magnesium,
    Nutrient::Phosphorus,
    Nutrient::Sodium,
    Nutrient::Copper,
    Nutrient::Manganese,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub vitamins: Vec<String>,
    pub benefits: String,
}

impl NutritionFacts {
    pub fn assemble(name: String, category: Option<String>, profile: &NutrientProfile) -> Self {
        let benefits = describe_benefits(profile, &name);
        Self {
            category,
            calories: profile.get_or_zero(Nutrient::Calories),
            protein: profile.get_or_zero(Nutrient::Protein),
            carbs: profile.get_or_zero(Nutrient::Carbs),
            fat: profile.get_or_zero(Nutrient::Fat),
            fiber: profile.get_or_zero(Nutrient::Fiber),
            vitamins: micronutrient_lines(profile),
            benefits,
            name,
        }
    }

    pub fn from_food(food: FoodItem) -> Self {
        let profile = extract_nutrients(&food.food_nutrients);
        Self::assemble(food.description, food.food_category, &profile)
    }
}

/// `"<Label>: <value><unit>"` for each displayed micronutrient.
///
/// A reported value of exactly zero is left out, same as a missing one.
pub fn micronutrient_lines(profile: &NutrientProfile) -> Vec<String> {
    MICRONUTRIENT_DISPLAY_ORDER
        .iter()
        .filter_map(|&nutrient| {
            profile
                .get(nutrient)
                .filter(|value| *value != 0.0 && !value.is_nan())
                .map(|value| format!("{}: {}{}", nutrient.label(), value, nutrient.unit()))
        })
        .collect()
}
