// Nutrient code table and extraction from FoodData Central entries

use nutrifacts_client::RawNutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Every nutrient nutrifacts recognises. Anything else FoodData Central reports is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    VitaminC,
    VitaminK,
    VitaminE,
    VitaminD,
    VitaminB12,
    Thiamin,
    Riboflavin,
    Folate,
    Potassium,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Sodium,
    Copper,
    Manganese,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kcal,
    Gram,
    Milligram,
    Microgram,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Unit::Kcal => "kcal",
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Microgram => "mcg",
        };
        f.write_str(symbol)
    }
}

impl Nutrient {
    pub const ALL: [Nutrient; 21] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
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

    /// Map a FoodData Central nutrient id to its canonical nutrient.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            // Energy (Atwater General Factors)
            2047 => Some(Nutrient::Calories),
            1003 => Some(Nutrient::Protein),
            // Carbohydrate, by difference
            1005 => Some(Nutrient::Carbs),
            // Total lipid (fat)
            1004 => Some(Nutrient::Fat),
            // Fiber, total dietary
            1079 => Some(Nutrient::Fiber),
            // Vitamin C, total ascorbic acid
            1162 => Some(Nutrient::VitaminC),
            // Vitamin K (phylloquinone)
            1185 => Some(Nutrient::VitaminK),
            1109 => Some(Nutrient::VitaminE),
            1092 => Some(Nutrient::Potassium),
            1087 => Some(Nutrient::Calcium),
            1089 => Some(Nutrient::Iron),
            1090 => Some(Nutrient::Magnesium),
            1091 => Some(Nutrient::Phosphorus),
            1093 => Some(Nutrient::Sodium),
            1098 => Some(Nutrient::Copper),
            1101 => Some(Nutrient::Manganese),
            1165 => Some(Nutrient::Thiamin),
            1166 => Some(Nutrient::Riboflavin),
            // Folate, total
            1177 => Some(Nutrient::Folate),
            1178 => Some(Nutrient::VitaminB12),
            // Vitamin D (D2 + D3)
            1114 => Some(Nutrient::VitaminD),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Nutrient::Calories => 2047,
            Nutrient::Protein => 1003,
            Nutrient::Carbs => 1005,
            Nutrient::Fat => 1004,
            Nutrient::Fiber => 1079,
            Nutrient::VitaminC => 1162,
            Nutrient::VitaminK => 1185,
            Nutrient::VitaminE => 1109,
            Nutrient::Potassium => 1092,
            Nutrient::Calcium => 1087,
            Nutrient::Iron => 1089,
            Nutrient::Magnesium => 1090,
            Nutrient::Phosphorus => 1091,
            Nutrient::Sodium => 1093,
            Nutrient::Copper => 1098,
            Nutrient::Manganese => 1101,
            Nutrient::Thiamin => 1165,
            Nutrient::Riboflavin => 1166,
            Nutrient::Folate => 1177,
            Nutrient::VitaminB12 => 1178,
            Nutrient::VitaminD => 1114,
        }
    }

    /// Canonical short name, identical to the serialized key.
    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
            Nutrient::Fiber => "fiber",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::VitaminK => "vitaminK",
            Nutrient::VitaminE => "vitaminE",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::VitaminB12 => "vitaminB12",
            Nutrient::Thiamin => "thiamin",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Folate => "folate",
            Nutrient::Potassium => "potassium",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Sodium => "sodium",
            Nutrient::Copper => "copper",
            Nutrient::Manganese => "manganese",
        }
    }

    /// Human-readable label used on fact cards.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::Thiamin => "Thiamin",
            Nutrient::Riboflavin => "Riboflavin",
            Nutrient::Folate => "Folate",
            Nutrient::Potassium => "Potassium",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Sodium => "Sodium",
            Nutrient::Copper => "Copper",
            Nutrient::Manganese => "Manganese",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Nutrient::Calories => Unit::Kcal,
            Nutrient::Protein | Nutrient::Carbs | Nutrient::Fat | Nutrient::Fiber => Unit::Gram,
            Nutrient::VitaminK | Nutrient::VitaminD | Nutrient::VitaminB12 | Nutrient::Folate => {
                Unit::Microgram
            }
            _ => Unit::Milligram,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognised nutrients of one food, rounded to two decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientProfile {
    values: BTreeMap<Nutrient, f64>,
}

impl NutrientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values.get(&nutrient).copied()
    }

    /// Like `get`, but an absent nutrient reads as zero.
    pub fn get_or_zero(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }

    /// Store a value as-is. Extraction rounds before calling this.
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        self.values.insert(nutrient, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.values.iter().map(|(n, v)| (*n, *v))
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientProfile {
    fn from_iter<I: IntoIterator<Item = (Nutrient, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Keep recognised nutrients with a reported value. Later duplicates overwrite earlier ones.
pub fn extract_nutrients(entries: &[RawNutrient]) -> NutrientProfile {
    let mut profile = NutrientProfile::new();
    for entry in entries {
        let Some(nutrient) = entry.nutrient_id.and_then(Nutrient::from_code) else {
            continue;
        };
        if let Some(value) = entry.value {
            profile.set(nutrient, round_hundredths(value));
        }
    }
    profile
}
