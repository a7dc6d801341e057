use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `GET /foods/search`. Only the fields nutrifacts reads are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

impl SearchResponse {
    pub fn into_first(self) -> Option<FoodItem> {
        self.foods.into_iter().next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_category: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<RawNutrient>,
}

/// One measured nutrient on a food. `value` is `None` when the upstream omits it or sends null.
///
/// An id that is missing or not a whole number reads as `None` so one odd entry
/// cannot spoil the rest of the food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNutrient {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub nutrient_id: Option<u32>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl RawNutrient {
    pub fn new(nutrient_id: u32, value: f64) -> Self {
        Self {
            nutrient_id: Some(nutrient_id),
            value: Some(value),
        }
    }

    pub fn missing(nutrient_id: u32) -> Self {
        Self {
            nutrient_id: Some(nutrient_id),
            value: None,
        }
    }

    pub fn unidentified(value: f64) -> Self {
        Self {
            nutrient_id: None,
            value: Some(value),
        }
    }
}

// Accepts 1003, 1003.0 and "1003"
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(id.and_then(|id| u32::try_from(id).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_without_foods_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"totalHits": 0}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn test_food_item_tolerates_missing_optional_fields() {
        let item: FoodItem = serde_json::from_str(r#"{"description": "Water"}"#).unwrap();
        assert_eq!(item.description, "Water");
        assert!(item.food_category.is_none());
        assert!(item.food_nutrients.is_empty());
    }

    #[test]
    fn test_raw_nutrient_null_and_absent_values() {
        let entries: Vec<RawNutrient> = serde_json::from_str(
            r#"[{"nutrientId": 1003, "value": null}, {"nutrientId": 1004}, {"nutrientId": 1005, "value": 2.5, "unitName": "G"}]"#,
        )
        .unwrap();

        assert_eq!(entries[0], RawNutrient::missing(1003));
        assert_eq!(entries[1], RawNutrient::missing(1004));
        assert_eq!(entries[2], RawNutrient::new(1005, 2.5));
    }

    #[test]
    fn test_raw_nutrient_odd_ids() {
        let entries: Vec<RawNutrient> = serde_json::from_str(
            r#"[{"value": 1.0}, {"nutrientId": null, "value": 2.0}, {"nutrientId": 1003.0, "value": 3.0},
                {"nutrientId": "1004", "value": 4.0}, {"nutrientId": 10.5, "value": 5.0},
                {"nutrientId": -1, "value": 6.0}, {"nutrientId": {"id": 1}, "value": 7.0}]"#,
        )
        .unwrap();

        assert_eq!(entries[0], RawNutrient::unidentified(1.0));
        assert_eq!(entries[1], RawNutrient::unidentified(2.0));
        assert_eq!(entries[2], RawNutrient::new(1003, 3.0));
        assert_eq!(entries[3], RawNutrient::new(1004, 4.0));
        assert_eq!(entries[4], RawNutrient::unidentified(5.0));
        assert_eq!(entries[5], RawNutrient::unidentified(6.0));
        assert_eq!(entries[6], RawNutrient::unidentified(7.0));
    }

    #[test]
    fn test_first_match_wins() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"foods": [{"description": "Almonds", "foodCategory": "Nut and Seed Products"}, {"description": "Almond butter"}]}"#,
        )
        .unwrap();

        let first = response.into_first().unwrap();
        assert_eq!(first.description, "Almonds");
        assert_eq!(first.food_category.as_deref(), Some("Nut and Seed Products"));
    }
}
