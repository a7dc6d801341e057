pub mod benefits;
pub mod card;
pub mod facts;
pub mod lookup;
pub mod nutrient;

pub use benefits::{describe_benefits, BENEFIT_RULES};
pub use card::{render_card, CardFormat};
pub use facts::{NutritionFacts, MICRONUTRIENT_DISPLAY_ORDER};
pub use lookup::{lookup_food, FoodSource, LookupError};
pub use nutrient::{extract_nutrients, Nutrient, NutrientProfile};
