// Query -> upstream search -> nutrition facts

use crate::facts::NutritionFacts;
use nutrifacts_client::{FetchError, FoodDataClient, FoodItem};
use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Please provide a food item to search")]
    MissingQuery,

    #[error("No nutrition data found for \"{query}\".")]
    NotFound { query: String },

    #[error("Upstream lookup failed: {0}")]
    Upstream(#[from] FetchError),
}

/// Anything that can answer "best match for this food name".
pub trait FoodSource {
    fn search_first(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<FoodItem>, FetchError>> + Send;
}

impl FoodSource for FoodDataClient {
    async fn search_first(&self, query: &str) -> Result<Option<FoodItem>, FetchError> {
        FoodDataClient::search_first(self, query).await
    }
}

/// Look up a single food. The query is forwarded untouched; only an empty one is refused,
/// so `"   "` still reaches the source and comes back as not found.
pub async fn lookup_food<S: FoodSource>(
    source: &S,
    query: &str,
) -> Result<NutritionFacts, LookupError> {
    if query.is_empty() {
        return Err(LookupError::MissingQuery);
    }

    let food = source
        .search_first(query)
        .await?
        .ok_or_else(|| LookupError::NotFound {
            query: query.to_string(),
        })?;

    debug!(
        "Assembling facts for {:?} from {} nutrient entries",
        food.description,
        food.food_nutrients.len()
    );
    Ok(NutritionFacts::from_food(food))
}
