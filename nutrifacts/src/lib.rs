pub mod handlers;
pub mod server;

// Re-export commonly used handler functions for convenience
pub use handlers::{build_client, food_query, init_logging, print_banner};
pub use server::{first_query_value, router, serve, ApiError};

// Re-export the lookup pipeline from nutrifacts-core
pub use nutrifacts_core::{lookup_food, LookupError, NutritionFacts};
