pub mod client;
pub mod error;
pub mod food;

pub use client::{FoodDataClient, DEFAULT_BASE_URL, DEFAULT_DATA_TYPES};
pub use error::FetchError;
pub use food::{FoodItem, RawNutrient, SearchResponse};
