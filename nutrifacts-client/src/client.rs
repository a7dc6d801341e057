use crate::error::{FetchError, Result};
use crate::food::{FoodItem, SearchResponse};
use reqwest::Client;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
pub const DEFAULT_DATA_TYPES: &[&str] = &["Foundation", "SR Legacy"];

const SEARCH_PAGE_SIZE: &str = "1";

pub struct FoodDataClient {
    client: Client,
    api_key: String,
    base_url: Url,
    data_types: Vec<String>,
}

impl fmt::Debug for FoodDataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodDataClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("data_types", &self.data_types)
            .finish()
    }
}

impl FoodDataClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nutrifacts/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", DEFAULT_BASE_URL, e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
            data_types: DEFAULT_DATA_TYPES.iter().map(|t| t.to_string()).collect(),
        })
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_data_types<I, S>(mut self, data_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_types = data_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Search FoodData Central and return the best match, if any.
    pub async fn search_first(&self, query: &str) -> Result<Option<FoodItem>> {
        let endpoint = self.search_endpoint()?;
        let data_types = self.data_types.join(",");
        debug!("Searching {} for {:?}", endpoint, query);

        let response = self
            .client
            .get(endpoint)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", SEARCH_PAGE_SIZE),
                ("dataType", data_types.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("FoodData Central search failed with {}", status);
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let first = search.into_first();
        match &first {
            Some(food) => info!("Matched {:?} to {:?}", query, food.description),
            None => info!("No FoodData Central match for {:?}", query),
        }
        Ok(first)
    }

    fn search_endpoint(&self) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join("foods/search")
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }
}
