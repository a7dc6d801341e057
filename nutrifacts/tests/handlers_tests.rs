use nutrifacts::handlers::*;
use nutrifacts::{first_query_value, ApiError};
use nutrifacts_client::FetchError;
use nutrifacts_core::LookupError;
use axum::http::StatusCode;
use url::Url;

#[test]
fn test_build_client_requires_api_key() {
    let err = build_client(None, None).unwrap_err();
    assert!(err.to_string().contains("USDA_API_KEY"));

    let blank = "   ".to_string();
    assert!(build_client(Some(&blank), None).is_err());
}

#[test]
fn test_build_client_default_url() {
    let key = "abc".to_string();
    let client = build_client(Some(&key), None).unwrap();
    assert_eq!(client.base_url().as_str(), "https://api.nal.usda.gov/fdc/v1");
}

#[test]
fn test_build_client_custom_url() {
    let key = "abc".to_string();
    let url = Url::parse("http://localhost:8080/fdc/v1").unwrap();
    let client = build_client(Some(&key), Some(&url)).unwrap();
    assert_eq!(client.base_url(), &url);
}

#[test]
fn test_built_client_debug_hides_key() {
    let key = "hunter2".to_string();
    let client = build_client(Some(&key), None).unwrap();
    assert!(!format!("{:?}", client).contains("hunter2"));
}

#[test]
fn test_first_query_value() {
    let pairs = vec![
        ("food".to_string(), "x".to_string()),
        ("query".to_string(), "apple".to_string()),
        ("query".to_string(), "pear".to_string()),
    ];
    assert_eq!(first_query_value(&pairs), Some("apple"));
    assert_eq!(first_query_value(&pairs[..1]), None);
}

#[test]
fn test_food_query_joins_words() {
    let words = vec!["peanut".to_string(), " butter ".to_string(), "".to_string()];
    assert_eq!(food_query(&words), "peanut butter");
}

#[test]
fn test_food_query_empty() {
    let words: Vec<String> = Vec::new();
    assert_eq!(food_query(&words), "");
}

#[test]
fn test_api_error_status_codes() {
    assert_eq!(
        ApiError(LookupError::MissingQuery).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError(LookupError::NotFound {
            query: "x".to_string()
        })
        .status(),
        StatusCode::NOT_FOUND
    );

    let upstream = ApiError(LookupError::Upstream(FetchError::Decode("bad".to_string())));
    assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // cause never reaches the caller
    assert!(!upstream.message().contains("bad"));
}
