//! Custom assertion macros

/// Assert that a `TestResponse` has the given status and a JSON error body
/// carrying `message` under the `error` key.
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = $response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        pretty_assertions::assert_eq!(body, serde_json::json!({ "error": $message }));
    }};
}

/// Assert that a JSON object has no key named `key`
#[macro_export]
macro_rules! assert_no_key {
    ($value:expr, $key:expr) => {
        assert!(
            $value.get($key).is_none(),
            "Expected no '{}' key in {}",
            $key,
            $value
        );
    };
}
