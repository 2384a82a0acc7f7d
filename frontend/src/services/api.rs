//! HTTP client for the portfolio calculation service.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{BETA_ENDPOINT, UPLOAD_FIELD, VALUATION_DATE_PARAM};
use crate::types::{ApiError, ApiResult, CalculationResult, ErrorBody};

/// Build the calculation endpoint URL, appending the valuation date when
/// one is set.
pub fn request_url(base: &str, valuation_date: Option<&str>) -> String {
    let mut url = format!("{}{}", base, BETA_ENDPOINT);
    if let Some(date) = valuation_date.filter(|d| !d.is_empty()) {
        url.push_str(&format!("?{}={}", VALUATION_DATE_PARAM, date));
    }
    url
}

/// Submit the selected files to the calculation service.
///
/// One multipart part per file, all under the same contractual field name.
/// A non-success response is parsed for its optional `detail` message and
/// surfaced as [`ApiError::Server`]; transport failures never touch the body.
pub async fn calculate_beta(
    files: Vec<File>,
    valuation_date: Option<String>,
    backend_url: &str,
) -> ApiResult<CalculationResult> {
    let form_data =
        FormData::new().map_err(|e| ApiError::Network(format!("Failed to create FormData: {:?}", e)))?;

    for file in &files {
        form_data
            .append_with_blob(UPLOAD_FIELD, file)
            .map_err(|e| ApiError::Network(format!("Failed to append file: {:?}", e)))?;
    }

    let url = request_url(backend_url, valuation_date.as_deref());
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(ApiError::Server {
            status: response.status(),
            detail,
        });
    }

    response
        .json::<CalculationResult>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_without_date() {
        assert_eq!(
            request_url("http://localhost:8000", None),
            "http://localhost:8000/portfolio/beta"
        );
    }

    #[test]
    fn test_request_url_with_date() {
        assert_eq!(
            request_url("http://localhost:8000", Some("2024-01-01")),
            "http://localhost:8000/portfolio/beta?valuation_date=2024-01-01"
        );
    }

    #[test]
    fn test_request_url_ignores_empty_date() {
        assert_eq!(request_url("", Some("")), "/portfolio/beta");
    }

    #[test]
    fn test_error_body_deserialization() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "invalid file format"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("invalid file format"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }
}
