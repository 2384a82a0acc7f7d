//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Status Types** - submission lifecycle state
//! - **API Types** - calculation service payloads
//! - **View Types** - pure render models for the results UI
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{FALLBACK_ERROR_NOTICE, UNREACHABLE_NOTICE};

// =============================================================================
// Status Types
// =============================================================================

/// Submission lifecycle phase.
///
/// One submission moves Uploading → Calculating → (Success | Failed);
/// Idle is the state between submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No submission in flight
    Idle,
    /// Request body being assembled and sent
    Uploading,
    /// Request dispatched, waiting for the service
    Calculating,
    /// Result received and rendered
    Success,
    /// Transport or service failure
    Failed,
}

impl Phase {
    /// Status text shown next to the spinner.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "",
            Phase::Uploading => "Uploading files...",
            Phase::Calculating => "Calculating beta...",
            Phase::Success => "Done",
            Phase::Failed => "Failed",
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// One entry of the `details` sequence: column name to scalar value.
///
/// Key iteration order is the JSON document order (`serde_json` is built
/// with `preserve_order`), which the table schema derivation relies on.
pub type DetailRow = serde_json::Map<String, serde_json::Value>;

/// Successful response from the calculation service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Weighted beta of the whole portfolio
    pub portfolio_beta: f64,
    /// Total portfolio value
    pub total_value: f64,
    /// Per-holding breakdown; shape varies with the uploaded files
    #[serde(default)]
    pub details: Vec<DetailRow>,
}

/// Failure response body from the calculation service.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message, when the service provides one
    #[serde(default)]
    pub detail: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// Pure render model for one calculation result.
///
/// Built once per response; the results component derives all DOM from the
/// current model, so re-rendering the same payload is idempotent.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// Summary line with beta and total value
    pub summary: String,
    /// Holdings table
    pub table: TableView,
}

/// Table portion of the render model.
#[derive(Clone, Debug, PartialEq)]
pub enum TableView {
    /// No detail rows: a single explanatory row, no header
    Placeholder,
    /// Header row plus one data row per detail record
    Grid {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl ResultView {
    /// Map a service result to its render model.
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            summary: format!(
                "Portfolio Beta: {} | Total Value: ₹{}",
                result.portfolio_beta, result.total_value
            ),
            table: TableView::from_rows(&result.details),
        }
    }
}

impl TableView {
    /// Derive the table from the detail rows.
    ///
    /// The first row fixes the column set; later rows with different keys
    /// render blank cells for missing keys and drop extra keys silently.
    pub fn from_rows(details: &[DetailRow]) -> Self {
        let Some(first) = details.first() else {
            return TableView::Placeholder;
        };
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = details
            .iter()
            .map(|row| headers.iter().map(|h| cell_text(row.get(h))).collect())
            .collect();
        TableView::Grid { headers, rows }
    }
}

/// Cell rendering: strings verbatim, null/missing as empty, the rest via
/// their JSON form.
fn cell_text(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend API errors.
///
/// One variant per branch of the submission outcome handling.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Transport failure; no response was received.
    Network(String),
    /// The service answered with a non-success status.
    Server { status: u16, detail: Option<String> },
    /// Success status with a body that is not a calculation result.
    Decode(String),
}

impl ApiError {
    /// User-facing notice for this error.
    pub fn notice(&self) -> String {
        match self {
            ApiError::Network(_) => UNREACHABLE_NOTICE.to_string(),
            ApiError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Server { detail: None, .. } => FALLBACK_ERROR_NOTICE.to_string(),
            ApiError::Decode(_) => FALLBACK_ERROR_NOTICE.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, detail } => write!(
                f,
                "Server error ({}): {}",
                status,
                detail.as_deref().unwrap_or("no detail")
            ),
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type alias for frontend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn row(json: &str) -> DetailRow {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "portfolio_beta": 1.23,
            "total_value": 50000,
            "details": [
                {"symbol": "X", "weight": 0.5},
                {"symbol": "Y", "weight": 0.5}
            ]
        }"#;

        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.portfolio_beta, 1.23);
        assert_eq!(result.total_value, 50000.0);
        assert_eq!(result.details.len(), 2);
        // Key order must follow the document, not alphabetical sorting
        let keys: Vec<String> = result.details[0].keys().cloned().collect();
        assert_eq!(keys, ["symbol", "weight"]);
    }

    #[test]
    fn test_details_default_to_empty() {
        let json = r#"{"portfolio_beta": 0.9, "total_value": 1000}"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();
        assert!(result.details.is_empty());
    }

    #[test]
    fn test_summary_shows_values_verbatim() {
        let result = CalculationResult {
            portfolio_beta: 1.23,
            total_value: 50000.0,
            details: vec![],
        };
        let view = ResultView::from_result(&result);
        assert_eq!(view.summary, "Portfolio Beta: 1.23 | Total Value: ₹50000");
    }

    #[test]
    fn test_grid_shape_follows_first_row() {
        let details = vec![
            row(r#"{"symbol": "X", "weight": 0.5, "beta": 1.1}"#),
            row(r#"{"symbol": "Y", "weight": null}"#),
        ];
        let TableView::Grid { headers, rows } = TableView::from_rows(&details) else {
            panic!("expected a grid");
        };
        assert_eq!(headers, ["symbol", "weight", "beta"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["X", "0.5", "1.1"]);
        // null and missing values both render as empty cells
        assert_eq!(rows[1], ["Y", "", ""]);
    }

    #[test]
    fn test_extra_keys_in_later_rows_are_dropped() {
        let details = vec![
            row(r#"{"symbol": "X"}"#),
            row(r#"{"symbol": "Y", "isin": "INE000000001"}"#),
        ];
        let TableView::Grid { headers, rows } = TableView::from_rows(&details) else {
            panic!("expected a grid");
        };
        assert_eq!(headers, ["symbol"]);
        assert_eq!(rows[1], ["Y"]);
    }

    #[test]
    fn test_empty_details_render_placeholder() {
        assert_eq!(TableView::from_rows(&[]), TableView::Placeholder);
    }

    #[test]
    fn test_render_model_is_idempotent() {
        let result = CalculationResult {
            portfolio_beta: 1.05,
            total_value: 250000.0,
            details: vec![row(r#"{"symbol": "X", "qty": 10}"#)],
        };
        assert_eq!(
            ResultView::from_result(&result),
            ResultView::from_result(&result)
        );
    }

    #[test]
    fn test_error_notices() {
        let err = ApiError::Server {
            status: 400,
            detail: Some("invalid file format".to_string()),
        };
        assert_eq!(err.notice(), "invalid file format");

        let err = ApiError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(err.notice(), FALLBACK_ERROR_NOTICE);

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.notice(), UNREACHABLE_NOTICE);
    }
}
