//! Application configuration.
//!
//! Centralized configuration for the Betafolio frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The calculation service that computes the portfolio beta.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Calculation endpoint path.
///
/// Part of the service contract, together with [`UPLOAD_FIELD`] and
/// [`VALUATION_DATE_PARAM`].
pub const BETA_ENDPOINT: &str = "/portfolio/beta";

/// Multipart field name carrying the uploaded files.
pub const UPLOAD_FIELD: &str = "files";

/// Query parameter carrying the optional valuation date.
pub const VALUATION_DATE_PARAM: &str = "valuation_date";

/// Notice shown when the user submits without selecting a file.
pub const NO_FILE_NOTICE: &str = "Please upload a file";

/// Notice shown when the service cannot be reached at all.
pub const UNREACHABLE_NOTICE: &str = "Could not reach the calculation service";

/// Fallback notice for failure responses without a `detail` message.
pub const FALLBACK_ERROR_NOTICE: &str = "Calculation failed";

/// Placeholder row text for results without holdings detail.
pub const EMPTY_DETAILS_PLACEHOLDER: &str = "No holdings to display";
