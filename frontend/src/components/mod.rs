//! UI Components for the Betafolio application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File selection, validation and submission lifecycle
//! - [`ResultsSection`] - Beta summary and holdings table

mod footer;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
