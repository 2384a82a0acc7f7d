//! Backend communication.
//!
//! # Services
//!
//! - [`api`] - file submission to the portfolio calculation service

pub mod api;

pub use api::*;
