//! Betafolio - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading portfolio holdings files and
//! displaying the beta calculated by the backend service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (files, date, submission lifecycle)      │
//! │  └── ResultsSection (summary + holdings table)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Phase, CalculationResult, ResultView, etc.)
//! - [`components`] - UI components (Hero, Upload, Results, Footer)
//! - [`services`] - Backend communication (calculation API)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Status
    Phase,
    // API
    CalculationResult, DetailRow, ErrorBody,
    // View models
    ResultView, TableView,
    // Errors
    ApiError, ApiResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Betafolio - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (phase, set_phase) = create_signal(Phase::Idle);
    let (busy, set_busy) = create_signal(false);
    let (result, set_result) = create_signal(None::<ResultView>);

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                phase=phase
                set_phase=set_phase
                busy=busy
                set_busy=set_busy
                set_result=set_result
            />

            // Results appear once the first calculation succeeds
            <ResultsSection result=result/>
        </div>

        <Footer/>
    }
}
