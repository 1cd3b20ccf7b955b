//! FraudScan - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading credit-card transaction CSVs to
//! the fraud-detection service. The client validates the selection and
//! gates the native form submission; the server does the analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (branding)                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── AlertStack (transient notices)                          │
//! │  ├── Hero (title, description)                               │
//! │  └── UploadSection (drop zone, status panel, submit gate)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProcessingOverlay (while a submission leaves the page)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FileMeta, Alert, ValidationError)
//! - [`gate`] - Pure validation and submission gating
//! - [`components`] - UI components (Header, Upload, Alerts, etc.)
//! - [`utils`] - Small pure helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod gate;
pub mod types;
pub mod utils;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Alert, AlertLevel, FileMeta, ValidationError};

// Components
pub use components::*;

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

    log::info!("🦀 FraudScan - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
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
    let (alerts, set_alerts) = create_signal(Vec::<Alert>::new());
    let (is_processing, set_is_processing) = create_signal(false);

    view! {
        <Header/>

        <div class="container">
            <AlertStack alerts=alerts set_alerts=set_alerts/>

            <Hero/>

            <UploadSection
                set_alerts=set_alerts
                is_processing=is_processing
                set_is_processing=set_is_processing
            />
        </div>

        <ProcessingOverlay is_processing=is_processing/>

        <Footer/>
    }
}
