//! UI Components for the FraudScan application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Top bar with branding
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file upload with drag & drop and submit gating
//! - [`AlertStack`] - Transient notice banners
//! - [`ProcessingOverlay`] - Blocking indicator while a submission leaves

mod alerts;
mod footer;
mod header;
mod hero;
mod overlay;
mod upload;

pub use alerts::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use overlay::*;
pub use upload::*;
