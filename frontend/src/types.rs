//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Metadata of the user's selection
//! - **Alert Types** - Transient notice banners
//! - **Error Types** - Validation failures

use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// Metadata snapshot of a user-selected file.
///
/// Built from the browser's `File` object at the component boundary,
/// so validation logic never handles live DOM objects.
#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in mebibytes, for display.
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

// =============================================================================
// Alert Types
// =============================================================================

/// Severity of a transient alert banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    /// Informational message
    Info,
    /// Success/confirmation message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Danger,
}

impl AlertLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Info => "alert-info",
            AlertLevel::Success => "alert-success",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Danger => "alert-danger",
        }
    }

    /// Get Font Awesome icon class for display.
    pub fn icon(&self) -> &'static str {
        match self {
            AlertLevel::Info => "fa-info-circle",
            AlertLevel::Success => "fa-check-circle",
            AlertLevel::Warning => "fa-exclamation-circle",
            AlertLevel::Danger => "fa-exclamation-triangle",
        }
    }
}

/// A transient notice shown at the top of the page content.
///
/// Self-dismisses after [`crate::ALERT_DISMISS_MS`], or earlier via its
/// close button. The `id` keys the banner in the DOM and scopes dismissal.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// Unique id, assigned from a monotonic counter
    pub id: u64,
    /// Message text
    pub message: String,
    /// Severity level
    pub level: AlertLevel,
}

// =============================================================================
// Error Types
// =============================================================================

/// Why a selected file was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// File is larger than the upload limit.
    SizeExceeded,
    /// File name does not carry an accepted extension.
    UnsupportedExtension,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::SizeExceeded => write!(f, "File size exceeds 16MB limit"),
            ValidationError::UnsupportedExtension => write!(f, "Only CSV files are allowed"),
        }
    }
}

impl std::error::Error for ValidationError {}
