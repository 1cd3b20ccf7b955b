//! Application configuration.
//!
//! Centralized configuration for the FraudScan frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Application name, used for the document title.
pub const APP_NAME: &str = "FraudScan";

/// Path the upload form posts to.
///
/// The server-side analysis endpoint. The form submission is native,
/// this frontend never calls it directly.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Maximum file size for upload (in bytes).
///
/// 16 MB limit, matching the server's request size cap.
pub const MAX_UPLOAD_SIZE: u64 = 16 * 1024 * 1024;

/// Accepted file extensions, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".csv"];

/// How long a transient alert stays on screen (in milliseconds).
pub const ALERT_DISMISS_MS: u32 = 5_000;
