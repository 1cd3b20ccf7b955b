//! Upload gating: file validation and submission control.
//!
//! Everything in this module is pure. The browser-facing components build
//! a [`FileMeta`] from the live `File` object, project it through
//! [`FileStatus::for_file`] for display, and route submit events through
//! [`UploadGate::decide_submit`]. No DOM access happens here, which keeps
//! the rules testable on the native target.

use crate::{AlertLevel, FileMeta, ValidationError, ALLOWED_EXTENSIONS, MAX_UPLOAD_SIZE};

/// Check a selection against the upload rules.
///
/// The size rule is checked before the extension rule, so an oversized
/// file reports [`ValidationError::SizeExceeded`] even when its extension
/// is also wrong.
pub fn validate_file(file: &FileMeta) -> Result<(), ValidationError> {
    if file.size_bytes > MAX_UPLOAD_SIZE {
        return Err(ValidationError::SizeExceeded);
    }

    let name = file.name.to_lowercase();
    if !ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        return Err(ValidationError::UnsupportedExtension);
    }

    Ok(())
}

/// Display model for the file status panel.
///
/// A pure projection of a selection: the renderer applies it verbatim and
/// the submit button mirrors `submit_enabled`, so the control state can
/// never drift from the latest validation result.
#[derive(Clone, Debug, PartialEq)]
pub struct FileStatus {
    /// Name of the selected file
    pub file_name: String,
    /// Size rendered in MiB with two decimals, e.g. "2.00 MB"
    pub size_display: String,
    /// Panel severity (success or danger)
    pub level: AlertLevel,
    /// Rejection reason, when invalid
    pub detail: Option<String>,
    /// Whether the submit control is enabled for this selection
    pub submit_enabled: bool,
}

impl FileStatus {
    /// Build the status panel model for a selection.
    pub fn for_file(file: &FileMeta) -> Self {
        let size_display = format!("{:.2} MB", file.size_mib());
        match validate_file(file) {
            Ok(()) => Self {
                file_name: file.name.clone(),
                size_display,
                level: AlertLevel::Success,
                detail: None,
                submit_enabled: true,
            },
            Err(e) => Self {
                file_name: file.name.clone(),
                size_display,
                level: AlertLevel::Danger,
                detail: Some(e.to_string()),
                submit_enabled: false,
            },
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    /// Let the native form submission go through.
    Proceed,
    /// A submission already left this page; swallow the event.
    AlreadyInProgress,
    /// Nothing selected yet.
    NoFileSelected,
    /// The selection failed re-validation.
    Rejected(ValidationError),
}

/// Gatekeeper for the upload form.
///
/// One instance lives for the whole page. `in_progress` flips to true on
/// the first accepted submit and is never cleared; the navigation caused
/// by the native submission (or a manual reload) is the only way back.
#[derive(Debug, Default)]
pub struct UploadGate {
    in_progress: bool,
}

impl UploadGate {
    pub fn new() -> Self {
        Self { in_progress: false }
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Decide whether a submit event may reach the server.
    ///
    /// Re-validates the selection instead of trusting whatever the UI
    /// currently shows. Only a [`SubmitDecision::Proceed`] outcome
    /// mutates the gate.
    pub fn decide_submit(&mut self, selection: Option<&FileMeta>) -> SubmitDecision {
        if self.in_progress {
            return SubmitDecision::AlreadyInProgress;
        }

        let Some(file) = selection else {
            return SubmitDecision::NoFileSelected;
        };

        match validate_file(file) {
            Err(e) => SubmitDecision::Rejected(e),
            Ok(()) => {
                self.in_progress = true;
                SubmitDecision::Proceed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mib(n: u64) -> u64 {
        n * 1024 * 1024
    }

    #[test]
    fn test_valid_csv_within_limit() {
        let file = FileMeta::new("report.csv", mib(2));
        assert_eq!(validate_file(&file), Ok(()));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        for name in ["DATA.CSV", "data.Csv", "mixed.cSv"] {
            let file = FileMeta::new(name, mib(1));
            assert_eq!(validate_file(&file), Ok(()), "{name} should pass");
        }
    }

    #[test]
    fn test_non_csv_rejected() {
        let file = FileMeta::new("data.txt", mib(1));
        assert_eq!(
            validate_file(&file),
            Err(ValidationError::UnsupportedExtension)
        );
    }

    #[test]
    fn test_oversized_rejected() {
        let file = FileMeta::new("huge.csv", mib(20));
        assert_eq!(validate_file(&file), Err(ValidationError::SizeExceeded));
    }

    #[test]
    fn test_size_check_wins_over_extension() {
        // Both rules fail; the size rule is reported.
        let file = FileMeta::new("huge.txt", mib(20));
        assert_eq!(validate_file(&file), Err(ValidationError::SizeExceeded));
    }

    #[test]
    fn test_exactly_at_limit_passes() {
        // The rule is strictly greater-than.
        let file = FileMeta::new("edge.csv", MAX_UPLOAD_SIZE);
        assert_eq!(validate_file(&file), Ok(()));
        let file = FileMeta::new("edge.csv", MAX_UPLOAD_SIZE + 1);
        assert_eq!(validate_file(&file), Err(ValidationError::SizeExceeded));
    }

    #[test]
    fn test_status_for_valid_file() {
        let file = FileMeta::new("report.csv", mib(2));
        let status = FileStatus::for_file(&file);
        assert_eq!(status.file_name, "report.csv");
        assert_eq!(status.size_display, "2.00 MB");
        assert_eq!(status.level, AlertLevel::Success);
        assert_eq!(status.detail, None);
        assert!(status.submit_enabled);
    }

    #[test]
    fn test_status_for_wrong_extension() {
        let file = FileMeta::new("data.txt", mib(1));
        let status = FileStatus::for_file(&file);
        assert_eq!(status.size_display, "1.00 MB");
        assert_eq!(status.level, AlertLevel::Danger);
        assert_eq!(status.detail.as_deref(), Some("Only CSV files are allowed"));
        assert!(!status.submit_enabled);
    }

    #[test]
    fn test_status_for_oversized_file() {
        let file = FileMeta::new("huge.csv", mib(20));
        let status = FileStatus::for_file(&file);
        assert_eq!(
            status.detail.as_deref(),
            Some("File size exceeds 16MB limit")
        );
        assert!(!status.submit_enabled);
    }

    #[test]
    fn test_status_is_idempotent() {
        let file = FileMeta::new("report.csv", mib(2));
        assert_eq!(FileStatus::for_file(&file), FileStatus::for_file(&file));
    }

    #[test]
    fn test_fractional_size_display() {
        let file = FileMeta::new("report.csv", mib(1) + 512 * 1024);
        let status = FileStatus::for_file(&file);
        assert_eq!(status.size_display, "1.50 MB");
    }

    #[test]
    fn test_gate_proceeds_once() {
        let mut gate = UploadGate::new();
        let file = FileMeta::new("report.csv", mib(2));

        assert!(!gate.in_progress());
        assert_eq!(gate.decide_submit(Some(&file)), SubmitDecision::Proceed);
        assert!(gate.in_progress());

        // Every later attempt is swallowed, valid selection or not.
        assert_eq!(
            gate.decide_submit(Some(&file)),
            SubmitDecision::AlreadyInProgress
        );
        assert_eq!(gate.decide_submit(None), SubmitDecision::AlreadyInProgress);
    }

    #[test]
    fn test_cleared_selection_blocks_submit() {
        // Picking a valid file and then cancelling the picker leaves no
        // selection; the submit must fall back to the no-file path instead
        // of proceeding on the stale pick.
        let mut gate = UploadGate::new();
        let file = FileMeta::new("report.csv", mib(2));
        assert_eq!(validate_file(&file), Ok(()));

        assert_eq!(gate.decide_submit(None), SubmitDecision::NoFileSelected);
        assert!(!gate.in_progress());

        // Re-selecting afterwards still works.
        assert_eq!(gate.decide_submit(Some(&file)), SubmitDecision::Proceed);
    }

    #[test]
    fn test_gate_requires_a_selection() {
        let mut gate = UploadGate::new();
        assert_eq!(gate.decide_submit(None), SubmitDecision::NoFileSelected);
        assert!(!gate.in_progress());
    }

    #[test]
    fn test_gate_rejection_leaves_gate_open() {
        let mut gate = UploadGate::new();
        let bad = FileMeta::new("data.txt", mib(1));

        assert_eq!(
            gate.decide_submit(Some(&bad)),
            SubmitDecision::Rejected(ValidationError::UnsupportedExtension)
        );
        assert!(!gate.in_progress());

        // A corrected selection can still go through.
        let good = FileMeta::new("data.csv", mib(1));
        assert_eq!(gate.decide_submit(Some(&good)), SubmitDecision::Proceed);
    }
}
