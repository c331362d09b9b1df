/// Finder Core — name classification, scanning, and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
///
/// # Modules
///
/// - [`classify`] — Fixed character tables and the pure name classifier.
/// - [`model`] — Owned scan-result types (counters and report rows).
/// - [`scan`] — Single-threaded recursive tree walker and aggregator.
/// - [`report`] — CSV report emitter and summary-table renderer.
pub mod classify;
pub mod model;
pub mod report;
pub mod scan;

pub use classify::{classify, Classification};
pub use model::{ReportRow, ScanReport, ScanStats, StatBucket};
pub use report::{render_summary, write_csv, ReportError};
pub use scan::{scan_path, ScanError};
