/// Data model for scan results.
///
/// Everything here is plain owned data: the scanner builds a [`ScanReport`]
/// and returns it by value, so nothing needs shared mutation or locking.

/// Counters for one kind of filesystem entry (files or directories).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatBucket {
    /// Entries visited.
    pub total: u64,
    /// Entries whose name contains a character outside every table.
    pub invalids: u64,
    /// Entries whose name contains a warning-range character.
    pub warnings: u64,
}

/// Per-kind counters for a whole scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub files: StatBucket,
    pub dirs: StatBucket,
}

/// One flagged entry destined for the CSV report.
///
/// Only entries that are invalid, warned, or both become rows; clean entries
/// are counted in [`ScanStats`] and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Path relative to the scan root. Empty for the root itself.
    pub path: String,
    pub invalid: bool,
    pub warning: bool,
    pub is_dir: bool,
}

/// Complete result of a scan: aggregate counters plus the flagged rows.
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    pub stats: ScanStats,
    pub rows: Vec<ReportRow>,
}
