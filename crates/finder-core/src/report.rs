/// Report output — CSV emission and the stdout summary table.
///
/// The CSV column order is `FILE, IS_DIR, INVALID, WARNING`, which differs
/// from the in-memory field order of [`ReportRow`]; the writer reorders on
/// serialization. Existing report consumers parse this exact layout.
use crate::model::{ReportRow, ScanStats, StatBucket};
use std::path::Path;

/// CSV header record, written first whenever a report file is produced.
pub const CSV_HEADER: [&str; 4] = ["FILE", "IS_DIR", "INVALID", "WARNING"];

/// Summary table column headers.
const SUMMARY_COLUMNS: [&str; 4] = ["Type", "Invalid", "Warnings", "Total"];

/// Spaces added to each summary column beyond its header width.
const SUMMARY_PADDING: usize = 5;

/// Error creating or writing the CSV report file.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot write csv report: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot write csv report: {0}")]
    Io(#[from] std::io::Error),
}

/// Write flagged rows to a CSV file at `path`.
///
/// When `rows` is empty there is nothing to report and no file is touched —
/// a pre-existing report from an earlier run is left alone. Otherwise any
/// file at `path` is removed first and a fresh one written, so reruns
/// overwrite rather than append. Booleans are rendered as the literal
/// strings `true`/`false`.
pub fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    if rows.is_empty() {
        return Ok(());
    }

    // Remove-then-create mirrors the overwrite contract; a missing file is
    // the common case and not an error.
    let _ = std::fs::remove_file(path);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record([
            row.path.as_str(),
            bool_field(row.is_dir),
            bool_field(row.invalid),
            bool_field(row.warning),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render the fixed 3-row summary table: header, files, directories.
///
/// Columns are right-aligned to header width plus a fixed padding, so the
/// output is deterministic regardless of count magnitudes.
pub fn render_summary(stats: &ScanStats) -> String {
    let mut out = String::new();
    push_summary_row(
        &mut out,
        SUMMARY_COLUMNS[0],
        SUMMARY_COLUMNS[1],
        SUMMARY_COLUMNS[2],
        SUMMARY_COLUMNS[3],
    );
    push_bucket_row(&mut out, "Files", &stats.files);
    push_bucket_row(&mut out, "Dirs", &stats.dirs);
    out
}

fn push_bucket_row(out: &mut String, label: &str, bucket: &StatBucket) {
    push_summary_row(
        out,
        label,
        &bucket.invalids.to_string(),
        &bucket.warnings.to_string(),
        &bucket.total.to_string(),
    );
}

fn push_summary_row(out: &mut String, c0: &str, c1: &str, c2: &str, c3: &str) {
    use std::fmt::Write;

    let widths = SUMMARY_COLUMNS.map(|h| h.len() + SUMMARY_PADDING);
    // String's fmt::Write never fails.
    let _ = writeln!(
        out,
        "{c0:>w0$}{c1:>w1$}{c2:>w2$}{c3:>w3$}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScanStats;

    /// The summary layout is part of the tool's observable output; pin it
    /// byte-for-byte.
    #[test]
    fn summary_renders_fixed_layout() {
        let mut stats = ScanStats::default();
        stats.files.total = 3;
        stats.files.invalids = 1;
        stats.files.warnings = 1;
        stats.dirs.total = 2;

        let expected = "     Type     Invalid     Warnings     Total\n\
                        \u{20}   Files           1            1         3\n\
                        \u{20}    Dirs           0            0         2\n";
        assert_eq!(render_summary(&stats), expected);
    }

    #[test]
    fn summary_right_aligns_wide_counts() {
        let mut stats = ScanStats::default();
        stats.files.total = 1_234_567;

        let rendered = render_summary(&stats);
        let files_line = rendered.lines().nth(1).unwrap();
        assert!(files_line.ends_with("1234567"));
    }
}
