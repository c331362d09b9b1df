/// Directory walker and aggregator.
///
/// Walks the tree rooted at a given path with `jwalk` pinned to serial
/// traversal — one writer, no locks, results returned by value. Each visited
/// entry (the root included) has its base name classified; counters are
/// bumped per kind and flagged entries are collected as report rows.
///
/// Unreadable descendants are skipped, never fatal: a single access-denied
/// subdirectory must not abort aggregation of its siblings. Only a root that
/// cannot be stat'ed at all fails the scan.
use crate::classify::classify;
use crate::model::{ReportRow, ScanReport};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Error opening the scan root. Per-entry errors deeper in the tree are
/// swallowed and logged instead.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot read scan root {path}: {source}")]
    Root {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Scan the tree rooted at `root` and aggregate classification results.
///
/// Visitation order is filesystem-dependent; callers may rely on the final
/// counters and on row membership, not on row order.
pub fn scan_path(root: &Path) -> Result<ScanReport, ScanError> {
    // jwalk reports an unreadable root as just another entry error, which
    // the loop below would swallow. The root is contractually fatal, so it
    // is checked up front.
    std::fs::symlink_metadata(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut report = ScanReport::default();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        let classification = classify(&name);
        let is_dir = entry.file_type().is_dir();

        let bucket = if is_dir {
            &mut report.stats.dirs
        } else {
            &mut report.stats.files
        };
        bucket.total += 1;
        if !classification.is_valid {
            bucket.invalids += 1;
        }
        if classification.is_warning {
            bucket.warnings += 1;
        }

        if !classification.is_valid || classification.is_warning {
            let path = entry
                .path()
                .strip_prefix(root)
                .map(|rel| rel.to_string_lossy().into_owned())
                .unwrap_or_default();
            report.rows.push(ReportRow {
                path,
                invalid: !classification.is_valid,
                warning: classification.is_warning,
                is_dir,
            });
        }
    }

    Ok(report)
}
