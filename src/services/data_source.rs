use std::path::{Path, PathBuf};

use tracing::debug;

use crate::services::records_json::LoadError;

const RESULT_PREFIXES: [&str; 2] = ["results_", "simulation_results_"];
const LATEST_ALIAS: &str = "results_latest.json";

/// Resolves where simulation results are read from.
///
/// A file path is returned as is. For a directory, the newest timestamped
/// results file is picked by name, since exported names embed a sortable
/// timestamp.
pub fn resolve_data_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, LoadError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let entries = std::fs::read_dir(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let latest = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|candidate| is_results_file(candidate))
        .max_by(|a, b| a.file_name().cmp(&b.file_name()))
        .ok_or_else(|| LoadError::NoResultsFile(path.to_path_buf()))?;

    debug!(path = %latest.display(), "resolved latest results file");
    Ok(latest)
}

fn is_results_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".json")
        && name != LATEST_ALIAS
        && RESULT_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
