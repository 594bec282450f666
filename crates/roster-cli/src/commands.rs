use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_ingest::read_table;
use roster_model::{CanonicalField, SynonymTable};
use roster_transform::{NormalizeResult, normalize_table};

/// Reads `path` and normalizes it against the standard synonym table.
pub fn run_file(path: &Path, required: &[CanonicalField]) -> Result<NormalizeResult> {
    let span = info_span!("run", path = %path.display());
    let _guard = span.enter();

    let raw = read_table(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        columns = raw.headers.len(),
        rows = raw.height(),
        "source file loaded"
    );
    let result = normalize_table(&raw, required, SynonymTable::standard())
        .context("normalize contacts")?;
    info!(
        accepted = result.outcome.table.len(),
        rejected = result.outcome.rejected.len(),
        "normalization complete"
    );
    Ok(result)
}

/// The one-line report printed to stderr when a run fails.
pub fn failure_message(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}
