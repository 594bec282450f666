//! End-to-end normalization of a raw table.

use roster_map::{ColumnMapping, apply_mapping, ensure_required, normalize_columns};
use roster_model::{CanonicalField, RawTable, RosterError, SynonymTable};
use tracing::{debug, info_span, warn};

use crate::processor::{ProcessOutcome, process_rows};

/// Everything a caller needs to print or summarize a run.
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    pub mapping: ColumnMapping,
    pub outcome: ProcessOutcome,
}

/// Maps headers, checks required fields, then processes every row.
///
/// Nothing is returned on failure; there are no partial results.
pub fn normalize_table(
    raw: &RawTable,
    required: &[CanonicalField],
    synonyms: &SynonymTable,
) -> Result<NormalizeResult, RosterError> {
    let schema_span = info_span!("normalize_schema", columns = raw.headers.len());
    let mapping = schema_span.in_scope(|| {
        let mapping = normalize_columns(&raw.headers, synonyms);
        debug!(
            mapped = mapping.assignments().len(),
            unrecognized = mapping.unrecognized().len(),
            identity = mapping.is_identity(),
            "column mapping built"
        );
        ensure_required(&mapping, required)
            .inspect_err(|err| {
                if let RosterError::MissingColumns { fields } = err {
                    for field in fields {
                        warn!(
                            field = %field,
                            accepted = %synonyms.spellings(*field).join(", "),
                            "required column not found"
                        );
                    }
                }
            })
            .map(|()| mapping)
    })?;

    let rows_span = info_span!("process_rows", rows = raw.height());
    let outcome = rows_span.in_scope(|| {
        let rows = apply_mapping(raw, &mapping);
        process_rows(&rows)
    })?;

    Ok(NormalizeResult { mapping, outcome })
}
