use crate::base;

/// Outcome of [`ingest`]: the accepted records and how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    pub working_set: base::Workingset,
    /// Records not counted toward totals, or marked as transfers.
    pub ineligible: usize,
    /// Eligible records dropped because a field could not be coerced.
    pub malformed: usize,
}

/// Builds a working set from raw records, keeping their order. Ineligible
/// records are skipped without being coerced. Malformed eligible records are
/// dropped with a warning.
pub fn ingest<I>(raws: I, schema: base::Schema<'_>) -> Ingested
where
    I: IntoIterator<Item = base::RawRecord>,
{
    let mut records = Vec::new();
    let mut ineligible = 0;
    let mut malformed = 0;
    for (i, raw) in raws.into_iter().enumerate() {
        if !schema.is_eligible(&raw) {
            tracing::debug!(record = i + 1, "skipping ineligible record");
            ineligible += 1;
            continue;
        }
        match schema.to_record(&raw) {
            Ok(r) => records.push(r),
            Err(e) => {
                tracing::warn!(record = i + 1, "dropping malformed record: {}", e);
                malformed += 1;
            }
        }
    }
    tracing::info!(
        accepted = records.len(),
        ineligible,
        malformed,
        "ingested records"
    );
    Ingested {
        working_set: records.into_iter().collect(),
        ineligible,
        malformed,
    }
}
