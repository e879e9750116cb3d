//! Corpus-level drivers.

use crate::collapse::NamespaceCollapser;
use crate::extractor::{extract_triples, index_answers, ExtractorConfig};
use crate::prefixes::{PrefixSnapshot, PrefixTable};
use rayon::prelude::*;
use sparql_triples_model::QaRecord;
use std::borrow::Cow;

/// Fills [`QaRecord::formated_query`] with the collapsed raw query for all records that do not
/// have one yet. Returns the number of updated records.
pub fn normalize_all(records: &mut [QaRecord], collapser: &NamespaceCollapser) -> usize {
    let mut updated = 0;
    for record in records.iter_mut() {
        if record.formated_query.as_deref().is_some_and(|text| !text.is_empty()) {
            continue;
        }
        let Some(query) = record.query.as_deref() else {
            continue;
        };
        let collapsed = match collapser.collapse(query) {
            Cow::Borrowed(query) => query.to_owned(),
            Cow::Owned(collapsed) => collapsed,
        };
        record.formated_query = Some(collapsed);
        updated += 1;
    }
    tracing::info!(updated, records = records.len(), "Collapsed queries");
    updated
}

/// Processes `records` in parallel and returns the global prefixes of the batch.
///
/// A sequential pre-pass collects the prefix declarations of all records into a
/// [`PrefixSnapshot`]. Each record then only sees the global prefixes declared by itself or by
/// an earlier record, so the results are the same as with
/// [`TripleExtractor::process_all`](crate::TripleExtractor::process_all).
pub fn process_parallel(records: &mut [QaRecord], config: &ExtractorConfig) -> PrefixSnapshot {
    let locals = records
        .iter()
        .map(|record| PrefixTable::from_query(record.query_text()))
        .collect::<Vec<_>>();
    let snapshot = PrefixSnapshot::build(&locals);
    tracing::debug!(global_prefixes = snapshot.len(), "Built prefix snapshot");

    records
        .par_iter_mut()
        .zip(locals.par_iter())
        .enumerate()
        .for_each(|(index, (record, local))| {
            let triples = extract_triples(record.query_text(), local, &snapshot.at(index), config);
            record.answers_value = Some(index_answers(&record.answers));
            record.triples = Some(triples);
        });

    tracing::info!(
        records = records.len(),
        global_prefixes = snapshot.len(),
        "Extracted triples in parallel"
    );
    snapshot
}
