//! Contracts of the stages that consume extracted records.
//!
//! Entity linking, knowledge graph retrieval and triple ranking run outside of this workspace.
//! The traits below describe what these stages receive and return, and the helper functions
//! attach their results to [`QaRecord`]s.

use crate::{KgTriple, QaRecord, RankedTriple};
use std::collections::HashSet;

/// Finds the entities mentioned in a question.
pub trait EntityExtractor {
    /// Returns zero or more canonical entity identifiers (e.g. `Barack_Obama`).
    ///
    /// Implementations must not fail: errors are reported by returning an empty vector.
    fn extract_entities(&self, text: &str) -> Vec<String>;
}

/// Fetches the neighbourhood of an entity from a knowledge graph.
pub trait TripleFetcher {
    /// Returns triples in short namespace form, or a single [`KgTriple::skipped`] sentinel if
    /// the entity could not be fetched.
    fn fetch(&self, entity: &str) -> Vec<KgTriple>;
}

/// Orders candidate triples by their relevance to a question.
pub trait TripleRanker {
    fn rank(&self, question: &str, candidates: Vec<KgTriple>) -> Vec<RankedTriple>;
}

/// Stores the entities of each record's question in [`QaRecord::entities`].
pub fn annotate_entities<E: EntityExtractor + ?Sized>(records: &mut [QaRecord], extractor: &E) {
    for record in records {
        let question = record.question.as_deref().unwrap_or_default();
        record.entities = Some(extractor.extract_entities(question));
    }
}

/// Stores one list of fetched triples per entity in [`QaRecord::retrieved_triples`].
///
/// Records without entities get an empty list.
pub fn attach_retrieved_triples<F: TripleFetcher + ?Sized>(records: &mut [QaRecord], fetcher: &F) {
    for record in records {
        let retrieved = record
            .entities
            .iter()
            .flatten()
            .map(|entity| fetcher.fetch(entity))
            .collect();
        record.retrieved_triples = Some(retrieved);
    }
}

/// Ranks the distinct triples retrieved for a record. Skipped sentinels are not candidates.
pub fn rank_candidates<R: TripleRanker + ?Sized>(record: &QaRecord, ranker: &R) -> Vec<RankedTriple> {
    let mut seen = HashSet::new();
    let candidates = record
        .retrieved_triples
        .iter()
        .flatten()
        .flatten()
        .filter(|triple| !triple.is_skipped())
        .filter(|triple| seen.insert(*triple))
        .cloned()
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return Vec::new();
    }
    ranker.rank(record.question.as_deref().unwrap_or_default(), candidates)
}
