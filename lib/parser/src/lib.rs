//! Recovers triple patterns from the text of SPARQL queries.
//!
//! The crate provides two transformations that are applied to every record of a question
//! answering corpus:
//!
//! - [`NamespaceCollapser`] rewrites full IRIs into short `prefix:localname` tokens.
//! - [`TripleExtractor`] splits the `WHERE` clause of a query into its top-level blocks, removes
//!   filters and solution modifiers, and assembles the remaining tokens into
//!   [`TriplePattern`](sparql_triples_model::TriplePattern)s. Prefixes declared by a query, or by
//!   an earlier query of the same corpus, are expanded.
//!
//! Both are pure text transformations. [`process_parallel`] distributes the extraction of a
//! corpus over a thread pool.

mod assembly;
mod batch;
mod clauses;
mod collapse;
mod extractor;
mod lexical;
mod prefixes;
mod scope;
mod tokens;

pub use assembly::{AssemblyState, TripleAssembler};
pub use batch::{normalize_all, process_parallel};
pub use clauses::strip_clauses;
pub use collapse::NamespaceCollapser;
pub use extractor::{index_answers, Extraction, ExtractorConfig, TripleExtractor};
pub use prefixes::{GlobalPrefixes, PrefixAccumulator, PrefixSnapshot, PrefixTable, SnapshotView};
pub use scope::{matching_clause, top_level_blocks};
pub use tokens::{tokenize, Token};
