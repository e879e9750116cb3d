use sparql_triples_model::{NamespaceTable, QaRecord};
use sparql_triples_parser::{
    normalize_all, process_parallel, ExtractorConfig, NamespaceCollapser, TripleExtractor,
};

/// Options of [`run_pipeline`].
#[derive(Clone, Debug, Default)]
pub struct PipelineOptions {
    /// The namespaces used to collapse full IRIs.
    pub namespaces: NamespaceTable,
    /// Extract the records on the rayon thread pool.
    pub parallel: bool,
    /// See [`ExtractorConfig::recollapse_expanded`].
    pub recollapse_expanded: bool,
}

impl PipelineOptions {
    fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            recollapse_expanded: self.recollapse_expanded,
            namespaces: self.namespaces.clone(),
        }
    }
}

/// Counters of a [`run_pipeline`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub records: usize,
    /// Records whose `formated_query` has been filled in.
    pub collapsed: usize,
    pub triples: usize,
    /// Distinct prefixes declared across the corpus.
    pub global_prefixes: usize,
}

/// Collapses the queries of `records` that have no `formated_query` yet, then extracts the
/// triples and answer values of every record.
pub fn run_pipeline(records: &mut [QaRecord], options: &PipelineOptions) -> PipelineSummary {
    let collapser = NamespaceCollapser::new(options.namespaces.clone());
    let collapsed = normalize_all(records, &collapser);

    let config = options.extractor_config();
    let global_prefixes = if options.parallel {
        process_parallel(records, &config).len()
    } else {
        let mut extractor = TripleExtractor::new(config);
        extractor.process_all(records);
        extractor.global_prefixes().len()
    };

    let summary = PipelineSummary {
        records: records.len(),
        collapsed,
        triples: records
            .iter()
            .filter_map(|record| record.triples.as_ref())
            .map(Vec::len)
            .sum(),
        global_prefixes,
    };
    tracing::debug!(?summary, "Pipeline finished");
    summary
}
