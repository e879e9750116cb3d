use crate::assembly::TripleAssembler;
use crate::clauses::strip_clauses;
use crate::prefixes::{GlobalPrefixes, PrefixAccumulator, PrefixTable};
use crate::scope::{matching_clause, top_level_blocks};
use crate::tokens::tokenize;
use sparql_triples_model::{Answer, AnswersByVariable, NamespaceTable, QaRecord, TriplePattern};
use std::borrow::Cow;

/// Options of a [`TripleExtractor`].
#[derive(Clone, Debug, Default)]
pub struct ExtractorConfig {
    /// Collapse prefixed names again after they have been expanded with a declared namespace.
    ///
    /// By default, an expanded name keeps its long `namespace:localname` form.
    pub recollapse_expanded: bool,
    /// The namespaces used when `recollapse_expanded` is set.
    pub namespaces: NamespaceTable,
}

/// The structure recovered from one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub triples: Vec<TriplePattern>,
    pub answers_value: AnswersByVariable,
}

/// Extracts triple patterns and answer values from the records of a corpus.
///
/// The extractor owns the corpus-global prefix table. Records must be passed in corpus order,
/// as a record may use a prefix that only an earlier record declared.
///
/// ```
/// use sparql_triples_parser::TripleExtractor;
/// use sparql_triples_model::TriplePattern;
///
/// let mut extractor = TripleExtractor::default();
/// let triples = extractor.extract_query("SELECT ?x WHERE { ?x dbo:birthPlace res:Paris }");
/// assert_eq!(triples, vec![TriplePattern::new("?x", "dbo:birthPlace", "res:Paris")]);
/// ```
#[derive(Debug, Default)]
pub struct TripleExtractor {
    config: ExtractorConfig,
    global: PrefixAccumulator,
}

impl TripleExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            global: PrefixAccumulator::new(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The prefixes declared by all records seen so far.
    pub fn global_prefixes(&self) -> &PrefixAccumulator {
        &self.global
    }

    /// Extracts the triples and the answer values of a record.
    pub fn extract(&mut self, record: &QaRecord) -> Extraction {
        Extraction {
            triples: self.extract_query(record.query_text()),
            answers_value: index_answers(&record.answers),
        }
    }

    /// Extracts the triples of a query and records its prefix declarations.
    pub fn extract_query(&mut self, query: &str) -> Vec<TriplePattern> {
        let local = PrefixTable::from_query(query);
        let added = self.global.merge(&local);
        if added > 0 {
            tracing::debug!(added, total = self.global.len(), "New global prefixes");
        }
        extract_triples(query, &local, &self.global, &self.config)
    }

    /// Stores the extraction results of a record in the record itself.
    pub fn process(&mut self, record: &mut QaRecord) {
        let Extraction {
            triples,
            answers_value,
        } = self.extract(record);
        tracing::debug!(
            record = %record.label(),
            triples = triples.len(),
            variables = answers_value.len(),
            "Extracted record"
        );
        record.triples = Some(triples);
        record.answers_value = Some(answers_value);
    }

    /// Processes `records` one after the other, in order.
    pub fn process_all(&mut self, records: &mut [QaRecord]) {
        for record in records.iter_mut() {
            self.process(record);
        }
        tracing::info!(
            records = records.len(),
            global_prefixes = self.global.len(),
            "Extracted triples"
        );
    }
}

/// Groups the values of binding answers by their variable, keeping their order and duplicates.
///
/// Boolean answers have no variable and are skipped.
pub fn index_answers(answers: &[Answer]) -> AnswersByVariable {
    let mut index = AnswersByVariable::new();
    for answer in answers {
        match answer.variable_value() {
            Some((variable, value)) => index
                .entry(variable.to_owned())
                .or_default()
                .push(value.into_owned()),
            None if matches!(answer, Answer::Binding(_)) => {
                tracing::debug!("Skipping a binding without value");
            }
            None => {}
        }
    }
    index
}

/// Extracts the triples of the matching clause of `query`.
///
/// Names with a prefix declared in `local` are expanded with that namespace, otherwise with
/// the namespace of `global`.
pub(crate) fn extract_triples(
    query: &str,
    local: &PrefixTable,
    global: &impl GlobalPrefixes,
    config: &ExtractorConfig,
) -> Vec<TriplePattern> {
    let Some(body) = matching_clause(query) else {
        tracing::trace!("Query without matching clause");
        return Vec::new();
    };

    let mut triples = Vec::new();
    for block in top_level_blocks(body) {
        let block = strip_clauses(block);
        let mut assembler = TripleAssembler::new();
        assembler.extend(tokenize(&block));
        triples.extend(assembler.finish().into_iter().map(|[s, p, o]| {
            TriplePattern::new(
                expand(s, local, global, config),
                expand(p, local, global, config),
                expand(o, local, global, config),
            )
        }));
    }
    triples
}

fn expand<'token>(
    token: &'token str,
    local: &PrefixTable,
    global: &impl GlobalPrefixes,
    config: &ExtractorConfig,
) -> Cow<'token, str> {
    let Some((prefix, local_name)) = token.split_once(':') else {
        return Cow::Borrowed(token);
    };
    let Some(namespace) = local
        .namespace(prefix)
        .or_else(|| global.namespace(prefix))
    else {
        return Cow::Borrowed(token);
    };
    let expanded = format!("{namespace}:{local_name}");
    if config.recollapse_expanded {
        Cow::Owned(config.namespaces.shorten(&expanded))
    } else {
        Cow::Owned(expanded)
    }
}
