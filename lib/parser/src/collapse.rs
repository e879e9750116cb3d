//! Rewrites full IRIs of a query into short `prefix:localname` tokens.

use regex::{Captures, Regex};
use sparql_triples_model::NamespaceTable;
use std::borrow::Cow;
use std::sync::LazyLock;

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static SELECT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSELECT\b").expect("valid SELECT pattern"));

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static BRACKETED_IRI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\s*([^>\s]+)\s*>").expect("valid IRI pattern"));

/// Collapses the bracketed IRIs of a query using a [`NamespaceTable`].
///
/// Only the part of the query starting at the first `SELECT` keyword is rewritten. The prologue,
/// in particular its `PREFIX` declarations, is kept in its long form so that it can
/// still be parsed afterwards.
///
/// ```
/// use sparql_triples_parser::NamespaceCollapser;
///
/// let collapser = NamespaceCollapser::default();
/// let query = "SELECT ?x WHERE { <http://dbpedia.org/resource/Paris> ?p ?x }";
/// assert_eq!(collapser.collapse(query), "SELECT ?x WHERE { res:Paris ?p ?x }");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NamespaceCollapser {
    namespaces: NamespaceTable,
}

impl NamespaceCollapser {
    pub fn new(namespaces: NamespaceTable) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Collapses every known IRI after the `SELECT` keyword. IRIs without a known namespace are
    /// left untouched, and so are bracketed spans containing another `<`.
    ///
    /// Collapsing is idempotent.
    pub fn collapse<'query>(&self, query: &'query str) -> Cow<'query, str> {
        let Some(select) = SELECT_KEYWORD.find(query) else {
            return Cow::Borrowed(query);
        };
        let (prologue, body) = query.split_at(select.start());
        match BRACKETED_IRI.replace_all(body, |captures: &Captures<'_>| {
            let iri = &captures[1];
            if iri.contains('<') {
                return captures[0].to_owned();
            }
            self.namespaces
                .collapse_iri(iri)
                .unwrap_or_else(|| captures[0].to_owned())
        }) {
            Cow::Borrowed(_) => Cow::Borrowed(query),
            Cow::Owned(body) => Cow::Owned(format!("{prologue}{body}")),
        }
    }
}
