//! Namespaces used to shorten full IRIs into `prefix:localname` tokens.

use crate::NamespaceError;
use std::sync::LazyLock;

/// The namespaces of the DBpedia-based question answering corpora and their short prefixes.
pub const DBPEDIA_NAMESPACES: [(&str, &str); 16] = [
    ("http://dbpedia.org/ontology/", "dbo"),
    ("http://dbpedia.org/property/", "dbp"),
    ("http://dbpedia.org/resource/", "res"),
    ("http://dbpedia.org/class/yago/", "yago"),
    ("http://www.w3.org/2000/01/rdf-schema#", "rdfs"),
    ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf"),
    ("http://www.w3.org/2002/07/owl#", "owl"),
    ("http://www.w3.org/2001/XMLSchema#", "xsd"),
    ("http://xmlns.com/foaf/0.1/", "foaf"),
    ("http://purl.org/dc/elements/1.1/", "dc"),
    ("http://purl.org/dc/terms/", "dcterms"),
    ("http://www.w3.org/2004/02/skos/core#", "skos"),
    ("http://www.w3.org/2003/01/geo/wgs84_pos#", "geo"),
    ("http://www.georss.org/georss/", "georss"),
    ("http://dbpedia.org/", "dbpedia"),
    ("http://purl.org/linguistics/gold/", "gold"),
];

static DBPEDIA: LazyLock<NamespaceTable> = LazyLock::new(|| NamespaceTable {
    entries: sorted_entries(
        DBPEDIA_NAMESPACES
            .iter()
            .map(|(namespace, prefix)| ((*namespace).to_owned(), (*prefix).to_owned()))
            .collect(),
    ),
});

/// An immutable mapping from full namespace IRIs to short prefixes.
///
/// Entries are kept ordered by descending namespace length. Hence, when one namespace is a
/// string-prefix of another one (e.g., `http://dbpedia.org/` and `http://dbpedia.org/resource/`),
/// the more specific namespace is always tried first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: Vec<(String, String)>,
}

impl NamespaceTable {
    /// Creates a table from `(namespace, prefix)` pairs.
    ///
    /// If a namespace occurs multiple times, the last pair wins.
    pub fn try_new<N, P>(entries: impl IntoIterator<Item = (N, P)>) -> Result<Self, NamespaceError>
    where
        N: Into<String>,
        P: Into<String>,
    {
        let mut validated: Vec<(String, String)> = Vec::new();
        for (namespace, prefix) in entries {
            let (namespace, prefix) = validate(namespace.into(), prefix.into())?;
            match validated.iter_mut().find(|(existing, _)| *existing == namespace) {
                Some(entry) => entry.1 = prefix,
                None => validated.push((namespace, prefix)),
            }
        }
        Ok(Self {
            entries: sorted_entries(validated),
        })
    }

    /// Returns the DBpedia namespace table ([`DBPEDIA_NAMESPACES`]).
    pub fn dbpedia() -> Self {
        DBPEDIA.clone()
    }

    /// Returns a new table that additionally contains `entries`. Existing namespaces are
    /// re-assigned to the new prefix.
    pub fn extended<N, P>(
        &self,
        entries: impl IntoIterator<Item = (N, P)>,
    ) -> Result<Self, NamespaceError>
    where
        N: Into<String>,
        P: Into<String>,
    {
        let current = self
            .entries
            .iter()
            .map(|(namespace, prefix)| (namespace.clone(), prefix.clone()));
        let additional = entries
            .into_iter()
            .map(|(namespace, prefix)| (namespace.into(), prefix.into()))
            .collect::<Vec<(String, String)>>();
        Self::try_new(current.chain(additional))
    }

    /// Finds the longest namespace of `iri` and returns its prefix together with the remaining
    /// local part.
    pub fn lookup<'iri>(&self, iri: &'iri str) -> Option<(&str, &'iri str)> {
        self.entries.iter().find_map(|(namespace, prefix)| {
            iri.strip_prefix(namespace.as_str())
                .map(|local| (prefix.as_str(), local))
        })
    }

    /// Collapses a bare IRI into `prefix:localname`.
    ///
    /// Some exported IRIs fuse the local name onto a trailing colon (`.../ontology/:name`);
    /// exactly one leading `:` of the local name is dropped.
    pub fn collapse_iri(&self, iri: &str) -> Option<String> {
        self.lookup(iri).map(|(prefix, local)| {
            let local = local.strip_prefix(':').unwrap_or(local);
            format!("{prefix}:{local}")
        })
    }

    /// Shortens an IRI that may be wrapped in angle brackets.
    ///
    /// Returns the IRI without brackets if no namespace matches.
    pub fn shorten(&self, iri: &str) -> String {
        let bare = iri
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(iri);
        self.collapse_iri(bare).unwrap_or_else(|| bare.to_owned())
    }

    /// Iterates over `(namespace, prefix)` pairs, longest namespace first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(namespace, prefix)| (namespace.as_str(), prefix.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::dbpedia()
    }
}

fn validate(namespace: String, prefix: String) -> Result<(String, String), NamespaceError> {
    if !namespace.ends_with('/') && !namespace.ends_with('#') {
        return Err(NamespaceError::InvalidNamespace { namespace });
    }
    if prefix.is_empty() || prefix.contains(|c: char| c == ':' || c.is_whitespace()) {
        return Err(NamespaceError::InvalidPrefix { prefix, namespace });
    }
    Ok((namespace, prefix))
}

fn sorted_entries(mut entries: Vec<(String, String)>) -> Vec<(String, String)> {
    entries.sort_by(|(lhs, _), (rhs, _)| rhs.len().cmp(&lhs.len()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_namespace_wins() {
        let table = NamespaceTable::dbpedia();
        assert_eq!(
            table.collapse_iri("http://dbpedia.org/resource/Paris"),
            Some("res:Paris".to_owned())
        );
        assert_eq!(
            table.collapse_iri("http://dbpedia.org/sparql"),
            Some("dbpedia:sparql".to_owned())
        );
    }

    #[test]
    fn test_longest_namespace_wins_regardless_of_declaration_order() {
        let table = NamespaceTable::try_new([
            ("http://ex.org/", "ex"),
            ("http://ex.org/people/", "people"),
        ])
        .unwrap();
        assert_eq!(
            table.collapse_iri("http://ex.org/people/alice"),
            Some("people:alice".to_owned())
        );
        assert_eq!(
            table.collapse_iri("http://ex.org/thing"),
            Some("ex:thing".to_owned())
        );
    }

    #[test]
    fn test_exactly_one_fused_colon_is_stripped() {
        let table = NamespaceTable::dbpedia();
        assert_eq!(
            table.collapse_iri("http://dbpedia.org/ontology/:birthPlace"),
            Some("dbo:birthPlace".to_owned())
        );
        assert_eq!(
            table.collapse_iri("http://dbpedia.org/ontology/::odd"),
            Some("dbo::odd".to_owned())
        );
    }

    #[test]
    fn test_shorten() {
        let table = NamespaceTable::dbpedia();
        assert_eq!(table.shorten("<http://xmlns.com/foaf/0.1/name>"), "foaf:name");
        assert_eq!(table.shorten("http://example.com/x"), "http://example.com/x");
        assert_eq!(table.shorten("<http://example.com/x>"), "http://example.com/x");
    }

    #[test]
    fn test_invalid_entries() {
        assert_eq!(
            NamespaceTable::try_new([("http://ex.org", "ex")]),
            Err(NamespaceError::InvalidNamespace {
                namespace: "http://ex.org".to_owned()
            })
        );
        assert!(matches!(
            NamespaceTable::try_new([("http://ex.org/", "e x")]),
            Err(NamespaceError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn test_extended_reassigns_existing_namespace() {
        let table = NamespaceTable::dbpedia()
            .extended([("http://dbpedia.org/resource/", "dbr")])
            .unwrap();
        assert_eq!(table.len(), DBPEDIA_NAMESPACES.len());
        assert_eq!(
            table.collapse_iri("http://dbpedia.org/resource/Berlin"),
            Some("dbr:Berlin".to_owned())
        );
    }
}
