//! Query-local and corpus-global `PREFIX` declarations.

use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used, reason = "The pattern is a constant")]
static PREFIX_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)PREFIX\s+([a-z0-9]+):\s*<([^>]+)>").expect("valid PREFIX pattern")
});

/// The `PREFIX` declarations of a single query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixTable {
    namespaces: HashMap<String, String>,
}

impl PrefixTable {
    /// Collects all `PREFIX name: <iri>` declarations of `query`.
    ///
    /// If a query declares the same prefix twice, the later declaration wins.
    pub fn from_query(query: &str) -> Self {
        let namespaces = PREFIX_DECLARATION
            .captures_iter(query)
            .map(|captures| (captures[1].to_owned(), captures[2].to_owned()))
            .collect();
        Self { namespaces }
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Read access to the prefixes declared by previously processed records.
pub trait GlobalPrefixes {
    fn namespace(&self, prefix: &str) -> Option<&str>;
}

/// The prefixes declared so far in a corpus.
///
/// Records are merged in processing order and the first declaration of a prefix wins: a later
/// record that binds the same prefix to another namespace does not change the table. The table
/// only grows during a batch.
#[derive(Clone, Debug, Default)]
pub struct PrefixAccumulator {
    namespaces: HashMap<String, String>,
}

impl PrefixAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the declarations of one record and returns how many prefixes were new.
    pub fn merge(&mut self, local: &PrefixTable) -> usize {
        let mut added = 0;
        for (prefix, namespace) in local.iter() {
            match self.namespaces.entry(prefix.to_owned()) {
                Entry::Vacant(entry) => {
                    entry.insert(namespace.to_owned());
                    added += 1;
                }
                Entry::Occupied(entry) if entry.get() != namespace => {
                    tracing::debug!(
                        prefix,
                        kept = entry.get().as_str(),
                        ignored = namespace,
                        "Prefix redeclared with another namespace"
                    );
                }
                Entry::Occupied(_) => {}
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

impl GlobalPrefixes for PrefixAccumulator {
    fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }
}

/// An immutable view of the prefixes of a whole batch, built in a sequential pre-pass.
///
/// Every prefix remembers the index of the first record that declared it. Looking up a prefix
/// [`at`](Self::at) a record index only sees declarations of that record and the records before
/// it, which reproduces the state of a [`PrefixAccumulator`] during sequential processing.
#[derive(Clone, Debug, Default)]
pub struct PrefixSnapshot {
    namespaces: HashMap<String, (String, usize)>,
}

impl PrefixSnapshot {
    /// Builds the snapshot from the local tables of a batch, in record order.
    pub fn build<'table>(tables: impl IntoIterator<Item = &'table PrefixTable>) -> Self {
        let mut namespaces = HashMap::new();
        for (index, table) in tables.into_iter().enumerate() {
            for (prefix, namespace) in table.iter() {
                namespaces
                    .entry(prefix.to_owned())
                    .or_insert_with(|| (namespace.to_owned(), index));
            }
        }
        Self { namespaces }
    }

    /// The global prefixes as seen by the record at `index`.
    pub fn at(&self, index: usize) -> SnapshotView<'_> {
        SnapshotView {
            snapshot: self,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SnapshotView<'snapshot> {
    snapshot: &'snapshot PrefixSnapshot,
    index: usize,
}

impl GlobalPrefixes for SnapshotView<'_> {
    fn namespace(&self, prefix: &str) -> Option<&str> {
        self.snapshot
            .namespaces
            .get(prefix)
            .filter(|(_, declared_at)| *declared_at <= self.index)
            .map(|(namespace, _)| namespace.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_local_prefixes() {
        let table = PrefixTable::from_query(
            "PREFIX dbo: <http://dbpedia.org/ontology/>\n\
             prefix res:<http://dbpedia.org/resource/>\n\
             PREFIX Foaf2: <http://xmlns.com/foaf/0.1/>\n\
             PREFIX : <http://ex.org/>\n\
             SELECT ?x WHERE { ?x dbo:birthPlace res:Paris }",
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.namespace("dbo"), Some("http://dbpedia.org/ontology/"));
        assert_eq!(table.namespace("res"), Some("http://dbpedia.org/resource/"));
        assert_eq!(table.namespace("Foaf2"), Some("http://xmlns.com/foaf/0.1/"));
        assert_eq!(table.namespace(""), None);
    }

    #[test]
    fn test_later_local_declaration_wins() {
        let table =
            PrefixTable::from_query("PREFIX ex: <http://one.org/> PREFIX ex: <http://two.org/>");
        assert_eq!(table.namespace("ex"), Some("http://two.org/"));
    }

    /// Documents a quirk: a redeclaration with another namespace never replaces the namespace
    /// seen first.
    #[test]
    fn test_first_declaration_wins_globally() {
        let mut global = PrefixAccumulator::new();
        assert_eq!(
            global.merge(&PrefixTable::from_query("PREFIX ex: <http://one.org/>")),
            1
        );
        assert_eq!(
            global.merge(&PrefixTable::from_query(
                "PREFIX ex: <http://two.org/> PREFIX other: <http://other.org/>"
            )),
            1
        );
        assert_eq!(global.namespace("ex"), Some("http://one.org/"));
        assert_eq!(global.namespace("other"), Some("http://other.org/"));
        assert_eq!(global.len(), 2);
    }

    #[test]
    fn test_snapshot_respects_declaration_order() {
        let tables = [
            PrefixTable::default(),
            PrefixTable::from_query("PREFIX ex: <http://one.org/>"),
            PrefixTable::from_query("PREFIX ex: <http://two.org/>"),
        ];
        let snapshot = PrefixSnapshot::build(&tables);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.at(0).namespace("ex"), None);
        assert_eq!(snapshot.at(1).namespace("ex"), Some("http://one.org/"));
        assert_eq!(snapshot.at(2).namespace("ex"), Some("http://one.org/"));
    }
}
