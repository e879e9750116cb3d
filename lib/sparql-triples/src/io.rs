//! Reading and writing corpus files.
//!
//! A corpus is a JSON array of [`QaRecord`]s. Records are written back pretty-printed with an
//! indentation of four spaces, and non-ASCII characters are kept as they are.

use crate::error::CorpusError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sparql_triples_model::{NamespaceTable, QaRecord};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn read_corpus(reader: impl Read) -> Result<Vec<QaRecord>, CorpusError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_corpus(mut writer: impl Write, records: &[QaRecord]) -> Result<(), CorpusError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<QaRecord>, CorpusError> {
    read_corpus(BufReader::new(File::open(path)?))
}

/// Writes `records` to a new file at `path` and syncs it to disk.
pub fn save_corpus(path: impl AsRef<Path>, records: &[QaRecord]) -> Result<(), CorpusError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_corpus(&mut writer, records)?;
    let file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.sync_all()?;
    Ok(())
}

/// Reads a JSON object mapping namespace IRIs to prefixes and adds its entries to `base`.
///
/// ```json
/// { "http://www.wikidata.org/entity/": "wd" }
/// ```
pub fn read_namespaces(
    reader: impl Read,
    base: &NamespaceTable,
) -> Result<NamespaceTable, CorpusError> {
    let entries: BTreeMap<String, String> = serde_json::from_reader(reader)?;
    Ok(base.extended(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use sparql_triples_model::TriplePattern;

    const CORPUS: &str = r#"[
        {
            "id": 7,
            "question": "Who wrote Le Petit Prince?",
            "query": "SELECT ?uri WHERE { res:The_Little_Prince dbo:author ?uri }",
            "answers": {"uri": {"type": "uri", "value": "http://dbpedia.org/resource/Antoine_de_Saint-Exupéry"}},
            "source": "lcquad"
        }
    ]"#;

    #[test]
    fn test_read_single_answer_object() {
        let records = read_corpus(CORPUS.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answers.len(), 1);
        assert_eq!(records[0].extra["source"], "lcquad");
    }

    #[test]
    fn test_write_keeps_unknown_fields_and_unicode() {
        let mut records = read_corpus(CORPUS.as_bytes()).unwrap();
        records[0].triples = Some(vec![TriplePattern::new(
            "res:The_Little_Prince",
            "dbo:author",
            "?uri",
        )]);

        let mut output = Vec::new();
        write_corpus(&mut output, &records).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("[\n    {\n        \"id\": 7,"));
        assert!(output.contains("Saint-Exupéry"));
        assert!(output.contains("\"source\": \"lcquad\""));
        assert_eq!(read_corpus(output.as_bytes()).unwrap(), records);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.child("corpus.json");
        let records = read_corpus(CORPUS.as_bytes()).unwrap();

        save_corpus(corpus.path(), &records).unwrap();
        corpus.assert(predicates::str::contains("Saint-Exupéry"));
        assert_eq!(load_corpus(corpus.path()).unwrap(), records);

        assert!(matches!(
            load_corpus(dir.child("missing.json").path()),
            Err(CorpusError::Io(_))
        ));
    }

    #[test]
    fn test_reject_non_array() {
        assert!(matches!(
            read_corpus(r#"{"query": "SELECT"}"#.as_bytes()),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn test_read_namespaces() {
        let table = read_namespaces(
            r#"{"http://www.wikidata.org/entity/": "wd"}"#.as_bytes(),
            &NamespaceTable::dbpedia(),
        )
        .unwrap();
        assert_eq!(table.len(), NamespaceTable::dbpedia().len() + 1);
        assert_eq!(
            table.shorten("<http://www.wikidata.org/entity/Q90>"),
            "wd:Q90"
        );

        assert!(matches!(
            read_namespaces(r#"{"http://ex.org/a": "ex"}"#.as_bytes(), &table),
            Err(CorpusError::Namespace(_))
        ));
    }
}
