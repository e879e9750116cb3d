use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use sparql_triples::error::CorpusError;
use sparql_triples::io::{load_corpus, read_namespaces, save_corpus, write_corpus};
use sparql_triples::model::NamespaceTable;
use sparql_triples::parser::NamespaceCollapser;
use sparql_triples::{run_pipeline, PipelineOptions};
use std::fs::File;
use std::io::{self, stdin, stdout, BufReader, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_logging(matches.verbose);
    match matches.command {
        Command::Collapse { file, namespaces } => {
            let collapser = NamespaceCollapser::new(namespace_table(namespaces.as_deref())?);
            let mut query = String::new();
            if let Some(file) = &file {
                File::open(file)
                    .and_then(|mut file| file.read_to_string(&mut query))
                    .with_context(|| format!("Failed to read {}", file.display()))?;
            } else {
                stdin()
                    .lock()
                    .read_to_string(&mut query)
                    .context("Failed to read the query from stdin")?;
            }
            let mut out = stdout().lock();
            writeln!(out, "{}", collapser.collapse(query.trim_end()))?;
            Ok(())
        }
        Command::Extract {
            input,
            output,
            namespaces,
            parallel,
            recollapse,
        } => {
            let mut records = load_corpus(&input)
                .with_context(|| format!("Failed to load the corpus {}", input.display()))?;
            let options = PipelineOptions {
                namespaces: namespace_table(namespaces.as_deref())?,
                parallel,
                recollapse_expanded: recollapse,
            };
            let summary = run_pipeline(&mut records, &options);
            tracing::info!(
                records = summary.records,
                collapsed = summary.collapsed,
                triples = summary.triples,
                global_prefixes = summary.global_prefixes,
                "Processed {}",
                input.display()
            );

            if let Some(output) = &output {
                save_corpus(output, &records)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
            } else {
                write_corpus(stdout().lock(), &records)
                    .context("Failed to write the corpus to stdout")?;
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// The DBpedia table, extended with the entries of `path` if given.
fn namespace_table(path: Option<&Path>) -> anyhow::Result<NamespaceTable> {
    let base = NamespaceTable::dbpedia();
    let Some(path) = path else {
        return Ok(base);
    };
    let table = File::open(path)
        .map_err(CorpusError::from)
        .and_then(|file| read_namespaces(BufReader::new(file), &base))
        .with_context(|| format!("Invalid namespace file {}", path.display()))?;
    tracing::debug!(namespaces = table.len(), "Loaded namespace table");
    Ok(table)
}
