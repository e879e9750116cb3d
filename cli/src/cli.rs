use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "sparql-triples")]
/// Triple pattern extraction for SPARQL question answering corpora
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Log more details, can be repeated
    ///
    /// The RUST_LOG environment variable takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Collapse the full IRIs of a single query into prefixed names
    Collapse {
        /// File containing the query
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// JSON object mapping additional namespace IRIs to prefixes
        #[arg(long, value_hint = ValueHint::FilePath)]
        namespaces: Option<PathBuf>,
    },
    /// Extract the triple patterns and answer values of all records of a corpus
    Extract {
        /// JSON array of question answering records
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// File to write the enriched records to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// JSON object mapping additional namespace IRIs to prefixes
        #[arg(long, value_hint = ValueHint::FilePath)]
        namespaces: Option<PathBuf>,
        /// Process the records on all available cores
        #[arg(long)]
        parallel: bool,
        /// Shorten names expanded from PREFIX declarations again
        ///
        /// By default, `ex:name` with `PREFIX ex: <http://ex.org/>` becomes `http://ex.org/:name`.
        #[arg(long)]
        recollapse: bool,
    },
}
