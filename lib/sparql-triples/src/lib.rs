#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
pub mod io;
mod pipeline;

pub use pipeline::{run_pipeline, PipelineOptions, PipelineSummary};

pub mod model {
    pub use sparql_triples_model::*;
}

pub mod parser {
    pub use sparql_triples_parser::*;
}
