mod collaborators;
mod error;
mod record;
mod triple;
pub mod vocab;

pub use collaborators::*;
pub use error::*;
pub use record::*;
pub use triple::*;
pub use vocab::NamespaceTable;
