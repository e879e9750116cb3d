use thiserror::Error;

/// An error raised while building a [`NamespaceTable`](crate::NamespaceTable).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// Namespaces must be non-empty and end in `/` or `#`.
    #[error("Invalid namespace '{namespace}': a namespace must end with '/' or '#'")]
    InvalidNamespace {
        /// The rejected namespace.
        namespace: String,
    },
    /// Prefixes must be non-empty and must not contain `:` or whitespace.
    #[error("Invalid prefix '{prefix}' for namespace '{namespace}'")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
        /// The namespace the prefix was declared for.
        namespace: String,
    },
}
