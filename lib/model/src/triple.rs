use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A `(subject, predicate, object)` pattern recovered from the matching clause of a query.
///
/// Each element is kept exactly as it was written (after prefix expansion): a prefixed name, a
/// bracketed IRI, a quoted literal or a variable such as `?uri`. Serialized as a three-element
/// array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct TriplePattern {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl TriplePattern {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl From<[String; 3]> for TriplePattern {
    fn from([subject, predicate, object]: [String; 3]) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<TriplePattern> for [String; 3] {
    fn from(value: TriplePattern) -> Self {
        [value.subject, value.predicate, value.object]
    }
}

impl Display for TriplePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// The placeholder used by knowledge graph fetchers for entities that could not be fetched.
pub const SKIPPED: &str = "SKIPPED";

/// A concrete triple fetched from a knowledge graph, already in short namespace form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct KgTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl KgTriple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The sentinel triple returned when fetching failed after all retries.
    pub fn skipped() -> Self {
        Self::new(SKIPPED, SKIPPED, SKIPPED)
    }

    pub fn is_skipped(&self) -> bool {
        self.subject == SKIPPED && self.predicate == SKIPPED && self.object == SKIPPED
    }
}

impl From<[String; 3]> for KgTriple {
    fn from([subject, predicate, object]: [String; 3]) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<KgTriple> for [String; 3] {
    fn from(value: KgTriple) -> Self {
        [value.subject, value.predicate, value.object]
    }
}

/// A candidate triple annotated by a ranking stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedTriple {
    pub triple: KgTriple,
    /// 1-based position in the ranking.
    pub rank: usize,
    pub score: f64,
}
