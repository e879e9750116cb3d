use crate::{KgTriple, TriplePattern};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Maps a projected variable to the ordered answer values bound to it.
///
/// Variables are kept in the order of their first answer.
pub type AnswersByVariable = IndexMap<String, Vec<String>>;

/// One entry of the gold answers of a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// The result of a boolean (`ASK`) query.
    Boolean(bool),
    /// A single-key binding object, e.g. `{"uri": {"type": "uri", "value": "..."}}`.
    Binding(Map<String, Value>),
}

impl Answer {
    /// Creates a binding of `variable` to a plain `value`.
    pub fn binding(variable: impl Into<String>, value: impl Into<String>) -> Self {
        let mut term = Map::new();
        term.insert("value".to_owned(), Value::String(value.into()));
        let mut binding = Map::new();
        binding.insert(variable.into(), Value::Object(term));
        Self::Binding(binding)
    }

    /// Returns the bound variable and its value.
    ///
    /// Boolean answers and bindings without a `value` field return [`None`]. Non-string values
    /// are rendered as JSON.
    pub fn variable_value(&self) -> Option<(&str, Cow<'_, str>)> {
        let Self::Binding(binding) = self else {
            return None;
        };
        let (variable, term) = binding.iter().next()?;
        let value = match term.get("value")? {
            Value::String(value) => Cow::Borrowed(value.as_str()),
            other => Cow::Owned(other.to_string()),
        };
        Some((variable.as_str(), value))
    }
}

/// A question of a question answering corpus together with its SPARQL query.
///
/// The record owns the raw `query`, the namespace-collapsed `formated_query` and, once
/// processed, the extracted `triples` and `answers_value`. Fields this crate does not know about
/// are kept in `extra` so that a corpus can be rewritten without losing information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// The misspelled key is the one used by the published corpus files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formated_query: Option<String>,
    #[serde(default, deserialize_with = "deserialize_answers")]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triples: Option<Vec<TriplePattern>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers_value: Option<AnswersByVariable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieved_triples: Option<Vec<Vec<KgTriple>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QaRecord {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_answers(mut self, answers: Vec<Answer>) -> Self {
        self.answers = answers;
        self
    }

    /// The text the triple extraction reads: the collapsed query if present, otherwise the raw
    /// query.
    pub fn query_text(&self) -> &str {
        self.formated_query
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.query.as_deref())
            .unwrap_or_default()
    }

    /// Whether the gold answer is the result of a boolean query.
    pub fn is_boolean(&self) -> bool {
        matches!(self.answers.as_slice(), [Answer::Boolean(_)])
    }

    /// A short label for log messages.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.id {
            Some(Value::String(id)) => Cow::Borrowed(id.as_str()),
            Some(id) => Cow::Owned(id.to_string()),
            None => Cow::Borrowed("<no id>"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersRepr {
    Many(Vec<Answer>),
    One(Answer),
}

/// Accepts a list of answers, a single answer object (LC-QuAD) or `null`.
fn deserialize_answers<'de, D>(deserializer: D) -> Result<Vec<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AnswersRepr>::deserialize(deserializer)? {
        Some(AnswersRepr::Many(answers)) => answers,
        Some(AnswersRepr::One(answer)) => vec![answer],
        None => Vec::new(),
    })
}
