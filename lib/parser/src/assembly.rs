//! Groups the tokens of a block into triple patterns.

use crate::tokens::Token;

/// The progress of the triple pattern currently being read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssemblyState<'block> {
    #[default]
    NeedSubject,
    NeedPredicate {
        subject: &'block str,
    },
    /// Every further term is an object of `subject` and `predicate`.
    HaveBoth {
        subject: &'block str,
        predicate: &'block str,
    },
}

/// A finite automaton that turns a token stream into `[subject, predicate, object]` triples.
///
/// The automaton does not validate the grammar. A fragment that ends before an object has been
/// read produces no triple.
#[derive(Debug, Default)]
pub struct TripleAssembler<'block> {
    state: AssemblyState<'block>,
    triples: Vec<[&'block str; 3]>,
}

impl<'block> TripleAssembler<'block> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AssemblyState<'block> {
        self.state
    }

    pub fn push(&mut self, token: Token<'block>) {
        self.state = match (self.state, token) {
            (AssemblyState::NeedPredicate { .. } | AssemblyState::HaveBoth { .. }, Token::Dot) => {
                self.drop_dangling();
                AssemblyState::NeedSubject
            }
            (AssemblyState::HaveBoth { subject, .. }, Token::Semicolon) => {
                AssemblyState::NeedPredicate { subject }
            }
            (state, Token::Dot | Token::Semicolon | Token::Comma) => state,
            (AssemblyState::NeedSubject, Token::Term(subject)) => {
                AssemblyState::NeedPredicate { subject }
            }
            (AssemblyState::NeedPredicate { subject }, Token::Term(predicate)) => {
                AssemblyState::HaveBoth { subject, predicate }
            }
            (AssemblyState::HaveBoth { subject, predicate }, Token::Term(object)) => {
                self.triples.push([subject, predicate, object]);
                AssemblyState::HaveBoth { subject, predicate }
            }
        };
    }

    /// Returns the assembled triples in the order of their objects.
    pub fn finish(mut self) -> Vec<[&'block str; 3]> {
        self.drop_dangling();
        self.triples
    }

    fn drop_dangling(&self) {
        if let AssemblyState::NeedPredicate { subject } = self.state {
            tracing::trace!(subject, "Dropping a pattern without predicate");
        }
    }
}

impl<'block> Extend<Token<'block>> for TripleAssembler<'block> {
    fn extend<T: IntoIterator<Item = Token<'block>>>(&mut self, iter: T) {
        for token in iter {
            self.push(token);
        }
    }
}
