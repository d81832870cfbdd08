use derive_more::{Display, From};

use crate::propositional_logic::types::Token;

/// A character outside the formula alphabet.
///
/// `position` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("unrecognized character '{character}' at position {position}")]
pub struct LexError {
    pub character: char,
    pub position: usize,
}

/// A token stream that does not match the grammar.
///
/// `position` is the index of `found` in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("expected {expected}, found {found} at token {position}")]
pub struct ParseError {
    pub expected: String,
    pub found: Token,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error, From)]
pub enum Error {
    #[display("{_0}")]
    Lex(LexError),
    #[display("{_0}")]
    Parse(ParseError),
}
