pub mod error;
pub mod explanation;
pub mod markdown;
pub mod propositional_logic;

pub use crate::{
    error::{Error, LexError, ParseError},
    propositional_logic::{
        assignment::Assignment,
        lexer::tokenize,
        parser::parse,
        simplify::simplify,
        solvers::{solve, solve_expression},
        types::{Expression, Operator, Token, Variable},
    },
};
