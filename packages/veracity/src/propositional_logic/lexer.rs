use colored::Colorize;
use itertools::Itertools;
use winnow::{
    combinator::{alt, preceded, repeat, terminated},
    token::{any, one_of, take_while},
    PResult, Parser,
};

use crate::{
    error::LexError,
    explanation::{DiscardedExplanation, Explain},
    markdown::Markdown,
    propositional_logic::types::{Operator, Token, Variable},
};

type Input<'a> = &'a str;

pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_explanation(input, &mut DiscardedExplanation)
}

/// Splits `input` into tokens, skipping whitespace. The result always ends
/// with [`Token::End`].
pub fn tokenize_with_explanation(
    input: &str,
    explanation: &mut impl Explain,
) -> Result<Vec<Token>, LexError> {
    explanation.with_subexplanation(
        || format!("Tokenizing '{}'", input.cyan().markdown()),
        |explanation| -> Result<Vec<Token>, LexError> {
            let mut tokens: Vec<Token> =
                terminated(repeat(0.., preceded(whitespace, token)), whitespace)
                    .parse(input)
                    .map_err(|error| {
                        let offset = error.offset();
                        let error = LexError {
                            character: input[offset..]
                                .chars()
                                .next()
                                .unwrap_or(char::REPLACEMENT_CHARACTER),
                            position: input[..offset].chars().count(),
                        };

                        explanation.step(|| error.to_string().red().markdown());

                        error
                    })?;

            tokens.push(Token::End);

            explanation.step(|| {
                format!(
                    "=> {}",
                    tokens.iter().map(|token| format!("[{token}]")).join(" ").green().markdown()
                )
            });

            Ok(tokens)
        },
    )
}

fn token(input: &mut Input) -> PResult<Token> {
    alt((
        one_of(|c: char| c.is_ascii_alphabetic()).map(|c| Token::Variable(Variable(c))),
        any.verify_map(Operator::from_symbol).map(Token::Operator),
        '('.value(Token::LParen),
        ')'.value(Token::RParen),
    ))
    .parse_next(input)
}

fn whitespace(input: &mut Input) -> PResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}
