use colored::Colorize;
use winnow::{
    combinator::{alt, cut_err, preceded, repeat, terminated},
    error::{ContextError, StrContext, StrContextValue},
    token::{any, one_of},
    PResult, Parser,
};

use crate::{
    error::{Error, ParseError},
    explanation::{DiscardedExplanation, Explain},
    markdown::Markdown,
    propositional_logic::{
        lexer::tokenize_with_explanation,
        types::{Expression, Operator, Token, Variable},
    },
};

type Input<'a> = &'a [Token];

/// Tokenizes and parses a formula.
///
/// Parsing, simplification and solving all recurse once per nesting level,
/// so formulas nested thousands of levels deep can exhaust the stack.
pub fn parse(input: &str) -> Result<Expression, Error> {
    parse_with_explanation(input, &mut DiscardedExplanation)
}

pub fn parse_with_explanation(
    input: &str,
    explanation: &mut impl Explain,
) -> Result<Expression, Error> {
    let tokens = tokenize_with_explanation(input, explanation)?;

    parse_tokens(&tokens, explanation).map_err(Error::from)
}

/// Parses a complete token sequence, which must be terminated by [`Token::End`].
///
/// Precedence, from tightest to loosest: negation, conjunction, disjunction,
/// implication. Binary connectives associate to the left.
pub fn parse_tokens(
    tokens: &[Token],
    explanation: &mut impl Explain,
) -> Result<Expression, ParseError> {
    let result = terminated(
        expression,
        cut_err(symbol(Token::End).context(expected("end of input"))),
    )
    .parse(tokens)
    .map_err(|error| {
        let position = error.offset();

        ParseError {
            expected: error
                .inner()
                .context()
                .find_map(|context| match context {
                    StrContext::Expected(StrContextValue::Description(description)) => {
                        Some(description.to_string())
                    }
                    _ => None,
                })
                .unwrap_or_else(|| "expression".to_owned()),
            found: tokens.get(position).copied().unwrap_or(Token::End),
            position,
        }
    });

    explanation.with_subexplanation(
        || "Parsing tokens",
        |explanation| match &result {
            Ok(expression) => explanation.step(|| format!("{}", expression.get_tree())),
            Err(error) => explanation.step(|| {
                format!("Fatal parsing error: {}", error.to_string().red().markdown())
            }),
        },
    );

    result
}

fn expression(input: &mut Input) -> PResult<Expression> {
    implication.parse_next(input)
}

// The conclusion of an implication is a single variable, not an expression.
fn implication(input: &mut Input) -> PResult<Expression> {
    (
        disjunction,
        repeat(
            0..,
            preceded(
                operator(Operator::Implies),
                cut_err(variable.context(expected("propositional variable"))),
            ),
        ),
    )
        .map(|(premise, conclusions): (Expression, Vec<Variable>)| {
            conclusions
                .into_iter()
                .fold(premise, Expression::implication)
        })
        .parse_next(input)
}

fn disjunction(input: &mut Input) -> PResult<Expression> {
    (
        conjunction,
        repeat(0.., preceded(operator(Operator::Or), cut_err(conjunction))),
    )
        .map(|(first, rest): (Expression, Vec<Expression>)| {
            rest.into_iter().fold(first, Expression::disjunction)
        })
        .parse_next(input)
}

fn conjunction(input: &mut Input) -> PResult<Expression> {
    (
        negation,
        repeat(0.., preceded(operator(Operator::And), cut_err(negation))),
    )
        .map(|(first, rest): (Expression, Vec<Expression>)| {
            rest.into_iter().fold(first, Expression::conjunction)
        })
        .parse_next(input)
}

fn negation(input: &mut Input) -> PResult<Expression> {
    alt((
        preceded(operator(Operator::Not), cut_err(negation)).map(Expression::negation),
        primary,
    ))
    .parse_next(input)
}

fn primary(input: &mut Input) -> PResult<Expression> {
    alt((variable.map(Expression::Variable), parenthesized_expression))
        .context(expected("operand"))
        .parse_next(input)
}

fn parenthesized_expression(input: &mut Input) -> PResult<Expression> {
    preceded(
        symbol(Token::LParen),
        cut_err(terminated(
            expression,
            symbol(Token::RParen).context(expected("closing parenthesis")),
        )),
    )
    .parse_next(input)
}

fn variable(input: &mut Input) -> PResult<Variable> {
    any.verify_map(|token: Token| match token {
        Token::Variable(variable) => Some(variable),
        _ => None,
    })
    .parse_next(input)
}

fn operator<'a>(operator: Operator) -> impl Parser<Input<'a>, Token, ContextError> {
    symbol(Token::Operator(operator))
}

fn symbol<'a>(wanted: Token) -> impl Parser<Input<'a>, Token, ContextError> {
    one_of(move |token: Token| token == wanted)
}

fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}
