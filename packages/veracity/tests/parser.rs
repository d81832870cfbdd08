use veracity::{
    parse, propositional_logic::parser::parse_tokens, tokenize, Error, Expression, LexError,
    Operator, ParseError, Token, Variable,
};

fn var(name: char) -> Expression {
    Expression::Variable(Variable(name))
}

#[test]
fn tokenize_formulas() {
    let test_cases: [(&str, Result<Vec<Token>, LexError>); 5] = [
        ("", Ok(vec![Token::End])),
        (
            "P ∧ ¬(q)",
            Ok(vec![
                Token::Variable(Variable('P')),
                Token::Operator(Operator::And),
                Token::Operator(Operator::Not),
                Token::LParen,
                Token::Variable(Variable('q')),
                Token::RParen,
                Token::End,
            ]),
        ),
        (
            " P\t∨\n→ ",
            Ok(vec![
                Token::Variable(Variable('P')),
                Token::Operator(Operator::Or),
                Token::Operator(Operator::Implies),
                Token::End,
            ]),
        ),
        (
            "P & Q",
            Err(LexError {
                character: '&',
                position: 2,
            }),
        ),
        (
            "P∧Q1",
            Err(LexError {
                character: '1',
                position: 3,
            }),
        ),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            tokenize(input),
            expected_result,
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn parse_precedence_and_associativity() {
    let test_cases: [(&str, Expression); 14] = [
        ("P", var('P')),
        ("¬P", Expression::negation(var('P'))),
        ("P∧Q", Expression::conjunction(var('P'), var('Q'))),
        ("P∨Q", Expression::disjunction(var('P'), var('Q'))),
        ("P→Q", Expression::implication(var('P'), Variable('Q'))),
        (
            "P∨Q∧R∧¬S",
            Expression::disjunction(
                var('P'),
                Expression::conjunction(
                    Expression::conjunction(var('Q'), var('R')),
                    Expression::negation(var('S')),
                ),
            ),
        ),
        (
            "P ∨    \n¬ Q",
            Expression::disjunction(var('P'), Expression::negation(var('Q'))),
        ),
        (
            "P∧Q→R",
            Expression::implication(Expression::conjunction(var('P'), var('Q')), Variable('R')),
        ),
        (
            "P→Q→R",
            Expression::implication(
                Expression::implication(var('P'), Variable('Q')),
                Variable('R'),
            ),
        ),
        (
            "P∨Q∨R",
            Expression::disjunction(Expression::disjunction(var('P'), var('Q')), var('R')),
        ),
        (
            "¬P∧Q",
            Expression::conjunction(Expression::negation(var('P')), var('Q')),
        ),
        (
            "¬(P∨Q)",
            Expression::negation(Expression::disjunction(var('P'), var('Q'))),
        ),
        (
            "¬¬p∧P",
            Expression::conjunction(
                Expression::negation(Expression::negation(var('p'))),
                var('P'),
            ),
        ),
        (
            "(P∨Q)∧(R→S)",
            Expression::conjunction(
                Expression::disjunction(var('P'), var('Q')),
                Expression::implication(var('R'), Variable('S')),
            ),
        ),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            parse(input),
            Ok(expected_result),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn parse_errors() {
    let test_cases: [(&str, &str, Token, usize); 9] = [
        ("P∧", "operand", Token::End, 2),
        ("(P∧Q", "closing parenthesis", Token::End, 4),
        ("P→(Q∧R)", "propositional variable", Token::LParen, 2),
        ("P→¬Q", "propositional variable", Token::Operator(Operator::Not), 2),
        ("P→", "propositional variable", Token::End, 2),
        ("P Q", "end of input", Token::Variable(Variable('Q')), 1),
        ("P)", "end of input", Token::RParen, 1),
        ("∧P", "operand", Token::Operator(Operator::And), 0),
        ("", "operand", Token::End, 0),
    ];

    for (i, (input, expected, found, position)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            parse(input),
            Err(Error::Parse(ParseError {
                expected: expected.to_owned(),
                found,
                position,
            })),
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn parse_reports_lex_errors() {
    assert_eq!(
        parse("P ∧ Q ⇒ R"),
        Err(Error::Lex(LexError {
            character: '⇒',
            position: 6,
        }))
    );
}

#[test]
fn parse_tokens_without_text() {
    let tokens = [
        Token::Operator(Operator::Not),
        Token::Variable(Variable('A')),
        Token::Operator(Operator::Implies),
        Token::Variable(Variable('B')),
        Token::End,
    ];

    assert_eq!(
        parse_tokens(&tokens, &mut veracity::explanation::DiscardedExplanation),
        Ok(Expression::implication(
            Expression::negation(var('A')),
            Variable('B')
        ))
    );
}

#[test]
fn display_round_trips_through_the_parser() {
    for input in ["P∨Q∧R∧¬S", "¬(P∨Q)→R", "(A→B)∧¬¬C", "P∨(Q∧R)∧(¬S∨(T∨¬U→V)∧W)"] {
        let expression = parse(input).unwrap();
        let rendered = expression.to_string();

        assert_eq!(parse(&rendered), Ok(expression), "Input: {input}; Rendered: {rendered}");
    }

    assert_eq!(
        parse("P∧¬Q→R").unwrap().to_string(),
        "((P ∧ (¬Q)) → R)"
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        parse("P∧").unwrap_err().to_string(),
        "expected operand, found end of input at token 2"
    );
    assert_eq!(
        parse("P % Q").unwrap_err().to_string(),
        "unrecognized character '%' at position 2"
    );
}

fn parse_both(left: &str, right: &str) -> Result<(Expression, Expression), Error> {
    Ok((parse(left)?, parse(right)?))
}

#[test]
fn errors_compose_as_std_errors() {
    let error: Box<dyn std::error::Error> = parse("(P∧Q").unwrap_err().into();
    assert_eq!(
        error.to_string(),
        "expected closing parenthesis, found end of input at token 4"
    );

    let error: Box<dyn std::error::Error> = tokenize("P # Q").unwrap_err().into();
    assert_eq!(error.to_string(), "unrecognized character '#' at position 2");

    assert_eq!(
        parse_both("P", "Q ∧ 7"),
        Err(Error::Lex(LexError {
            character: '7',
            position: 4,
        }))
    );
    assert_eq!(
        parse_both("P", "¬Q").map(|(_, right)| right),
        Ok(Expression::negation(var('Q')))
    );
}

#[test]
fn parse_deeply_nested_formulas() {
    let negations = format!("{}P", "¬".repeat(200));
    let mut expected = var('P');
    for _ in 0..200 {
        expected = Expression::negation(expected);
    }
    assert_eq!(parse(&negations), Ok(expected));
    assert_eq!(veracity::simplify(&parse(&negations).unwrap()), var('P'));
    assert_eq!(
        veracity::solve(negations.as_str()),
        Ok(vec![veracity::Assignment::from([('P', true)])])
    );

    let parenthesized = format!("{}P{}", "(".repeat(30), ")".repeat(30));
    assert_eq!(parse(&parenthesized), Ok(var('P')));
}
