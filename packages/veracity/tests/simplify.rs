use veracity::{
    explanation::Explanation, parse, propositional_logic::simplify::simplify_expression, simplify,
    Expression, Variable,
};

#[test]
fn simplify_formulas() {
    let test_cases: [(&str, &str); 12] = [
        ("P∧¬P", "⊥"),
        ("¬P∧P", "⊥"),
        ("P∨¬P", "⊤"),
        ("¬P∨P", "⊤"),
        ("(P∧¬P)∨Q", "Q"),
        ("(P∨¬P)∧Q", "Q"),
        ("¬¬P", "P"),
        ("¬¬¬P", "(¬P)"),
        ("P∧¬¬¬P", "⊥"),
        ("(P∧Q)∨¬(P∧Q)", "⊤"),
        ("¬(P∨¬P)", "⊥"),
        ("P∧¬Q", "(P ∧ (¬Q))"),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            simplify(&parse(input).unwrap()).to_string(),
            expected_result,
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn simplify_implications() {
    let test_cases: [(&str, &str); 5] = [
        ("(P∧¬P)→Q", "⊤"),
        ("(P∨¬P)→Q", "Q"),
        ("P→P", "⊤"),
        ("¬P→P", "((¬P) → P)"),
        ("(Q∨¬Q)∧P→P", "⊤"),
    ];

    for (i, (input, expected_result)) in test_cases.into_iter().enumerate() {
        assert_eq!(
            simplify(&parse(input).unwrap()).to_string(),
            expected_result,
            "Test case {}; Input: {}",
            i + 1,
            input
        );
    }
}

#[test]
fn simplify_literals() {
    let p = Expression::Variable(Variable('P'));

    assert_eq!(
        simplify(&Expression::conjunction(Expression::Literal(true), p.clone())),
        p
    );
    assert_eq!(
        simplify(&Expression::disjunction(p.clone(), Expression::Literal(true))),
        Expression::Literal(true)
    );
    assert_eq!(
        simplify(&Expression::conjunction(p.clone(), Expression::Literal(false))),
        Expression::Literal(false)
    );
    assert_eq!(
        simplify(&Expression::disjunction(Expression::Literal(false), p.clone())),
        p
    );
    assert_eq!(
        simplify(&Expression::negation(Expression::Literal(false))),
        Expression::Literal(true)
    );
}

#[test]
fn simplify_is_structural_only() {
    // Equivalent but not syntactically complementary operands are kept.
    let expression = parse("(P∧Q)∧(¬Q∨¬P)").unwrap();

    assert_eq!(simplify(&expression), expression);
}

#[test]
fn simplify_leaves_the_input_untouched() {
    let expression = parse("(P∧¬P)∨Q").unwrap();
    let copy = expression.clone();

    let _ = simplify(&expression);

    assert_eq!(expression, copy);
}

#[test]
fn simplify_explains_applied_laws() {
    let mut explanation = Explanation::new("Simplification");

    let result = simplify_expression(&parse("(P∧¬P)∨¬¬Q").unwrap(), &mut explanation);

    assert_eq!(result, Expression::Variable(Variable('Q')));

    let steps = explanation.steps();
    for law in ["F ∧ ¬F ∼ ⊥", "¬(¬F) ∼ F", "F ∨ ⊥ ∼ F"] {
        assert!(
            steps.iter().any(|step| step.contains(law)),
            "Missing law {law} in {steps:?}"
        );
    }
}
