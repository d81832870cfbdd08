use colored::Colorize;

use crate::{
    explanation::{DiscardedExplanation, Explain},
    markdown::Markdown,
    propositional_logic::types::{Expression, Variable},
};

pub fn law(equivalence: &str) -> String {
    format!("Applying {equivalence}").green().markdown()
}

/// Folds constant sub-expressions bottom-up, returning a new tree.
///
/// Only syntactic complements (`F` next to `¬F`) are recognised as
/// contradictions or tautologies. The result is a fixed point:
/// simplifying it again yields the same expression.
pub fn simplify(expression: &Expression) -> Expression {
    simplify_expression(expression, &mut DiscardedExplanation)
}

pub fn simplify_expression(expression: &Expression, explanation: &mut impl Explain) -> Expression {
    match expression {
        Expression::Literal(_) => {
            explanation.step(|| format!("Constant: {}", expression.to_string().red().markdown()));

            expression.clone()
        }
        Expression::Variable(variable) => {
            explanation.step(|| format!("Variable: {}", variable.to_string().red().markdown()));

            expression.clone()
        }
        expression => explanation.with_subexplanation(
            || {
                format!(
                    "Simplifying expression: {}",
                    expression.to_string().blue().markdown()
                )
            },
            |explanation| {
                let result = match expression {
                    Expression::Negation(operand) => {
                        simplify_negation(operand, explanation.subexplanation(|| "Negation"))
                    }
                    Expression::Conjunction(left, right) => simplify_conjunction(
                        left,
                        right,
                        explanation.subexplanation(|| "Conjunction"),
                    ),
                    Expression::Disjunction(left, right) => simplify_disjunction(
                        left,
                        right,
                        explanation.subexplanation(|| "Disjunction"),
                    ),
                    Expression::Implication(premise, conclusion) => simplify_implication(
                        premise,
                        *conclusion,
                        explanation.subexplanation(|| "Implication"),
                    ),
                    Expression::Literal(_) | Expression::Variable(_) => unreachable!(),
                };

                explanation.step(|| format!("Result: {}", result.to_string().red().markdown()));

                result
            },
        ),
    }
}

fn simplify_negation(operand: &Expression, explanation: &mut impl Explain) -> Expression {
    match simplify_expression(operand, explanation.subexplanation(|| "Negated expression")) {
        Expression::Literal(value) => {
            explanation.step(|| law(if value { "¬⊤ ∼ ⊥" } else { "¬⊥ ∼ ⊤" }));
            Expression::Literal(!value)
        }
        Expression::Negation(operand) => {
            explanation.step(|| law("¬(¬F) ∼ F"));
            *operand
        }
        operand => Expression::negation(operand),
    }
}

fn simplify_conjunction(
    left: &Expression,
    right: &Expression,
    explanation: &mut impl Explain,
) -> Expression {
    let left = simplify_expression(left, explanation.subexplanation(|| "Left operand"));
    let right = simplify_expression(right, explanation.subexplanation(|| "Right operand"));

    match (left, right) {
        (Expression::Literal(false), _) | (_, Expression::Literal(false)) => {
            explanation.step(|| law("F ∧ ⊥ ∼ ⊥"));
            Expression::Literal(false)
        }
        (Expression::Literal(true), other) | (other, Expression::Literal(true)) => {
            explanation.step(|| law("F ∧ ⊤ ∼ F"));
            other
        }
        (left, right) if left.is_negation_of(&right) || right.is_negation_of(&left) => {
            explanation.step(|| law("F ∧ ¬F ∼ ⊥"));
            Expression::Literal(false)
        }
        (left, right) => Expression::conjunction(left, right),
    }
}

fn simplify_disjunction(
    left: &Expression,
    right: &Expression,
    explanation: &mut impl Explain,
) -> Expression {
    let left = simplify_expression(left, explanation.subexplanation(|| "Left operand"));
    let right = simplify_expression(right, explanation.subexplanation(|| "Right operand"));

    match (left, right) {
        (Expression::Literal(true), _) | (_, Expression::Literal(true)) => {
            explanation.step(|| law("F ∨ ⊤ ∼ ⊤"));
            Expression::Literal(true)
        }
        (Expression::Literal(false), other) | (other, Expression::Literal(false)) => {
            explanation.step(|| law("F ∨ ⊥ ∼ F"));
            other
        }
        (left, right) if left.is_negation_of(&right) || right.is_negation_of(&left) => {
            explanation.step(|| law("F ∨ ¬F ∼ ⊤"));
            Expression::Literal(true)
        }
        (left, right) => Expression::disjunction(left, right),
    }
}

fn simplify_implication(
    premise: &Expression,
    conclusion: Variable,
    explanation: &mut impl Explain,
) -> Expression {
    match simplify_expression(premise, explanation.subexplanation(|| "Premise")) {
        Expression::Literal(false) => {
            explanation.step(|| law("⊥ → F ∼ ⊤"));
            Expression::Literal(true)
        }
        Expression::Literal(true) => {
            explanation.step(|| law("⊤ → F ∼ F"));
            Expression::Variable(conclusion)
        }
        Expression::Variable(variable) if variable == conclusion => {
            explanation.step(|| law("F → F ∼ ⊤"));
            Expression::Literal(true)
        }
        premise => Expression::implication(premise, conclusion),
    }
}
