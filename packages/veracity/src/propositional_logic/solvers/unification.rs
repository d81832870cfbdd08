use colored::Colorize;

use crate::{
    explanation::Explain,
    markdown::Markdown,
    propositional_logic::{
        assignment::Assignment,
        evaluate::TruthValue,
        simplify::simplify_expression,
        types::{Expression, Variable},
    },
};

use super::solve::{Solution, Solve, SolverOptions, SolverStats};

/// Enumerates partial models by unifying the whole formula with `true`.
///
/// Every branch owns its copy of the assignment; a conflicting binding ends
/// the branch without producing a model. Left operands are always explored
/// before right operands, which fixes the order of the models.
#[derive(Debug, Clone, Default)]
pub struct UnificationSolver {
    options: SolverOptions,
}

impl UnificationSolver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }
}

impl Solve for UnificationSolver {
    fn solve(&self, expression: &Expression, explanation: &mut impl Explain) -> Solution {
        explanation.with_subexplanation(
            || format!("Solving {}", expression.to_string().blue().markdown()),
            |explanation| {
                let simplified;
                let expression = if self.options.simplify {
                    simplified = simplify_expression(
                        expression,
                        explanation.subexplanation(|| "Simplification"),
                    );
                    &simplified
                } else {
                    expression
                };

                let mut engine = UnificationEngine::default();
                let mut models = engine.unify(
                    expression,
                    true,
                    Assignment::new(),
                    explanation.subexplanation(|| "Unification"),
                );

                if self.options.deduplicate {
                    let mut unique = Vec::with_capacity(models.len());
                    for model in models {
                        if !unique.contains(&model) {
                            unique.push(model);
                        }
                    }
                    models = unique;
                }

                engine.stats.model_count = models.len();

                explanation.step(|| {
                    format!(
                        "Found {} model(s) after {} branch point(s) and {} conflict(s)",
                        models.len().to_string().green().markdown(),
                        engine.stats.branch_count,
                        engine.stats.conflict_count
                    )
                });

                Solution {
                    models,
                    stats: engine.stats,
                }
            },
        )
    }
}

#[derive(Debug, Default)]
struct UnificationEngine {
    stats: SolverStats,
}

impl UnificationEngine {
    fn unify(
        &mut self,
        expression: &Expression,
        target: bool,
        assignment: Assignment,
        explanation: &mut impl Explain,
    ) -> Vec<Assignment> {
        match expression {
            Expression::Literal(value) => {
                if *value == target {
                    vec![assignment]
                } else {
                    self.stats.conflict_count += 1;
                    explanation.step(|| {
                        format!(
                            "Conflict: {} cannot be {}",
                            expression.to_string().red().markdown(),
                            TruthValue(target)
                        )
                    });
                    vec![]
                }
            }
            Expression::Variable(variable) => {
                self.unify_variable(*variable, target, assignment, explanation)
            }
            Expression::Negation(operand) => self.unify(operand, !target, assignment, explanation),
            compound => {
                let explanation = explanation.subexplanation(|| {
                    format!(
                        "Unifying {} with {} under {}",
                        compound.to_string().blue().markdown(),
                        TruthValue(target),
                        assignment
                    )
                });

                match (compound, target) {
                    (Expression::Conjunction(left, right), true) => {
                        self.unify_both((left, true), (right, true), assignment, explanation)
                    }
                    (Expression::Conjunction(left, right), false) => {
                        self.unify_either((left, false), (right, false), assignment, explanation)
                    }
                    (Expression::Disjunction(left, right), true) => {
                        self.unify_either((left, true), (right, true), assignment, explanation)
                    }
                    (Expression::Disjunction(left, right), false) => {
                        self.unify_both((left, false), (right, false), assignment, explanation)
                    }
                    // P → Q is unified as ¬P ∨ Q.
                    (Expression::Implication(premise, conclusion), true) => {
                        let conclusion = Expression::Variable(*conclusion);
                        self.unify_either(
                            (premise, false),
                            (&conclusion, true),
                            assignment,
                            explanation,
                        )
                    }
                    (Expression::Implication(premise, conclusion), false) => {
                        let conclusion = Expression::Variable(*conclusion);
                        self.unify_both(
                            (premise, true),
                            (&conclusion, false),
                            assignment,
                            explanation,
                        )
                    }
                    _ => unreachable!(),
                }
            }
        }
    }

    fn unify_variable(
        &mut self,
        variable: Variable,
        target: bool,
        assignment: Assignment,
        explanation: &mut impl Explain,
    ) -> Vec<Assignment> {
        let already_bound = assignment.get(&variable).is_some();

        match assignment.bind(variable, target) {
            Some(assignment) => {
                if !already_bound {
                    explanation.step(|| {
                        format!(
                            "Binding {} ↦ {}",
                            variable.to_string().green().markdown(),
                            TruthValue(target)
                        )
                    });
                }
                vec![assignment]
            }
            None => {
                self.stats.conflict_count += 1;
                explanation.step(|| {
                    format!(
                        "Conflict: {} is already {}",
                        variable.to_string().red().markdown(),
                        TruthValue(!target)
                    )
                });
                vec![]
            }
        }
    }

    // Both operands must reach their targets under one shared assignment.
    fn unify_both(
        &mut self,
        (first, first_target): (&Expression, bool),
        (second, second_target): (&Expression, bool),
        assignment: Assignment,
        explanation: &mut impl Explain,
    ) -> Vec<Assignment> {
        let mut models = vec![];

        let partial_models = self.unify(
            first,
            first_target,
            assignment,
            explanation.subexplanation(|| "Left operand"),
        );

        for partial_model in partial_models {
            let explanation =
                explanation.subexplanation(|| format!("Right operand under {partial_model}"));
            models.extend(self.unify(second, second_target, partial_model, explanation));
        }

        models
    }

    // Either operand reaching its target is enough; the branches are independent.
    fn unify_either(
        &mut self,
        (first, first_target): (&Expression, bool),
        (second, second_target): (&Expression, bool),
        assignment: Assignment,
        explanation: &mut impl Explain,
    ) -> Vec<Assignment> {
        self.stats.branch_count += 1;

        let mut models = self.unify(
            first,
            first_target,
            assignment.clone(),
            explanation.subexplanation(|| "Left branch"),
        );
        models.extend(self.unify(
            second,
            second_target,
            assignment,
            explanation.subexplanation(|| "Right branch"),
        ));

        models
    }
}
