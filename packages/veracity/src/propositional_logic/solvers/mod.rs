use crate::{
    error::Error,
    explanation::DiscardedExplanation,
    propositional_logic::{assignment::Assignment, types::Expression},
};

use self::{
    solve::{IntoExpression, Solve},
    unification::UnificationSolver,
};

pub mod solve;
pub mod unification;

/// Every partial model of `input` with the default solver options.
///
/// Text is parsed first; an unsatisfiable formula yields no models and a
/// tautology yields a single empty model.
pub fn solve(input: impl IntoExpression) -> Result<Vec<Assignment>, Error> {
    UnificationSolver::default()
        .solve_input(input, &mut DiscardedExplanation)
        .map(|solution| solution.models)
}

pub fn solve_expression(expression: &Expression) -> Vec<Assignment> {
    UnificationSolver::default()
        .solve(expression, &mut DiscardedExplanation)
        .models
}
