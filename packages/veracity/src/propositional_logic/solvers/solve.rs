use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    explanation::Explain,
    propositional_logic::{assignment::Assignment, parser::parse_with_explanation, types::Expression},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Fold constant sub-expressions before searching.
    pub simplify: bool,
    /// Drop models that are identical to an earlier one.
    pub deduplicate: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            simplify: true,
            deduplicate: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolverStats {
    pub branch_count: usize,
    pub conflict_count: usize,
    pub model_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Partial models in discovery order.
    pub models: Vec<Assignment>,
    pub stats: SolverStats,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        !self.models.is_empty()
    }
}

/// Anything a solver accepts: formula text, or an already built expression.
pub trait IntoExpression {
    fn into_expression(self, explanation: &mut impl Explain) -> Result<Expression, Error>;
}

impl IntoExpression for &str {
    fn into_expression(self, explanation: &mut impl Explain) -> Result<Expression, Error> {
        parse_with_explanation(self, explanation)
    }
}

impl IntoExpression for String {
    fn into_expression(self, explanation: &mut impl Explain) -> Result<Expression, Error> {
        self.as_str().into_expression(explanation)
    }
}

impl IntoExpression for Expression {
    fn into_expression(self, _explanation: &mut impl Explain) -> Result<Expression, Error> {
        Ok(self)
    }
}

impl IntoExpression for &Expression {
    fn into_expression(self, _explanation: &mut impl Explain) -> Result<Expression, Error> {
        Ok(self.clone())
    }
}

pub trait Solve {
    fn solve(&self, expression: &Expression, explanation: &mut impl Explain) -> Solution;

    fn solve_input(
        &self,
        input: impl IntoExpression,
        explanation: &mut impl Explain,
    ) -> Result<Solution, Error> {
        let expression = input.into_expression(explanation)?;

        Ok(self.solve(&expression, explanation))
    }
}
