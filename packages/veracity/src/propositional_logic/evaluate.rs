use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::propositional_logic::types::{Expression, Variable};

/// A total assignment of truth values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation(pub IndexMap<Variable, TruthValue>);

impl Interpretation {
    /// All `2^n` interpretations of `variables`, in binary counting order with
    /// the first variable as the most significant bit.
    pub fn generate_all(variables: IndexSet<Variable>) -> impl Iterator<Item = Interpretation> {
        let n = variables.len();
        let interpretation_count = 1usize << n;

        (0..interpretation_count).map(move |i| {
            Interpretation(
                variables
                    .iter()
                    .enumerate()
                    .map(|(bit, variable)| (*variable, TruthValue((i >> (n - 1 - bit)) & 1 == 1)))
                    .collect(),
            )
        })
    }

    pub fn get(&self, variable: &Variable) -> Option<TruthValue> {
        self.0.get(variable).copied()
    }
}

impl Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let variable_list = self
            .0
            .iter()
            .sorted_by_key(|(variable, _)| **variable)
            .map(|(variable, TruthValue(value))| {
                format!("{}{variable}", if *value { "" } else { "¬" })
            })
            .join(", ");

        write!(f, "{{{}}}", variable_list)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TruthValue(pub bool);

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self.0 { "𝐓" } else { "𝐅" })
    }
}

pub trait Evaluate {
    /// `None` when evaluation reaches a variable the interpretation does not bind.
    fn evaluate(&self, interpretation: &Interpretation) -> Option<TruthValue>;
}

impl Evaluate for Variable {
    fn evaluate(&self, interpretation: &Interpretation) -> Option<TruthValue> {
        interpretation.get(self)
    }
}

impl Evaluate for Expression {
    fn evaluate(&self, interpretation: &Interpretation) -> Option<TruthValue> {
        let value = match self {
            Expression::Literal(value) => *value,
            Expression::Variable(variable) => variable.evaluate(interpretation)?.0,
            Expression::Negation(operand) => !operand.evaluate(interpretation)?.0,
            Expression::Conjunction(left, right) => {
                left.evaluate(interpretation)?.0 && right.evaluate(interpretation)?.0
            }
            Expression::Disjunction(left, right) => {
                left.evaluate(interpretation)?.0 || right.evaluate(interpretation)?.0
            }
            Expression::Implication(premise, conclusion) => {
                !premise.evaluate(interpretation)?.0 || conclusion.evaluate(interpretation)?.0
            }
        };

        Some(TruthValue(value))
    }
}
