use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::propositional_logic::{
    evaluate::{Interpretation, TruthValue},
    types::Variable,
};

/// A partial model: the bindings a formula needs to be true.
///
/// Variables that are absent may take either value. Bindings keep the order
/// in which the solver discovered them; equality ignores that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(IndexMap<Variable, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: &Variable) -> Option<bool> {
        self.0.get(variable).copied()
    }

    /// Extends the assignment with `variable ↦ value`.
    ///
    /// Returns `None` when `variable` is already bound to the opposite value.
    pub fn bind(mut self, variable: Variable, value: bool) -> Option<Self> {
        match self.get(&variable) {
            Some(bound) if bound != value => None,
            Some(_) => Some(self),
            None => {
                self.0.insert(variable, value);
                Some(self)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.0.iter().map(|(variable, value)| (*variable, *value))
    }

    /// Whether every binding matches `interpretation`.
    pub fn agrees_with(&self, interpretation: &Interpretation) -> bool {
        self.0
            .iter()
            .all(|(variable, value)| interpretation.get(variable) == Some(TruthValue(*value)))
    }

    /// A total interpretation of `variables` that keeps these bindings and
    /// gives `default` to everything else.
    pub fn complete(&self, variables: &IndexSet<Variable>, default: bool) -> Interpretation {
        Interpretation(
            self.0
                .keys()
                .chain(variables)
                .map(|variable| {
                    let value = self.get(variable).unwrap_or(default);
                    (*variable, TruthValue(value))
                })
                .collect(),
        )
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, bool)>>(iter: T) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(char, bool); N]> for Assignment {
    fn from(bindings: [(char, bool); N]) -> Self {
        bindings
            .into_iter()
            .map(|(name, value)| (Variable(name), value))
            .collect()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings = self
            .iter()
            .map(|(variable, value)| format!("{}{variable}", if value { "" } else { "¬" }))
            .join(", ");

        write!(f, "{{{}}}", bindings)
    }
}
