use std::fmt::Display;

use indexmap::IndexSet;
use strum::{EnumIter, IntoEnumIterator};
use termtree::Tree;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub char);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Not => '¬',
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Implies => '→',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Operator::iter().find(|operator| operator.symbol() == symbol)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Token {
    Variable(Variable),
    Operator(Operator),
    LParen,
    RParen,
    End,
}

/// A propositional formula.
///
/// The right-hand side of an implication is always a bare variable; literals
/// are never produced by the parser, only by simplification.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Expression {
    Literal(bool),
    Variable(Variable),
    Negation(Box<Expression>),
    Conjunction(Box<Expression>, Box<Expression>),
    Disjunction(Box<Expression>, Box<Expression>),
    Implication(Box<Expression>, Variable),
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::Variable(variable)
    }
}

impl Expression {
    pub fn negation(operand: Expression) -> Self {
        Expression::Negation(Box::new(operand))
    }

    pub fn conjunction(left: Expression, right: Expression) -> Self {
        Expression::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Expression, right: Expression) -> Self {
        Expression::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn implication(premise: Expression, conclusion: Variable) -> Self {
        Expression::Implication(Box::new(premise), conclusion)
    }

    pub fn symbol(&self) -> String {
        match self {
            Expression::Literal(true) => "⊤".to_owned(),
            Expression::Literal(false) => "⊥".to_owned(),
            Expression::Variable(variable) => variable.to_string(),
            Expression::Negation(_) => Operator::Not.symbol().to_string(),
            Expression::Conjunction(_, _) => Operator::And.symbol().to_string(),
            Expression::Disjunction(_, _) => Operator::Or.symbol().to_string(),
            Expression::Implication(_, _) => Operator::Implies.symbol().to_string(),
        }
    }

    /// Whether `self` is syntactically `¬other`.
    pub fn is_negation_of(&self, other: &Expression) -> bool {
        matches!(self, Expression::Negation(operand) if operand.as_ref() == other)
    }

    /// Variables in order of first occurrence, left to right.
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut variables = IndexSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut IndexSet<Variable>) {
        match self {
            Expression::Literal(_) => {}
            Expression::Variable(variable) => {
                variables.insert(*variable);
            }
            Expression::Negation(operand) => operand.collect_variables(variables),
            Expression::Conjunction(left, right) | Expression::Disjunction(left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
            Expression::Implication(premise, conclusion) => {
                premise.collect_variables(variables);
                variables.insert(*conclusion);
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        let symbol = self.symbol();

        match self {
            Expression::Literal(_) | Expression::Variable(_) => Tree::new(symbol),
            Expression::Negation(operand) => Tree::new(symbol).with_leaves([operand.get_tree()]),
            Expression::Conjunction(left, right) | Expression::Disjunction(left, right) => {
                Tree::new(symbol).with_leaves([left.get_tree(), right.get_tree()])
            }
            Expression::Implication(premise, conclusion) => Tree::new(symbol)
                .with_leaves([premise.get_tree(), Tree::new(conclusion.to_string())]),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Variable(variable) => write!(f, "{variable}"),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::End => write!(f, "end of input"),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(_) | Expression::Variable(_) => write!(f, "{}", self.symbol()),
            Expression::Negation(operand) => write!(f, "(¬{operand})"),
            Expression::Conjunction(left, right) => write!(f, "({left} ∧ {right})"),
            Expression::Disjunction(left, right) => write!(f, "({left} ∨ {right})"),
            Expression::Implication(premise, conclusion) => {
                write!(f, "({premise} → {conclusion})")
            }
        }
    }
}
