use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use termtree::Tree;

/// A sink for the reasoning steps of the lexer, parser, simplifier and solver.
///
/// Messages are passed as closures so that [`DiscardedExplanation`] never pays
/// for formatting them.
pub trait Explain {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S);

    fn subexplanation<S: Into<String>>(&mut self, description: impl FnOnce() -> S) -> &mut Self;

    fn with_subexplanation<S: Into<String>, T>(
        &mut self,
        description: impl FnOnce() -> S,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T {
        function(self.subexplanation(description))
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, EnumAsInner)]
enum ExplanationComponent {
    Step(String),
    Explanation(Explanation),
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Explanation {
    description: String,
    components: Vec<ExplanationComponent>,
}

impl Explanation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All steps of the tree, depth first.
    pub fn steps(&self) -> Vec<&str> {
        self.components
            .iter()
            .flat_map(|component| match component {
                ExplanationComponent::Step(step) => vec![step.as_str()],
                ExplanationComponent::Explanation(explanation) => explanation.steps(),
            })
            .collect()
    }

    pub fn get_tree(&self) -> Tree<String> {
        let leaves = self.components.iter().map(|component| match component {
            ExplanationComponent::Step(step) => Tree::new(step.clone()),
            ExplanationComponent::Explanation(explanation) => explanation.get_tree(),
        });

        Tree::new(self.description.clone()).with_leaves(leaves)
    }
}

impl Explain for Explanation {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S) {
        let step = ExplanationComponent::Step(step().into());

        if self.components.last() != Some(&step) {
            self.components.push(step);
        }
    }

    fn subexplanation<S: Into<String>>(&mut self, description: impl FnOnce() -> S) -> &mut Self {
        let explanation = Explanation::new(description());
        self.components
            .push(ExplanationComponent::Explanation(explanation));

        self.components
            .last_mut()
            .and_then(ExplanationComponent::as_explanation_mut)
            .unwrap_or_else(|| unreachable!("a subexplanation was just pushed"))
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\n<pre>")?;
        write!(f, "{}", self.get_tree())?;
        writeln!(f, "</pre>")
    }
}

/// An [`Explain`] sink that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardedExplanation;

impl Explain for DiscardedExplanation {
    fn step<S: Into<String>>(&mut self, _step: impl FnOnce() -> S) {}

    fn subexplanation<S: Into<String>>(&mut self, _description: impl FnOnce() -> S) -> &mut Self {
        self
    }
}
