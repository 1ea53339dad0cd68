/*!
Clause-shaped formulas, aka. disjunctions of literals written in the language of some user.

A [Formula] is either a literal, the constant false (the empty disjunction), or the disjunction of two formulas.
Literals are named boolean atoms, their negations, or multiplicity constraints on a named relation (e.g. that the relation has *some* member).

A clause is written as nested binary disjunctions, peeled from the right.

```rust
# use sat_explain::structures::formula::Formula;
let clause = Formula::disjunction([Formula::atom("p"), Formula::atom("q").not(), Formula::some("r")]);

assert_eq!(clause.to_string(), "p | !q | some r");
assert_eq!(clause.disjuncts().len(), 3);
assert_eq!(Formula::disjunction([]), Formula::False);
```

# Complements

The [Complement] of a multiplicity constraint is another multiplicity constraint where one exists.
So, the complement of `some r` is `no r`, rather than `!some r`.
*/

use crate::structures::literal::Complement;

/// Constraints on the number of members of a relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Multiplicity {
    /// At least one member.
    Some,

    /// No members.
    No,

    /// Exactly one member.
    One,

    /// At most one member.
    Lone,
}

impl Multiplicity {
    /// The multiplicity which holds exactly when `self` does not, if there is such a multiplicity.
    pub fn complement(self) -> Option<Multiplicity> {
        match self {
            Multiplicity::Some => Some(Multiplicity::No),
            Multiplicity::No => Some(Multiplicity::Some),
            Multiplicity::One | Multiplicity::Lone => None,
        }
    }
}

impl std::fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Multiplicity::Some => write!(f, "some"),
            Multiplicity::No => write!(f, "no"),
            Multiplicity::One => write!(f, "one"),
            Multiplicity::Lone => write!(f, "lone"),
        }
    }
}

/// A clause-shaped formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// The empty disjunction.
    False,

    /// A named boolean atom.
    Atom(String),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// A multiplicity constraint on a named relation.
    Multiplicity(Multiplicity, String),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn some(relation: impl Into<String>) -> Self {
        Formula::Multiplicity(Multiplicity::Some, relation.into())
    }

    pub fn no(relation: impl Into<String>) -> Self {
        Formula::Multiplicity(Multiplicity::No, relation.into())
    }

    pub fn one(relation: impl Into<String>) -> Self {
        Formula::Multiplicity(Multiplicity::One, relation.into())
    }

    pub fn lone(relation: impl Into<String>) -> Self {
        Formula::Multiplicity(Multiplicity::Lone, relation.into())
    }

    /// The negation of the formula, with a double negation collapsed.
    ///
    /// A multiplicity with a complement is negated to the complement, so `!some r` is `no r`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Formula::Not(inner) => *inner,
            Formula::Multiplicity(multiplicity, relation) => match multiplicity.complement() {
                Some(complement) => Formula::Multiplicity(complement, relation),
                None => Formula::Not(Box::new(Formula::Multiplicity(multiplicity, relation))),
            },
            other => Formula::Not(Box::new(other)),
        }
    }

    /// The formula with each negation rebuilt through [not](Formula::not).
    ///
    /// Equivalent literals built directly from the variants (e.g. `Not(some r)` and `no r`) have the same normal form.
    pub fn normalised(&self) -> Self {
        match self {
            Formula::Not(inner) => inner.normalised().not(),
            other => other.clone(),
        }
    }

    /// The disjunction of the formula with `other`.
    pub fn or(self, other: Formula) -> Self {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// The disjunction of some formulas, nested to the right, or false if there are no formulas.
    pub fn disjunction(formulas: impl IntoIterator<Item = Formula>) -> Self {
        let mut formulas = formulas.into_iter().collect::<Vec<_>>();
        let Some(mut disjunction) = formulas.pop() else {
            return Formula::False;
        };
        while let Some(formula) = formulas.pop() {
            disjunction = formula.or(disjunction);
        }
        disjunction
    }

    /// Whether the formula is a literal, i.e. is not a disjunction and is not false.
    pub fn is_literal(&self) -> bool {
        !matches!(self, Formula::False | Formula::Or(_, _))
    }

    /// The literals of the formula, read as a clause, from left to right.
    ///
    /// Each disjunction is split into its disjuncts, and the constant false contributes nothing.
    pub fn disjuncts(&self) -> Vec<&Formula> {
        let mut disjuncts = Vec::default();
        let mut todo = vec![self];
        while let Some(formula) = todo.pop() {
            match formula {
                Formula::False => {}
                Formula::Or(left, right) => {
                    todo.push(right);
                    todo.push(left);
                }
                literal => disjuncts.push(literal),
            }
        }
        disjuncts
    }
}

impl Complement for Formula {
    /// Multiplicity constraints use the complement of the multiplicity, if there is one, and otherwise negation is used.
    fn complement(&self) -> Self {
        self.normalised().not()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::False => write!(f, "false"),
            Formula::Atom(name) => write!(f, "{name}"),
            Formula::Not(inner) => match inner.is_literal() {
                true => write!(f, "!{inner}"),
                false => write!(f, "!({inner})"),
            },
            Formula::Multiplicity(multiplicity, relation) => write!(f, "{multiplicity} {relation}"),
            Formula::Or(left, right) => write!(f, "{left} | {right}"),
        }
    }
}
