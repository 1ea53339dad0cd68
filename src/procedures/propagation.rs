/*!
Unit propagation over a conjunction of clause-shaped formulas, given some literal known to be true.

Each clause of the conjunction is simplified in turn:
1. A clause containing the literal is satisfied, and dropped.
2. Otherwise, if the clause contains the [complement](crate::structures::literal::Complement) of the literal, the complement is removed and the remaining literals are disjoined again.
   If no literals remain the result is the empty clause (false), which is kept --- as it signals a conflict.
3. Otherwise, the clause is kept as is.

Satisfaction is checked first, so a clause containing both the literal and its complement is dropped.

```rust
# use sat_explain::procedures::propagation::propagate;
let conjunctions: Vec<Vec<i32>> = vec![vec![1, 2, 3], vec![-1, 4], vec![1, -4]];
assert_eq!(propagate(conjunctions, &1), vec![vec![4]]);

assert_eq!(propagate(vec![vec![-1]], &1), vec![Vec::<i32>::new()]);
```

The procedure is written for any [ClauseShape].
Shapes are given for [formulas](crate::structures::formula::Formula), and for clauses as vectors of [integer literals](crate::structures::literal::IntLiteral).

# Complements

By default the complement of a literal is given by its implementation of [Complement].
As the complement of some kinds of literal is a matter of interpretation, [propagate_with] takes the complement as a parameter.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        literal::{Complement, IntLiteral},
    },
};

/// Something which may be read as a disjunction of literals, and written from one.
pub trait ClauseShape: Clone + Eq + std::hash::Hash + std::fmt::Debug {
    /// The kind of literal the shape is a disjunction of.
    type Literal: Clone + Eq + std::fmt::Debug;

    /// The literals of the clause.
    fn clause_literals(&self) -> Vec<Self::Literal>;

    /// The disjunction of `literals`, which is the empty clause if there are no literals.
    fn from_literals(literals: Vec<Self::Literal>) -> Self;

    /// The form in which `literal` is compared with the literals of a clause.
    fn literal_form(literal: &Self::Literal) -> Self::Literal {
        literal.clone()
    }
}

impl ClauseShape for Formula {
    type Literal = Formula;

    fn clause_literals(&self) -> Vec<Formula> {
        self.disjuncts().into_iter().map(Formula::normalised).collect()
    }

    fn from_literals(literals: Vec<Formula>) -> Self {
        Formula::disjunction(literals)
    }

    fn literal_form(literal: &Formula) -> Formula {
        literal.normalised()
    }
}

impl ClauseShape for Vec<IntLiteral> {
    type Literal = IntLiteral;

    fn clause_literals(&self) -> Vec<IntLiteral> {
        self.clone()
    }

    fn from_literals(literals: Vec<IntLiteral>) -> Self {
        literals
    }
}

/// The result of simplifying a single clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Simplification<C> {
    /// The clause contains the literal.
    Satisfied,

    /// The clause with the complement of the literal removed.
    Reduced(C),

    /// The clause contains neither the literal nor its complement.
    Unchanged,
}

/// Simplifies `clause` given `literal` is true, where `complement` is the complement of `literal`.
pub fn simplify<C: ClauseShape>(
    clause: &C,
    literal: &C::Literal,
    complement: &C::Literal,
) -> Simplification<C> {
    let literals = clause.clause_literals();
    let literal = C::literal_form(literal);
    let complement = C::literal_form(complement);

    if literals.contains(&literal) {
        Simplification::Satisfied
    } else if literals.contains(&complement) {
        let remaining = literals
            .into_iter()
            .filter(|other| *other != complement)
            .collect();
        Simplification::Reduced(C::from_literals(remaining))
    } else {
        Simplification::Unchanged
    }
}

/// Propagates `literal` through `conjunctions`, using the complement given by the literal.
///
/// See [propagate_with].
pub fn propagate<C>(conjunctions: impl IntoIterator<Item = C>, literal: &C::Literal) -> Vec<C>
where
    C: ClauseShape,
    C::Literal: Complement,
{
    propagate_with(conjunctions, literal, <C::Literal as Complement>::complement)
}

/// Propagates `literal` through `conjunctions`, with `complement` giving the complement of `literal`.
///
/// The result is a set of clauses, kept in the order clauses were first found.
pub fn propagate_with<C, F>(
    conjunctions: impl IntoIterator<Item = C>,
    literal: &C::Literal,
    complement: F,
) -> Vec<C>
where
    C: ClauseShape,
    F: Fn(&C::Literal) -> C::Literal,
{
    let complement = complement(literal);

    let mut seen: HashSet<C> = HashSet::default();
    let mut simplified = Vec::default();

    for clause in conjunctions {
        let kept = match simplify(&clause, literal, &complement) {
            Simplification::Satisfied => {
                log::trace!(target: targets::PROPAGATION, "{clause:?} satisfied by {literal:?}");
                continue;
            }

            Simplification::Reduced(reduced) => {
                log::trace!(target: targets::PROPAGATION, "{clause:?} reduced to {reduced:?}");
                reduced
            }

            Simplification::Unchanged => clause,
        };

        if seen.insert(kept.clone()) {
            simplified.push(kept);
        }
    }

    simplified
}
