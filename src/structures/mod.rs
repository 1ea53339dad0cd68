//! Key structures, such as literals, clauses, and detached proof trees.
//!
//! Most structures are made of a trait to capture the key features of the structure and one or more implementations of the trait.
//!
//! # Other structures without a trait
//!
//! ## Formulas
//!
//! A (conjunctive normal form) formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! In the library a formula is most often found as the axioms of a [trace](crate::trace).
//!
//! In contrast, a [formula](formula::Formula) in the language of some user is clause-shaped: a disjunction of literals, where a literal may be a constraint on some structure rather than a boolean atom.
//! Conjunctions of such formulas are kept as a sequence of formulas, e.g. when [propagating](crate::procedures::propagation) some literal.

pub mod clause;
pub mod formula;
pub mod literal;
pub mod proof_tree;
