/*!
Resolution traces, aka. the proof left behind by an unsatisfiable solve.

A trace is an ordered collection of [clauses](crate::structures::clause), indexed from 1, such that every antecedent of the clause at index *i* has an index strictly less than *i*.
The clauses of a trace are partitioned into *axioms*, without antecedents, and *resolvents*.

Any structure which stores its clauses in a [ClauseStore] may implement [ResolutionTrace], and in return receives the queries of the trait.
Clauses enter a store only through a [TraceBuilder] (or [Trace::from_parts]), where each clause is checked as it is recorded, and so every store satisfies the structure above.
A SAT backend, then, hands over a trace by recording its clauses with a builder, and a structure of its own may implement [ResolutionTrace] by holding the resulting [Trace] (or its store).

Two implementations are given:
- [Trace], the trace of a solve, as built by a SAT backend through a [TraceBuilder].
- [ReducedTrace], a trace obtained by [reduction](crate::procedures::reduction) of some other trace.

Once built, a trace is never mutated, and so may be read from many places at once.

# Queries

Queries over sets of indices take and return an [IndexSet].
Indices without a clause are ignored by each query.

```rust
# use sat_explain::trace::{IndexSet, ResolutionTrace, TraceBuilder};
let mut builder = TraceBuilder::default();
let p = builder.axiom([1]).unwrap();
let q = builder.axiom([-1, 2]).unwrap();
let r = builder.axiom([-2]).unwrap();
let s = builder.resolvent([2], [p, q]).unwrap();
let t = builder.resolvent([], [s, r]).unwrap();
let trace = builder.build();

assert_eq!(trace.axioms(), IndexSet::from([p, q, r]));
assert_eq!(trace.resolvents(), IndexSet::from([s, t]));
assert_eq!(trace.conflict(), Some(t));
assert_eq!(trace.core(), IndexSet::from([p, q, r]));
assert_eq!(trace.reachable(&IndexSet::from([q])), IndexSet::from([q, s, t]));
assert_eq!(trace.backward_reachable(&IndexSet::from([s])), IndexSet::from([p, q, s]));
```
*/

mod builder;
pub use builder::{Trace, TraceBuilder};
pub(crate) use builder::check_clause;

mod reduced;
pub use reduced::{Origin, ReducedTrace};

mod store;
pub use store::ClauseStore;

use std::collections::BTreeSet;

use crate::{
    structures::{
        clause::{Clause, TraceClause},
        proof_tree::ProofTree,
    },
    types::err::{self},
};

/// A set of clause indices, iterated in ascending order.
pub type IndexSet = BTreeSet<usize>;

/// The read interface of a resolution trace.
pub trait ResolutionTrace {
    /// The storage of the clauses of the trace.
    fn clauses(&self) -> &ClauseStore;

    /// The number of clauses in the trace.
    fn size(&self) -> usize {
        self.clauses().len()
    }

    /// The clause at `index`, for `1 ≤ index ≤ size`.
    fn get(&self, index: usize) -> Option<TraceClause<'_>> {
        self.clauses().get(index)
    }

    /// An iterator over the clauses of the trace, in derivation order.
    fn iter(&self) -> impl Iterator<Item = TraceClause<'_>> {
        self.clauses().iter()
    }

    /// An iterator over the clauses at `indices`, in derivation order.
    fn iter_indices<'a>(&'a self, indices: &'a IndexSet) -> impl Iterator<Item = TraceClause<'a>> {
        indices.iter().filter_map(|index| self.get(*index))
    }

    /// An iterator over the clauses at `indices`, in reverse derivation order.
    fn rev_iter_indices<'a>(
        &'a self,
        indices: &'a IndexSet,
    ) -> impl Iterator<Item = TraceClause<'a>> {
        indices.iter().rev().filter_map(|index| self.get(*index))
    }

    /// The indices of all axioms.
    fn axioms(&self) -> IndexSet {
        self.iter()
            .filter(|clause| clause.is_axiom())
            .map(|clause| clause.index())
            .collect()
    }

    /// The indices of all resolvents.
    fn resolvents(&self) -> IndexSet {
        self.iter()
            .filter(|clause| !clause.is_axiom())
            .map(|clause| clause.index())
            .collect()
    }

    /// The index of the earliest empty clause, if any.
    fn conflict(&self) -> Option<usize> {
        self.iter()
            .find(|clause| clause.size() == 0)
            .map(|clause| clause.index())
    }

    /// The axioms used to derive the [conflict](ResolutionTrace::conflict) of the trace.
    ///
    /// Empty if the trace has no empty clause.
    fn core(&self) -> IndexSet {
        match self.conflict() {
            None => IndexSet::default(),
            Some(conflict) => self
                .backward_reachable(&IndexSet::from([conflict]))
                .into_iter()
                .filter(|index| self.get(*index).is_some_and(|clause| clause.is_axiom()))
                .collect(),
        }
    }

    /// The indices of `indices` together with every clause derived (transitively) from some clause of `indices`.
    fn reachable(&self, indices: &IndexSet) -> IndexSet {
        self.clauses().descendants(indices)
    }

    /// The indices of `indices` together with every clause used (transitively) to derive some clause of `indices`.
    fn backward_reachable(&self, indices: &IndexSet) -> IndexSet {
        self.clauses().ancestors(indices)
    }

    /// The indices of `indices` together with every resolvent which may be learnt from the clauses of `indices`.
    ///
    /// That is, every resolvent whose antecedents are each in `indices` or are themselves learnable.
    fn learnable(&self, indices: &IndexSet) -> IndexSet {
        let mut learnt: IndexSet = indices
            .iter()
            .copied()
            .filter(|index| self.clauses().contains(*index))
            .collect();

        let Some(first) = learnt.first().copied() else {
            return learnt;
        };

        for index in (first + 1)..=self.size() {
            if let Some(clause) = self.get(index) {
                if !clause.is_axiom()
                    && clause
                        .antecedent_indices()
                        .iter()
                        .all(|antecedent| learnt.contains(antecedent))
                {
                    learnt.insert(index);
                }
            }
        }

        learnt
    }

    /// The indices of `indices` together with every resolvent whose antecedents are each in `indices`.
    fn directly_learnable(&self, indices: &IndexSet) -> IndexSet {
        let mut learnt: IndexSet = indices
            .iter()
            .copied()
            .filter(|index| self.clauses().contains(*index))
            .collect();

        let Some(first) = learnt.first().copied() else {
            return learnt;
        };

        for clause in self.iter().skip(first) {
            if !clause.is_axiom()
                && clause
                    .antecedent_indices()
                    .iter()
                    .all(|antecedent| indices.contains(antecedent))
            {
                learnt.insert(clause.index());
            }
        }

        learnt
    }

    /// A detached copy of the clause at `index` and its derivation.
    fn proof_tree(&self, index: usize) -> Option<ProofTree> {
        self.get(index).map(|clause| ProofTree::from_clause(&clause))
    }
}

/// Checks each clause of a trace against the structure required of a trace.
///
/// Specifically, that each antecedent of a clause exists and precedes the clause.
pub fn check_structure(trace: &impl ResolutionTrace) -> Result<(), err::ErrorKind> {
    for clause in trace.iter() {
        for antecedent in clause.antecedent_indices() {
            if *antecedent == 0 || *antecedent >= clause.index() {
                log::warn!(target: crate::misc::log::targets::TRACE, "Antecedent {antecedent} of {} is out of order", clause.index());
                return Err(err::TraceError::AntecedentOrder {
                    index: clause.index(),
                    antecedent: *antecedent,
                }
                .into());
            }
        }
    }
    Ok(())
}
