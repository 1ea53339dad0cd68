/*!
The shape of a SAT backend, as seen by the library.

A [SatSolver] takes clauses over integer literals and decides their satisfiability, in the manner of the IPASIR interface.
A [SatProver] is a solver which, in addition, leaves behind a [resolution trace](crate::trace) when a solve is unsatisfiable, and can be asked to shrink the trace with a [ReductionStrategy].

Backends are chosen by the caller, by constructing whichever implementation is wanted.
The library gives one implementation, [ReducedSatProver], which holds a [reduced trace](crate::trace::ReducedTrace) and refuses to solve.

```rust
# use sat_explain::procedures::reduction::TraceReducer;
# use sat_explain::prover::{ReducedSatProver, SatProver, SatSolver};
# use sat_explain::trace::{ResolutionTrace, TraceBuilder};
# use sat_explain::types::err::{ErrorKind, ProverError};
let mut builder = TraceBuilder::default();
builder.axiom([1, 2]).unwrap();
let trace = builder.build();

let reduced = TraceReducer::default().reduce(&trace, [-1]).unwrap();
let mut prover = ReducedSatProver::new(reduced);

assert_eq!(prover.proof().map(|proof| proof.size()), Some(1));
assert_eq!(prover.solve(), Err(ErrorKind::Prover(ProverError::Unsupported("solve"))));

prover.free();
assert!(prover.proof().is_none());
```
*/

mod reduced;
pub use reduced::ReducedSatProver;

use crate::{
    structures::literal::{Atom, IntLiteral},
    trace::{IndexSet, ResolutionTrace},
    types::err::ErrorKind,
};

/// A solver of clauses over integer literals.
pub trait SatSolver {
    /// Ensures atoms `1..=count` are available for use in clauses.
    fn add_variables(&mut self, count: usize) -> Result<(), ErrorKind>;

    /// Adds a clause, returning false if the solver already knows the clause to be unsatisfiable.
    fn add_clause(&mut self, clause: &[IntLiteral]) -> Result<bool, ErrorKind>;

    /// Decides the satisfiability of the clauses added, returning true if satisfiable.
    fn solve(&mut self) -> Result<bool, ErrorKind>;

    /// The value of `atom` on the model found by the most recent satisfiable solve.
    fn value_of(&self, atom: Atom) -> Result<bool, ErrorKind>;

    fn number_of_variables(&self) -> Result<usize, ErrorKind>;

    fn number_of_clauses(&self) -> Result<usize, ErrorKind>;

    /// Releases any resources held by the solver.
    ///
    /// After a call to free, no other method of the solver is expected to succeed.
    fn free(&mut self);
}

/// A solver which records a resolution trace when a solve is unsatisfiable.
pub trait SatProver: SatSolver {
    /// The kind of trace recorded.
    type Proof: ResolutionTrace;

    /// The trace of the most recent unsatisfiable solve, if any.
    fn proof(&self) -> Option<&Self::Proof>;

    /// Shrinks the trace by repeatedly re-solving with the axioms suggested by `strategy`, until the strategy suggests no axioms.
    fn reduce<S: ReductionStrategy>(&mut self, strategy: &mut S) -> Result<(), ErrorKind>;
}

/// A method of choosing axioms to re-solve with, when shrinking a trace.
pub trait ReductionStrategy {
    /// The indices of the axioms of `trace` to re-solve with next, or the empty set to stop.
    fn next<T: ResolutionTrace>(&mut self, trace: &T) -> IndexSet;
}

/// Suggests the [core](ResolutionTrace::core) of a trace, once.
#[derive(Clone, Debug, Default)]
pub struct NaiveStrategy {
    done: bool,
}

impl ReductionStrategy for NaiveStrategy {
    fn next<T: ResolutionTrace>(&mut self, trace: &T) -> IndexSet {
        match self.done {
            true => IndexSet::default(),
            false => {
                self.done = true;
                trace.core()
            }
        }
    }
}
