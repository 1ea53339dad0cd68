//! A prover holding a reduced trace, for callers who want the trace and nothing else.
//!
//! Every request to solve is refused with [ProverError::Unsupported], and once freed every request (other than for the proof, which is then absent) is refused with [ProverError::Freed].

use crate::{
    prover::{ReductionStrategy, SatProver, SatSolver},
    structures::literal::{Atom, IntLiteral},
    trace::ReducedTrace,
    types::err::{ErrorKind, ProverError},
};

#[derive(Clone, Debug)]
pub struct ReducedSatProver {
    proof: Option<ReducedTrace>,
}

impl ReducedSatProver {
    pub fn new(proof: ReducedTrace) -> Self {
        ReducedSatProver { proof: Some(proof) }
    }

    /// The error for `operation`, given whether the prover has been freed.
    fn refuse<T>(&self, operation: &'static str) -> Result<T, ErrorKind> {
        match self.proof {
            Some(_) => Err(ProverError::Unsupported(operation).into()),
            None => Err(ProverError::Freed.into()),
        }
    }
}

impl SatSolver for ReducedSatProver {
    fn add_variables(&mut self, _count: usize) -> Result<(), ErrorKind> {
        self.refuse("add_variables")
    }

    fn add_clause(&mut self, _clause: &[IntLiteral]) -> Result<bool, ErrorKind> {
        self.refuse("add_clause")
    }

    fn solve(&mut self) -> Result<bool, ErrorKind> {
        self.refuse("solve")
    }

    fn value_of(&self, _atom: Atom) -> Result<bool, ErrorKind> {
        self.refuse("value_of")
    }

    fn number_of_variables(&self) -> Result<usize, ErrorKind> {
        self.refuse("number_of_variables")
    }

    fn number_of_clauses(&self) -> Result<usize, ErrorKind> {
        self.refuse("number_of_clauses")
    }

    fn free(&mut self) {
        self.proof = None;
    }
}

impl SatProver for ReducedSatProver {
    type Proof = ReducedTrace;

    fn proof(&self) -> Option<&ReducedTrace> {
        self.proof.as_ref()
    }

    fn reduce<S: ReductionStrategy>(&mut self, _strategy: &mut S) -> Result<(), ErrorKind> {
        self.refuse("reduce")
    }
}
