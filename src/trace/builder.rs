//! Building a trace, clause by clause.
//!
//! A SAT backend records each clause of a solve with a [TraceBuilder], in the order the clauses were derived.
//! Each clause is checked as it is recorded, and so a structural error is noted as early as possible.
//!
//! ```rust
//! # use sat_explain::trace::TraceBuilder;
//! # use sat_explain::types::err::{ErrorKind, TraceError};
//! let mut builder = TraceBuilder::default();
//! let p = builder.axiom([2, -1]).unwrap();
//!
//! assert_eq!(
//!     builder.resolvent([1], [p, 3]),
//!     Err(ErrorKind::Trace(TraceError::AntecedentOrder { index: 2, antecedent: 3 }))
//! );
//! ```

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::literal::{by_atom, IntLiteral},
    trace::{ClauseStore, IndexSet, ResolutionTrace},
    types::err::{self, ErrorKind},
};

/// The resolution trace of an unsatisfiable solve.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    store: ClauseStore,
}

impl ResolutionTrace for Trace {
    fn clauses(&self) -> &ClauseStore {
        &self.store
    }
}

impl Trace {
    /// A trace from clauses given as pairs of literals and antecedent indices, with `axioms` the indices the backend reports as axioms.
    ///
    /// Each clause of `axioms` must have no antecedents, in addition to the checks made by a [TraceBuilder].
    pub fn from_parts(
        clauses: impl IntoIterator<Item = (Vec<IntLiteral>, Vec<usize>)>,
        axioms: &IndexSet,
    ) -> Result<Self, ErrorKind> {
        let mut builder = TraceBuilder::default();
        for (literals, antecedents) in clauses {
            let index = builder.store.len() + 1;
            if axioms.contains(&index) && !antecedents.is_empty() {
                log::warn!(target: targets::TRACE, "Axiom {index} has antecedents {antecedents:?}");
                return Err(err::TraceError::AxiomWithAntecedents { index }.into());
            }
            builder.record(literals, antecedents)?;
        }
        Ok(builder.build())
    }
}

/// A builder of [Trace]s.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    store: ClauseStore,
}

impl TraceBuilder {
    /// Records an axiom, returning the index of the axiom.
    pub fn axiom(
        &mut self,
        literals: impl IntoIterator<Item = IntLiteral>,
    ) -> Result<usize, ErrorKind> {
        self.record(literals.into_iter().collect(), Vec::default())
    }

    /// Records a clause derived from the clauses at `antecedents`, returning the index of the clause.
    ///
    /// If `antecedents` is empty the clause is recorded as an axiom.
    pub fn resolvent(
        &mut self,
        literals: impl IntoIterator<Item = IntLiteral>,
        antecedents: impl IntoIterator<Item = usize>,
    ) -> Result<usize, ErrorKind> {
        self.record(
            literals.into_iter().collect(),
            antecedents.into_iter().collect(),
        )
    }

    /// The number of clauses recorded.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The trace of recorded clauses.
    pub fn build(self) -> Trace {
        log::debug!(target: targets::TRACE, "Built a trace of {} clauses", self.store.len());
        Trace { store: self.store }
    }

    fn record(
        &mut self,
        mut literals: Vec<IntLiteral>,
        antecedents: Vec<usize>,
    ) -> Result<usize, ErrorKind> {
        let index = self.store.len() + 1;
        check_clause(index, &literals, &antecedents)?;

        literals.sort_unstable_by(by_atom);
        log::trace!(target: targets::TRACE, "Clause {index}: {literals:?} from {antecedents:?}");
        Ok(self.store.push(literals, antecedents))
    }
}

/// Checks a clause to be stored at `index` against the structure required of a trace.
pub(crate) fn check_clause(
    index: usize,
    literals: &[IntLiteral],
    antecedents: &[usize],
) -> Result<(), err::TraceError> {
    let mut seen: HashSet<IntLiteral> = HashSet::with_capacity(literals.len());
    for literal in literals {
        if *literal == 0 {
            return Err(err::TraceError::ZeroLiteral { index });
        }
        if *literal == IntLiteral::MIN {
            return Err(err::TraceError::LiteralOutOfRange { index });
        }
        if !seen.insert(*literal) {
            return Err(err::TraceError::DuplicateLiteral {
                index,
                literal: *literal,
            });
        }
    }

    for antecedent in antecedents {
        if *antecedent == 0 || *antecedent >= index {
            return Err(err::TraceError::AntecedentOrder {
                index,
                antecedent: *antecedent,
            });
        }
    }

    Ok(())
}
