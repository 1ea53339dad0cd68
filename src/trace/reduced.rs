//! The trace obtained by reducing some other trace with respect to a collection of assumptions.
//!
//! Each clause of a reduced trace notes its [Origin] in the trace it was reduced from.
//! In addition, the assumptions of the reduction and the literals derived from the assumptions by propagation are kept.

use crate::{
    structures::literal::IntLiteral,
    trace::{ClauseStore, ResolutionTrace},
};

/// Where a clause of a reduced trace came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The clause at the given index of the original trace, unchanged.
    Kept(usize),

    /// The clause at the given index of the original trace, with some literals removed by propagation.
    Simplified(usize),

    /// The empty clause, noting the assumptions contradict one another.
    Contradiction,
}

impl Origin {
    /// The index of the clause in the original trace, if any.
    pub fn original(&self) -> Option<usize> {
        match self {
            Origin::Kept(index) | Origin::Simplified(index) => Some(*index),
            Origin::Contradiction => None,
        }
    }
}

/// A resolution trace produced by reduction.
#[derive(Clone, Debug)]
pub struct ReducedTrace {
    store: ClauseStore,
    origins: Vec<Origin>,
    assumptions: Vec<IntLiteral>,
    derived: Vec<(IntLiteral, Option<usize>)>,
}

impl ResolutionTrace for ReducedTrace {
    fn clauses(&self) -> &ClauseStore {
        &self.store
    }
}

impl ReducedTrace {
    /// Soundness: `origins` has an entry for each clause of `store`, and each index in `derived` is an index of `store`.
    pub(crate) fn new(
        store: ClauseStore,
        origins: Vec<Origin>,
        assumptions: Vec<IntLiteral>,
        derived: Vec<(IntLiteral, Option<usize>)>,
    ) -> Self {
        ReducedTrace {
            store,
            origins,
            assumptions,
            derived,
        }
    }

    /// The origin of the clause at `index`.
    pub fn origin(&self, index: usize) -> Option<Origin> {
        match self.store.contains(index) {
            true => self.origins.get(index - 1).copied(),
            false => None,
        }
    }

    /// The literals assumed true by the reduction.
    pub fn assumptions(&self) -> &[IntLiteral] {
        &self.assumptions
    }

    /// The literals found to be true by propagation from the assumptions, in the order found.
    ///
    /// Each literal is paired with the index of the unit clause it was derived from, if that clause is part of the trace.
    pub fn derived(&self) -> &[(IntLiteral, Option<usize>)] {
        &self.derived
    }

    /// Whether the reduction found the assumptions to conflict with the clauses of the original trace (or with one another).
    ///
    /// Note, the conflict of the original trace is kept in the reduced trace, and is not counted here.
    pub fn found_conflict(&self) -> bool {
        self.store.iter().any(|clause| {
            clause.literal_slice().is_empty()
                && !matches!(self.origin(clause.index()), Some(Origin::Kept(_)))
        })
    }
}
