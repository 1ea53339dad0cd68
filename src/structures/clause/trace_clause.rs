//! A view of a clause stored in a trace.

use crate::{
    structures::{
        clause::{structural_hash, structurally_equal, Clause},
        literal::{Atom, IntLiteral, Literal},
    },
    trace::ClauseStore,
};

/// A read-only view of the clause at some index of a [ClauseStore].
///
/// The view borrows the store, and so many views of the same store may be held at once.
#[derive(Clone, Copy)]
pub struct TraceClause<'t> {
    store: &'t ClauseStore,
    index: usize,
}

impl<'t> TraceClause<'t> {
    /// A view of the clause at `index`.
    ///
    /// Soundness: `index` must be a valid index of `store`.
    pub(crate) fn new(store: &'t ClauseStore, index: usize) -> Self {
        TraceClause { store, index }
    }

    /// The index of the clause in its trace.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The literals of the clause, ordered by atom.
    pub fn literal_slice(&self) -> &'t [IntLiteral] {
        self.store.literals_of(self.index)
    }

    /// The indices of the antecedents of the clause, in the order recorded.
    pub fn antecedent_indices(&self) -> &'t [usize] {
        self.store.antecedents_of(self.index)
    }
}

impl Clause for TraceClause<'_> {
    fn size(&self) -> usize {
        self.literal_slice().len()
    }

    fn literals(&self) -> impl Iterator<Item = IntLiteral> {
        self.literal_slice().iter().copied()
    }

    fn number_of_antecedents(&self) -> usize {
        self.antecedent_indices().len()
    }

    fn antecedents(&self) -> impl Iterator<Item = Self> {
        let store = self.store;
        self.antecedent_indices()
            .iter()
            .map(move |index| TraceClause::new(store, *index))
    }

    fn identity(&self) -> usize {
        self.index
    }

    /// Literals are stored ordered by atom, so the greatest atom is that of the last literal.
    fn max_variable(&self) -> Atom {
        self.literal_slice().last().map_or(0, |literal| literal.atom())
    }
}

impl PartialEq for TraceClause<'_> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl Eq for TraceClause<'_> {}

impl std::hash::Hash for TraceClause<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        structural_hash(self, state)
    }
}

impl std::fmt::Debug for TraceClause<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceClause")
            .field("index", &self.index)
            .field("literals", &self.literal_slice())
            .field("antecedents", &self.antecedent_indices())
            .finish()
    }
}
