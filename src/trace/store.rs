//! Storage shared by the clauses of a trace.
//!
//! Clauses are stored in derivation order, and the clause at index *i* (counting from 1) is stored at position *i - 1*.
//!
//! Alongside the clauses, a graph of derivations is built on first request, with an edge from each antecedent to each clause derived from it.
//! The graph is used to answer reachability queries in either direction.

use std::sync::OnceLock;

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{Dfs, Reversed},
};

use crate::{
    structures::{clause::TraceClause, literal::IntLiteral},
    trace::IndexSet,
};

/// A clause as stored.
#[derive(Clone, Debug)]
pub(crate) struct StoredClause {
    pub(crate) literals: Vec<IntLiteral>,
    pub(crate) antecedents: Vec<usize>,
}

/// The clauses of a trace, in derivation order.
#[derive(Debug, Default)]
pub struct ClauseStore {
    clauses: Vec<StoredClause>,

    /// Nodes are weighted by the index of the clause.
    derivations: OnceLock<DiGraph<usize, ()>>,
}

impl ClauseStore {
    /// Stores a clause, returning the index of the clause.
    ///
    /// Soundness: the clause is assumed to have been checked against the structure required of a trace.
    pub(crate) fn push(&mut self, literals: Vec<IntLiteral>, antecedents: Vec<usize>) -> usize {
        self.clauses.push(StoredClause {
            literals,
            antecedents,
        });
        self.derivations.take();
        self.clauses.len()
    }

    /// The number of clauses stored.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether `index` is the index of some clause.
    pub fn contains(&self, index: usize) -> bool {
        0 < index && index <= self.clauses.len()
    }

    /// A view of the clause at `index`, if such a clause exists.
    pub fn get(&self, index: usize) -> Option<TraceClause<'_>> {
        match self.contains(index) {
            true => Some(TraceClause::new(self, index)),
            false => None,
        }
    }

    /// An iterator over views of all clauses, in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = TraceClause<'_>> {
        (1..=self.clauses.len()).map(move |index| TraceClause::new(self, index))
    }

    pub(crate) fn literals_of(&self, index: usize) -> &[IntLiteral] {
        &self.clauses[index - 1].literals
    }

    pub(crate) fn antecedents_of(&self, index: usize) -> &[usize] {
        &self.clauses[index - 1].antecedents
    }

    /// The graph of derivations, built on first request.
    pub fn derivations(&self) -> &DiGraph<usize, ()> {
        self.derivations.get_or_init(|| {
            let mut graph = DiGraph::with_capacity(self.clauses.len(), self.clauses.len());
            for index in 1..=self.clauses.len() {
                graph.add_node(index);
            }
            for (position, clause) in self.clauses.iter().enumerate() {
                for antecedent in &clause.antecedents {
                    graph.add_edge(
                        NodeIndex::new(antecedent - 1),
                        NodeIndex::new(position),
                        (),
                    );
                }
            }
            graph
        })
    }

    /// Every clause derived (transitively) from some clause of `indices`, together with `indices`.
    ///
    /// Indices without a clause are ignored.
    pub fn descendants(&self, indices: &IndexSet) -> IndexSet {
        let graph = self.derivations();
        let mut reached = IndexSet::default();
        let mut dfs = Dfs::empty(graph);

        for index in indices.iter().filter(|index| self.contains(**index)) {
            dfs.move_to(NodeIndex::new(index - 1));
            while let Some(node) = dfs.next(graph) {
                reached.insert(graph[node]);
            }
        }

        reached
    }

    /// Every clause some clause of `indices` was (transitively) derived from, together with `indices`.
    ///
    /// Indices without a clause are ignored.
    pub fn ancestors(&self, indices: &IndexSet) -> IndexSet {
        let graph = self.derivations();
        let reversed = Reversed(graph);
        let mut reached = IndexSet::default();
        let mut dfs = Dfs::empty(reversed);

        for index in indices.iter().filter(|index| self.contains(**index)) {
            dfs.move_to(NodeIndex::new(index - 1));
            while let Some(node) = dfs.next(reversed) {
                reached.insert(graph[node]);
            }
        }

        reached
    }
}

impl Clone for ClauseStore {
    fn clone(&self) -> Self {
        ClauseStore {
            clauses: self.clauses.clone(),
            derivations: OnceLock::new(),
        }
    }
}
