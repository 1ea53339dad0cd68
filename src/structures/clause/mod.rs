//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals, together with the clauses the clause was derived from.
//!
//! A clause is an *axiom* if it has no antecedents, and otherwise a *resolvent* whose antecedents record its derivation.
//!
//! Two implementations of the [Clause] trait are given:
//! - [TraceClause], a read-only view of a clause stored in a [trace](crate::trace).
//! - [ProofNode](crate::structures::proof_tree::ProofNode), a view of a clause in a detached [proof tree](crate::structures::proof_tree).
//!
//! In either case the view is cheap to copy, and antecedents are returned as views of the same kind.
//!
//! ```rust
//! # use sat_explain::structures::clause::Clause;
//! # use sat_explain::trace::{ResolutionTrace, TraceBuilder};
//! let mut builder = TraceBuilder::default();
//! let p = builder.axiom([1, -2]).unwrap();
//! let q = builder.axiom([2]).unwrap();
//! let r = builder.resolvent([1], [p, q]).unwrap();
//! let trace = builder.build();
//!
//! let clause = trace.get(r).unwrap();
//! assert_eq!(clause.size(), 1);
//! assert_eq!(clause.number_of_antecedents(), 2);
//! assert!(!clause.is_axiom());
//! assert!(clause.antecedents().all(|antecedent| antecedent.is_axiom()));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Clauses are compared by structure, never by identity. See [structurally_equal].

mod trace_clause;
pub use trace_clause::TraceClause;

use std::collections::HashSet;

use crate::structures::literal::{Atom, IntLiteral, Literal};

/// The clause trait.
pub trait Clause: Clone {
    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause, in the order stored.
    fn literals(&self) -> impl Iterator<Item = IntLiteral>;

    /// The number of clauses the clause was derived from.
    fn number_of_antecedents(&self) -> usize;

    /// An iterator over the clauses the clause was derived from, in the order recorded.
    fn antecedents(&self) -> impl Iterator<Item = Self>;

    /// An identifier of the clause, unique among clauses of the same store or tree.
    fn identity(&self) -> usize;

    /// The greatest atom in the clause, or `0` for the empty clause.
    fn max_variable(&self) -> Atom {
        self.literals().map(|literal| literal.atom()).max().unwrap_or(0)
    }

    /// Whether the clause is an axiom, i.e. has no antecedents.
    fn is_axiom(&self) -> bool {
        self.number_of_antecedents() == 0
    }

    /// Fills `buffer` with the literals of the clause, returning the filled part of the buffer.
    ///
    /// The buffer is cleared first, and so may be reused between calls to avoid allocation.
    fn to_array<'b>(&self, buffer: &'b mut Vec<IntLiteral>) -> &'b [IntLiteral] {
        buffer.clear();
        buffer.extend(self.literals());
        buffer.as_slice()
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self.literals() {
            dimacs_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            dimacs_string += "0";
        } else {
            dimacs_string.pop();
        }
        dimacs_string
    }
}

/// Whether two clauses have the same literals, and (pairwise, in order) structurally equal antecedents.
///
/// The clauses may be of different kinds, e.g. a clause from a trace and a node of a detached proof tree.
///
/// The comparison walks the antecedents with an explicit stack, so deep derivations do not grow the call stack.
/// Pairs of clauses already compared are skipped, so shared antecedents are compared once.
pub fn structurally_equal<A: Clause, B: Clause>(a: &A, b: &B) -> bool {
    let mut seen: HashSet<(usize, usize)> = HashSet::default();
    let mut todo: Vec<(A, B)> = Vec::default();

    if !shallow_equal(a, b) {
        return false;
    }
    seen.insert((a.identity(), b.identity()));
    todo.extend(a.antecedents().zip(b.antecedents()));

    while let Some((x, y)) = todo.pop() {
        if !seen.insert((x.identity(), y.identity())) {
            continue;
        }
        if !shallow_equal(&x, &y) {
            return false;
        }
        todo.extend(x.antecedents().zip(y.antecedents()));
    }

    true
}

/// Same literals, in the same order, and the same number of antecedents.
fn shallow_equal<A: Clause, B: Clause>(a: &A, b: &B) -> bool {
    a.size() == b.size()
        && a.number_of_antecedents() == b.number_of_antecedents()
        && a.literals().eq(b.literals())
}

/// Feeds the literals and the number of antecedents of a clause to `state`.
///
/// Consistent with [structurally_equal]: structurally equal clauses hash equally.
pub fn structural_hash<C: Clause, H: std::hash::Hasher>(clause: &C, state: &mut H) {
    use std::hash::Hash;

    clause.size().hash(state);
    for literal in clause.literals() {
        literal.hash(state);
    }
    clause.number_of_antecedents().hash(state);
}
