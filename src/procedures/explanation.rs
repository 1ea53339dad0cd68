//! Explanations of the clauses of a reduced trace in terms of the trace the reduced trace was obtained from.
//!
//! In a reduced trace, a [simplified](crate::trace::Origin::Simplified) clause has lost some literals, and some antecedents.
//! So, the derivation of the clause in the reduced trace says little about why the clause holds.
//! An explanation of a clause is the derivation of the clause in the reduced trace, with the derivation of each simplified clause in the original trace grafted next to the antecedents the clause kept.
//! So, the explanation of a conflict found by a cascade of propagations contains each unit of the cascade, and the original derivation of each clause the cascade shrank.
//!
//! The explanation is a detached [proof tree](crate::structures::proof_tree), and neither trace is changed.

use crate::{
    misc::log::targets::{self},
    structures::proof_tree::ProofTree,
    trace::{Origin, ReducedTrace, ResolutionTrace},
    types::err::{self, ErrorKind},
};

/// An explanation of the clause at `index` of `reduced`, where `reduced` was obtained from `original`.
pub fn explain<T: ResolutionTrace>(
    original: &T,
    reduced: &ReducedTrace,
    index: usize,
) -> Result<ProofTree, ErrorKind> {
    let Some(clause) = reduced.get(index) else {
        return Err(err::TraceError::MissingClause { index }.into());
    };

    let (mut tree, copied) = ProofTree::from_clause_indexed(&clause);

    let mut copied = copied.into_iter().collect::<Vec<_>>();
    copied.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    for (reduced_index, key) in copied {
        let Some(Origin::Simplified(original_index)) = reduced.origin(reduced_index) else {
            continue;
        };
        let Some(derivation) = original.proof_tree(original_index) else {
            return Err(err::TraceError::MissingClause {
                index: original_index,
            }
            .into());
        };

        log::trace!(target: targets::PROOF_TREE, "Explaining {reduced_index} by {original_index}");
        tree.graft(key, &derivation)?;
    }

    Ok(tree)
}

/// An explanation of the conflict found by reduction, if some conflict was found.
pub fn explain_conflict<T: ResolutionTrace>(
    original: &T,
    reduced: &ReducedTrace,
) -> Result<Option<ProofTree>, ErrorKind> {
    match reduced.conflict() {
        None => Ok(None),
        Some(conflict) => explain(original, reduced, conflict).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        procedures::reduction::TraceReducer,
        structures::clause::{structurally_equal, Clause},
        trace::TraceBuilder,
    };

    #[test]
    fn simplified_clause_keeps_original_derivation() {
        let mut builder = TraceBuilder::default();
        let p = builder.axiom([1, 2]).unwrap();
        let q = builder.axiom([-2, 3]).unwrap();
        let r = builder.resolvent([1, 3], [p, q]).unwrap();
        let trace = builder.build();

        let reduced = TraceReducer::default().reduce(&trace, [-1]).unwrap();

        // [2] from [1, 2], and [3] from [1, 3], with [-2, 3] satisfied by 3.
        assert_eq!(reduced.size(), 2);
        assert_eq!(reduced.origin(2), Some(Origin::Simplified(r)));
        assert_eq!(reduced.get(2).unwrap().antecedent_indices(), &[1]);

        let explanation = explain(&trace, &reduced, 2).unwrap();
        let root = explanation.root();
        assert_eq!(root.literals().collect::<Vec<_>>(), vec![3]);

        // The reduced antecedent [2] is kept, and the original derivation of [1, 3] follows.
        let antecedents = root.antecedents().collect::<Vec<_>>();
        assert_eq!(antecedents.len(), 2);
        assert_eq!(antecedents[0].literals().collect::<Vec<_>>(), vec![2]);
        assert!(structurally_equal(&antecedents[1], &trace.get(r).unwrap()));

        // [2] is in turn explained by the axiom [1, 2].
        let unit = antecedents[0].antecedents().collect::<Vec<_>>();
        assert_eq!(unit.len(), 1);
        assert!(structurally_equal(&unit[0], &trace.get(p).unwrap()));
        assert_eq!(explanation.len(), 6);
    }

    #[test]
    fn missing_clause() {
        let trace = TraceBuilder::default().build();
        let reduced = TraceReducer::default().reduce(&trace, []).unwrap();
        assert_eq!(
            explain(&trace, &reduced, 1).unwrap_err(),
            ErrorKind::Trace(err::TraceError::MissingClause { index: 1 })
        );
    }
}
