use sat_explain::{
    procedures::reduction::TraceReducer,
    structures::clause::Clause,
    trace::{check_structure, ClauseStore, IndexSet, ResolutionTrace, Trace, TraceBuilder},
    types::err::{ErrorKind, TraceError},
};

/// Two refutations sharing the axiom [1]:
/// - [1], [-1, 2], [-2] give [2] and then the empty clause.
/// - [1], [-1, 3], [-3] give [3] and then the empty clause.
fn two_refutations() -> Trace {
    let mut builder = TraceBuilder::default();
    let a = builder.axiom([1]).unwrap(); // 1
    let b = builder.axiom([-1, 2]).unwrap(); // 2
    let c = builder.axiom([-2]).unwrap(); // 3
    let d = builder.axiom([-1, 3]).unwrap(); // 4
    let e = builder.axiom([-3]).unwrap(); // 5
    let ab = builder.resolvent([2], [a, b]).unwrap(); // 6
    let ad = builder.resolvent([3], [a, d]).unwrap(); // 7
    builder.resolvent([], [ad, e]).unwrap(); // 8
    builder.resolvent([], [ab, c]).unwrap(); // 9
    builder.build()
}

mod queries {
    use super::*;

    #[test]
    fn axioms_and_resolvents() {
        let trace = two_refutations();
        assert_eq!(trace.size(), 9);
        assert_eq!(trace.axioms(), IndexSet::from([1, 2, 3, 4, 5]));
        assert_eq!(trace.resolvents(), IndexSet::from([6, 7, 8, 9]));
        for clause in trace.iter() {
            assert_eq!(clause.is_axiom(), clause.number_of_antecedents() == 0);
        }
    }

    #[test]
    fn conflict_is_the_earliest_empty_clause() {
        let trace = two_refutations();
        assert_eq!(trace.conflict(), Some(8));
        assert_eq!(trace.core(), IndexSet::from([1, 4, 5]));
    }

    #[test]
    fn no_conflict_no_core() {
        let mut builder = TraceBuilder::default();
        builder.axiom([1, 2]).unwrap();
        let trace = builder.build();
        assert_eq!(trace.conflict(), None);
        assert!(trace.core().is_empty());
    }

    #[test]
    fn reachable() {
        let trace = two_refutations();
        assert_eq!(trace.reachable(&IndexSet::from([1])), IndexSet::from([1, 6, 7, 8, 9]));
        assert_eq!(trace.reachable(&IndexSet::from([3])), IndexSet::from([3, 9]));
        assert_eq!(trace.reachable(&IndexSet::from([42])), IndexSet::default());
    }

    #[test]
    fn backward_reachable() {
        let trace = two_refutations();
        assert_eq!(
            trace.backward_reachable(&IndexSet::from([9])),
            IndexSet::from([1, 2, 3, 6, 9])
        );
        assert_eq!(
            trace.backward_reachable(&IndexSet::from([6, 7])),
            IndexSet::from([1, 2, 4, 6, 7])
        );
    }

    #[test]
    fn learnable() {
        let trace = two_refutations();

        // 6 from 1 and 2, and then 9 from 6 and 3.
        assert_eq!(
            trace.learnable(&IndexSet::from([1, 2, 3])),
            IndexSet::from([1, 2, 3, 6, 9])
        );
        // Only 6, as 9 needs 6.
        assert_eq!(
            trace.directly_learnable(&IndexSet::from([1, 2, 3])),
            IndexSet::from([1, 2, 3, 6])
        );
        assert_eq!(trace.learnable(&IndexSet::default()), IndexSet::default());
    }
}

mod iteration {
    use super::*;

    #[test]
    fn sequences_restart() {
        let trace = two_refutations();

        let first = trace.iter().map(|clause| clause.index()).collect::<Vec<_>>();
        let second = trace.iter().map(|clause| clause.index()).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first, (1..=9).collect::<Vec<_>>());

        let clause = trace.get(2).unwrap();
        assert_eq!(clause.literals().collect::<Vec<_>>(), vec![-1, 2]);
        assert_eq!(clause.literals().collect::<Vec<_>>(), vec![-1, 2]);
    }

    #[test]
    fn indices() {
        let trace = two_refutations();
        let indices = IndexSet::from([7, 2, 42, 5]);

        let forward = trace
            .iter_indices(&indices)
            .map(|clause| clause.index())
            .collect::<Vec<_>>();
        assert_eq!(forward, vec![2, 5, 7]);

        let backward = trace
            .rev_iter_indices(&indices)
            .map(|clause| clause.index())
            .collect::<Vec<_>>();
        assert_eq!(backward, vec![7, 5, 2]);
    }

    #[test]
    fn exhausted() {
        let trace = two_refutations();
        let mut clauses = trace.iter();
        for _ in 0..9 {
            assert!(clauses.next().is_some());
        }
        assert!(clauses.next().is_none());
        assert!(clauses.next().is_none());
    }

    #[test]
    fn clause_views() {
        let trace = two_refutations();
        let conflict = trace.get(8).unwrap();

        assert_eq!(conflict.max_variable(), 0);
        assert_eq!(conflict.as_dimacs(true), "0");

        let mut buffer = Vec::default();
        let antecedents = conflict.antecedents().collect::<Vec<_>>();
        assert_eq!(antecedents[0].to_array(&mut buffer), &[3]);
        assert_eq!(antecedents[1].to_array(&mut buffer), &[-3]);
        assert_eq!(trace.get(4).unwrap().as_dimacs(false), "-1 3");
        assert_eq!(trace.get(4).unwrap().max_variable(), 3);

        assert!(trace.get(0).is_none());
        assert!(trace.get(10).is_none());
    }
}

mod structure {
    use super::*;

    /// A backend's own record of a solve, holding the trace recorded for the solve.
    struct Solve {
        variables: usize,
        trace: Trace,
    }

    impl ResolutionTrace for Solve {
        fn clauses(&self) -> &ClauseStore {
            self.trace.clauses()
        }
    }

    #[test]
    fn backend_holding_a_trace() {
        let solve = Solve {
            variables: 3,
            trace: two_refutations(),
        };
        assert!(check_structure(&solve).is_ok());
        assert_eq!(solve.conflict(), Some(8));
        assert!(solve.iter().all(|clause| clause.max_variable() as usize <= solve.variables));

        let reduced = TraceReducer::default().reduce(&solve, [2]).unwrap();
        assert!(check_structure(&reduced).is_ok());
        assert!(reduced.size() < solve.size());
    }

    #[test]
    fn from_parts() {
        let trace = Trace::from_parts(
            [(vec![1], vec![]), (vec![-1], vec![]), (vec![], vec![1, 2])],
            &IndexSet::from([1, 2]),
        )
        .unwrap();
        assert_eq!(trace.core(), IndexSet::from([1, 2]));
        assert!(check_structure(&trace).is_ok());
    }

    #[test]
    fn axiom_with_antecedents() {
        let result = Trace::from_parts(
            [(vec![1], vec![]), (vec![1, 2], vec![1])],
            &IndexSet::from([1, 2]),
        );
        assert_eq!(
            result.unwrap_err(),
            ErrorKind::Trace(TraceError::AxiomWithAntecedents { index: 2 })
        );
    }

    #[test]
    fn forward_antecedent() {
        let mut builder = TraceBuilder::default();
        assert_eq!(
            builder.resolvent([1], [1]),
            Err(ErrorKind::Trace(TraceError::AntecedentOrder {
                index: 1,
                antecedent: 1
            }))
        );
        assert_eq!(
            builder.resolvent([1], [0]),
            Err(ErrorKind::Trace(TraceError::AntecedentOrder {
                index: 1,
                antecedent: 0
            }))
        );
    }
}
