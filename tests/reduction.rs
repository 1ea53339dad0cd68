use rand::{rngs::StdRng, Rng, SeedableRng};

use sat_explain::{
    config::ReductionConfig,
    procedures::reduction::TraceReducer,
    structures::{
        clause::Clause,
        literal::{IntLiteral, Literal},
    },
    trace::{IndexSet, Origin, ResolutionTrace, Trace, TraceBuilder},
    types::err::{ErrorKind, ReductionError, TraceError},
};

/// The resolvent of two clauses on the first clashing literal, if the resolvent is not a tautology.
fn resolve(a: &[IntLiteral], b: &[IntLiteral]) -> Option<Vec<IntLiteral>> {
    let pivot = *a.iter().find(|literal| b.contains(&-**literal))?;
    let mut resolvent: Vec<IntLiteral> = a
        .iter()
        .chain(b.iter())
        .copied()
        .filter(|literal| literal.atom() != pivot.atom())
        .collect();
    resolvent.sort_unstable();
    resolvent.dedup();
    match resolvent.iter().any(|literal| resolvent.contains(&-literal)) {
        true => None,
        false => Some(resolvent),
    }
}

/// A random trace over atoms `1..=atoms`, with resolvents derived by resolution from earlier clauses.
fn random_trace(rng: &mut StdRng, atoms: u32, axioms: usize, attempts: usize) -> Trace {
    let mut builder = TraceBuilder::default();
    let mut clauses: Vec<Vec<IntLiteral>> = Vec::default();

    for _ in 0..axioms {
        let mut clause: Vec<IntLiteral> = Vec::default();
        for _ in 0..rng.gen_range(1..=3) {
            let literal = IntLiteral::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5));
            if !clause.iter().any(|other| other.atom() == literal.atom()) {
                clause.push(literal);
            }
        }
        builder.axiom(clause.clone()).unwrap();
        clauses.push(clause);
    }

    for _ in 0..attempts {
        let i = rng.gen_range(0..clauses.len());
        let j = rng.gen_range(0..clauses.len());
        if let Some(resolvent) = resolve(&clauses[i], &clauses[j]) {
            builder.resolvent(resolvent.clone(), [i + 1, j + 1]).unwrap();
            clauses.push(resolvent);
        }
    }

    builder.build()
}

/// Every valuation of atoms `1..=atoms`, as the set of true literals.
fn models(atoms: u32) -> impl Iterator<Item = Vec<IntLiteral>> {
    (0..(1_u32 << atoms)).map(move |bits| {
        (1..=atoms)
            .map(|atom| IntLiteral::new(atom, bits & (1 << (atom - 1)) != 0))
            .collect()
    })
}

fn satisfies(model: &[IntLiteral], mut clause: impl Iterator<Item = IntLiteral>) -> bool {
    clause.any(|literal| model.contains(&literal))
}

fn literal_count(trace: &impl ResolutionTrace) -> usize {
    trace.iter().map(|clause| clause.size()).sum()
}

/// The axioms [1, 2], [-2, 3], [-3, 4], [-4], so assuming -1 cascades to a conflict.
fn cascade() -> Trace {
    let mut builder = TraceBuilder::default();
    builder.axiom([1, 2]).unwrap();
    builder.axiom([-2, 3]).unwrap();
    builder.axiom([-3, 4]).unwrap();
    builder.axiom([-4]).unwrap();
    builder.build()
}

mod examples {
    use super::*;

    #[test]
    fn single_axiom_conflict() {
        let mut builder = TraceBuilder::default();
        builder.axiom([-1]).unwrap();
        let trace = builder.build();

        let reduced = TraceReducer::default().reduce(&trace, [1]).unwrap();
        assert_eq!(reduced.size(), 1);
        assert_eq!(reduced.get(1).unwrap().size(), 0);
        assert_eq!(reduced.core(), IndexSet::from([1]));
        assert!(reduced.found_conflict());
    }

    #[test]
    fn cascade_to_conflict() {
        let trace = cascade();
        let reduced = TraceReducer::default().reduce(&trace, [-1]).unwrap();

        assert_eq!(reduced.conflict(), Some(4));
        assert_eq!(
            reduced.derived(),
            &[(2, Some(1)), (3, Some(2)), (4, Some(3))]
        );

        // Each unit is derived from the unit before, so the first axiom is the only axiom of the core.
        assert_eq!(reduced.core(), IndexSet::from([1]));
        assert_eq!(reduced.origin(4), Some(Origin::Simplified(4)));
        assert_eq!(reduced.get(3).unwrap().antecedent_indices(), &[2]);
    }

    #[test]
    fn cascade_without_unit_reasons() {
        let mut config = ReductionConfig::default();
        config.link_unit_reasons.value = false;

        let trace = cascade();
        let reduced = TraceReducer::new(config).reduce(&trace, [-1]).unwrap();

        assert_eq!(reduced.conflict(), Some(4));
        assert_eq!(reduced.core(), IndexSet::from([4]));
        assert_eq!(reduced.axioms(), IndexSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn satisfied_clauses_are_dropped() {
        let trace = cascade();
        let reduced = TraceReducer::default().reduce(&trace, [1]).unwrap();

        // Only the clauses without 1 remain, untouched.
        assert_eq!(reduced.size(), 3);
        assert!(!reduced.found_conflict());
        assert_eq!(
            reduced.iter().map(|clause| reduced.origin(clause.index())).collect::<Vec<_>>(),
            vec![Some(Origin::Kept(2)), Some(Origin::Kept(3)), Some(Origin::Kept(4))]
        );
        assert_eq!(reduced.assumptions(), &[1]);
        assert!(reduced.derived().is_empty());
    }

    #[test]
    fn contradictory_assumptions() {
        let trace = cascade();
        let reduced = TraceReducer::default().reduce(&trace, [5, -5]).unwrap();

        assert_eq!(reduced.origin(1), Some(Origin::Contradiction));
        assert_eq!(reduced.conflict(), Some(1));
        assert_eq!(reduced.core(), IndexSet::from([1]));
        assert!(reduced.found_conflict());
    }

    #[test]
    fn zero_assumption() {
        let trace = cascade();
        assert_eq!(
            TraceReducer::default().reduce(&trace, [1, 0]).unwrap_err(),
            ErrorKind::Reduction(ReductionError::ZeroAssumption)
        );
    }

    #[test]
    fn literal_without_negation() {
        let mut builder = TraceBuilder::default();
        assert_eq!(
            builder.axiom([IntLiteral::MIN, 2]).unwrap_err(),
            ErrorKind::Trace(TraceError::LiteralOutOfRange { index: 1 })
        );
        builder.axiom([-IntLiteral::MAX, 2]).unwrap();
        let trace = builder.build();

        assert_eq!(
            TraceReducer::default().reduce(&trace, [IntLiteral::MIN]).unwrap_err(),
            ErrorKind::Reduction(ReductionError::AssumptionOutOfRange)
        );

        // The largest atom is fine either way.
        let reduced = TraceReducer::default().reduce(&trace, [IntLiteral::MAX]).unwrap();
        assert_eq!(reduced.get(1).unwrap().literal_slice(), &[2]);
        assert_eq!(reduced.derived(), &[(2, Some(1))]);
    }

    #[test]
    fn malformed_trace() {
        let result = Trace::from_parts([(vec![1], vec![]), (vec![2], vec![2])], &IndexSet::from([1]));
        assert_eq!(
            result.unwrap_err(),
            ErrorKind::Trace(TraceError::AntecedentOrder {
                index: 2,
                antecedent: 2
            })
        );
    }
}

mod configuration {
    use super::*;

    fn early_conflict() -> Trace {
        let mut builder = TraceBuilder::default();
        builder.axiom([-1]).unwrap();
        builder.axiom([-2, 3]).unwrap();
        builder.build()
    }

    #[test]
    fn stop_on_conflict() {
        let trace = early_conflict();
        let reduced = TraceReducer::default().reduce(&trace, [1, 2]).unwrap();

        assert_eq!(reduced.conflict(), Some(1));
        assert_eq!(reduced.origin(2), Some(Origin::Kept(2)));
        assert_eq!(reduced.get(2).unwrap().literal_slice(), &[-2, 3]);
        assert!(reduced.derived().is_empty());
    }

    #[test]
    fn propagate_past_conflict() {
        let mut config = ReductionConfig::default();
        assert!(config.stop_on_conflict.set(false));

        let trace = early_conflict();
        let reduced = TraceReducer::new(config).reduce(&trace, [1, 2]).unwrap();

        assert_eq!(reduced.conflict(), Some(1));
        assert_eq!(reduced.origin(2), Some(Origin::Simplified(2)));
        assert_eq!(reduced.get(2).unwrap().literal_slice(), &[3]);
        assert_eq!(reduced.derived(), &[(3, Some(2))]);
    }

    #[test]
    fn core_only() {
        let mut builder = TraceBuilder::default();
        let p = builder.axiom([1]).unwrap();
        let q = builder.axiom([-1]).unwrap();
        builder.axiom([5, 6]).unwrap();
        let conflict = builder.resolvent([], [p, q]).unwrap();
        let trace = builder.build();

        let mut config = ReductionConfig::default();
        config.core_only.value = true;

        let reduced = TraceReducer::new(config).reduce(&trace, []).unwrap();
        assert_eq!(reduced.size(), 3);
        assert_eq!(reduced.origin(3), Some(Origin::Kept(conflict)));

        let everything = TraceReducer::default().reduce(&trace, []).unwrap();
        assert_eq!(everything.size(), 4);
    }

    #[test]
    fn core_only_without_conflict() {
        let mut builder = TraceBuilder::default();
        builder.axiom([1, 2]).unwrap();
        let trace = builder.build();

        let mut config = ReductionConfig::default();
        config.core_only.value = true;

        let reduced = TraceReducer::new(config).reduce(&trace, []).unwrap();
        assert_eq!(reduced.size(), 1);
    }
}

mod properties {
    use super::*;

    #[test]
    fn idempotence() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..32 {
            let trace = random_trace(&mut rng, 5, 6, 12);
            let reduced = TraceReducer::default().reduce(&trace, []).unwrap();

            assert_eq!(reduced.size(), trace.size());
            for (original, copy) in trace.iter().zip(reduced.iter()) {
                assert_eq!(original.literal_slice(), copy.literal_slice());
                assert_eq!(original.antecedent_indices(), copy.antecedent_indices());
                assert_eq!(reduced.origin(copy.index()), Some(Origin::Kept(original.index())));
            }
        }
    }

    #[test]
    fn soundness() {
        let _ = env_logger::builder().is_test(true).try_init();

        let atoms = 5;
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..64 {
            let trace = random_trace(&mut rng, atoms, 6, 12);

            let mut assumptions: Vec<IntLiteral> = Vec::default();
            for _ in 0..rng.gen_range(1..=2) {
                assumptions.push(IntLiteral::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5)));
            }

            let reduced = TraceReducer::default()
                .reduce(&trace, assumptions.clone())
                .unwrap();

            for model in models(atoms) {
                let relevant = assumptions.iter().all(|literal| model.contains(literal))
                    && trace
                        .iter()
                        .filter(|clause| clause.is_axiom())
                        .all(|clause| satisfies(&model, clause.literals()));

                if relevant {
                    for clause in reduced.iter() {
                        assert!(
                            satisfies(&model, clause.literals()),
                            "{:?} is false on {model:?} given {assumptions:?}",
                            clause.literal_slice()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn monotonicity() {
        let atoms = 6;
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..64 {
            let trace = random_trace(&mut rng, atoms, 8, 16);
            let assumptions: Vec<IntLiteral> = (0..rng.gen_range(0..=3))
                .map(|_| IntLiteral::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5)))
                .collect();

            let reduced = TraceReducer::default().reduce(&trace, assumptions).unwrap();
            assert!(literal_count(&reduced) <= literal_count(&trace));
            assert!(reduced.size() <= trace.size() + 1);
        }
    }

    #[test]
    fn structure_is_kept() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..64 {
            let trace = random_trace(&mut rng, 5, 6, 12);
            let assumption = IntLiteral::new(rng.gen_range(1..=5), rng.gen_bool(0.5));
            let reduced = TraceReducer::default().reduce(&trace, [assumption]).unwrap();

            assert!(sat_explain::trace::check_structure(&reduced).is_ok());
            for clause in reduced.iter() {
                assert_eq!(clause.is_axiom(), clause.number_of_antecedents() == 0);
                assert!(!clause.literals().any(|literal| literal == assumption));
            }
        }
    }
}
