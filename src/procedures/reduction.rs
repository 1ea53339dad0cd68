/*!
Reduction of a trace with respect to a collection of literals assumed to be true.

# Overview

Given a trace and some assumptions, the reducer:
1. Takes the clauses of the trace as a working collection (or only those used to derive the conflict of the trace, if [configured](crate::config::ReductionConfig::core_only)).
2. [Propagates](crate::procedures::propagation) each known literal through the working collection, beginning with the assumptions.
   - A clause containing a known literal is satisfied, and dropped.
   - A clause containing the complement of a known literal is shrunk.
   - A clause shrunk to a single literal makes the literal known, and the literal is propagated in turn.
3. Stops when there are no more literals to propagate, or (by default) once the literal which shrank some clause to the empty clause has been propagated.
4. Rebuilds a trace from the clauses which remain, in the original order, with indices made dense again.

Reaching the empty clause is a conflict, and the expected outcome of a reduction: the assumptions contradict the axioms of the trace.
The empty clause is kept as a clause of the reduced trace, and if the empty clause has no antecedents the [core](crate::trace::ResolutionTrace::core) of the reduced trace is exactly that clause.

Each literal is propagated at most once, and each propagation either drops a clause or shrinks a clause, so a reduction always terminates.

# Rebuilding

- A clause untouched by propagation keeps each of its antecedents which remain.
- A clause shrunk by propagation keeps each of its antecedents which remain, and (if [configured](crate::config::ReductionConfig::link_unit_reasons)) the unit clauses which made the removed literals known, where those unit clauses precede the clause.
- A clause without any remaining justification becomes an axiom of the reduced trace, as the clause follows from the axioms of the original trace together with the assumptions.

Assumptions are not added as clauses, and so no reduced trace has more literals than the trace it was reduced from.

```rust
# use sat_explain::procedures::reduction::TraceReducer;
# use sat_explain::trace::{IndexSet, ResolutionTrace, TraceBuilder};
let mut builder = TraceBuilder::default();
builder.axiom([-1]).unwrap();
let trace = builder.build();

let reduced = TraceReducer::default().reduce(&trace, [1]).unwrap();
assert_eq!(reduced.size(), 1);
assert!(reduced.get(1).unwrap().literal_slice().is_empty());
assert_eq!(reduced.core(), IndexSet::from([1]));
```
*/

use std::collections::{HashMap, VecDeque};

use crate::{
    config::ReductionConfig,
    misc::log::targets::{self},
    procedures::propagation::{simplify, Simplification},
    structures::literal::{Complement, IntLiteral},
    trace::{check_clause, check_structure, ClauseStore, IndexSet, Origin, ReducedTrace, ResolutionTrace},
    types::err::{self, ErrorKind},
};

/// Reduces traces with respect to assumptions.
#[derive(Clone, Debug, Default)]
pub struct TraceReducer {
    config: ReductionConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Kept,
    Simplified,
    Satisfied,
}

/// A clause of the working collection.
#[derive(Debug)]
struct WorkingClause {
    literals: Vec<IntLiteral>,
    status: Status,

    /// The known literals whose complements were removed from the clause.
    removed_by: Vec<IntLiteral>,
}

/// The state of a single reduction.
#[derive(Debug, Default)]
struct Propagation {
    /// Clauses by original index, offset by one, with clauses outside the scope of the reduction as None.
    working: Vec<Option<WorkingClause>>,

    /// The (original) indices of clauses each literal was found in, before propagation.
    occurrences: HashMap<IntLiteral, Vec<usize>>,

    /// Known literals, paired with the index of the unit clause the literal was derived from, if derived.
    known: HashMap<IntLiteral, Option<usize>>,

    /// Derived literals, in the order derived.
    derived: Vec<IntLiteral>,

    queue: VecDeque<IntLiteral>,

    /// The index of the first clause shrunk to the empty clause.
    conflict: Option<usize>,

    /// Whether the assumptions contain some literal and its complement.
    contradiction: bool,
}

impl TraceReducer {
    pub fn new(config: ReductionConfig) -> Self {
        TraceReducer { config }
    }

    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }

    /// Reduces `trace`, given each literal of `assumptions` is true.
    ///
    /// The trace is only read, and a fresh trace is returned.
    pub fn reduce<T: ResolutionTrace>(
        &self,
        trace: &T,
        assumptions: impl IntoIterator<Item = IntLiteral>,
    ) -> Result<ReducedTrace, ErrorKind> {
        debug_assert!(check_structure(trace).is_ok());

        let mut assumed: Vec<IntLiteral> = Vec::default();
        for literal in assumptions {
            if literal == 0 {
                return Err(err::ReductionError::ZeroAssumption.into());
            }
            if literal == IntLiteral::MIN {
                return Err(err::ReductionError::AssumptionOutOfRange.into());
            }
            if !assumed.contains(&literal) {
                assumed.push(literal);
            }
        }

        log::info!(target: targets::REDUCTION,
            "Reducing a trace of {} clauses ({} axioms) given {} assumptions",
            trace.size(),
            trace.axioms().len(),
            assumed.len()
        );

        let scope = self.scope(trace);
        let mut propagation = Propagation::over(trace, &scope);

        for literal in &assumed {
            propagation.assume(*literal);
        }
        if propagation.contradiction {
            log::debug!(target: targets::REDUCTION, "Assumptions {assumed:?} contradict one another");
        }

        if !(propagation.contradiction && self.config.stop_on_conflict.value) {
            propagation.run(self.config.stop_on_conflict.value);
        }

        let reduced = self.rebuild(trace, &scope, propagation, assumed);

        log::info!(target: targets::REDUCTION,
            "Reduced to {} clauses ({} axioms) with {} derived literals",
            reduced.size(),
            reduced.axioms().len(),
            reduced.derived().len()
        );

        Ok(reduced)
    }

    /// The indices of the clauses to reduce.
    fn scope<T: ResolutionTrace>(&self, trace: &T) -> IndexSet {
        if self.config.core_only.value {
            match trace.conflict() {
                Some(conflict) => return trace.backward_reachable(&IndexSet::from([conflict])),
                None => {
                    log::warn!(target: targets::REDUCTION, "No conflict in trace, so reducing every clause");
                }
            }
        }
        (1..=trace.size()).collect()
    }

    /// A trace of the clauses which remain after propagation.
    fn rebuild<T: ResolutionTrace>(
        &self,
        trace: &T,
        scope: &IndexSet,
        propagation: Propagation,
        assumptions: Vec<IntLiteral>,
    ) -> ReducedTrace {
        let mut store = ClauseStore::default();
        let mut origins = Vec::default();
        let mut renumbered: Vec<Option<usize>> = vec![None; trace.size() + 1];

        if propagation.contradiction {
            store.push(Vec::default(), Vec::default());
            origins.push(Origin::Contradiction);
        }

        for clause in trace.iter_indices(scope) {
            let index = clause.index();
            let Some(Some(working)) = propagation.working.get(index - 1) else {
                continue;
            };

            let origin = match working.status {
                Status::Satisfied => continue,
                Status::Kept => Origin::Kept(index),
                Status::Simplified => Origin::Simplified(index),
            };

            let mut antecedents: Vec<usize> = Vec::default();
            let remaining = clause
                .antecedent_indices()
                .iter()
                .filter_map(|antecedent| renumbered[*antecedent]);

            let reasons = working
                .removed_by
                .iter()
                .filter(|_| self.config.link_unit_reasons.value)
                .filter_map(|literal| propagation.known.get(literal).copied().flatten())
                .filter_map(|reason| renumbered[reason]);

            for antecedent in remaining.chain(reasons) {
                if !antecedents.contains(&antecedent) {
                    antecedents.push(antecedent);
                }
            }

            debug_assert!(check_clause(store.len() + 1, &working.literals, &antecedents).is_ok());
            let fresh = store.push(working.literals.clone(), antecedents);
            renumbered[index] = Some(fresh);
            origins.push(origin);
        }

        let derived = propagation
            .derived
            .iter()
            .map(|literal| {
                let reason = propagation.known.get(literal).copied().flatten();
                (*literal, reason.and_then(|reason| renumbered[reason]))
            })
            .collect();

        ReducedTrace::new(store, origins, assumptions, derived)
    }
}

impl Propagation {
    /// The working collection of the clauses of `trace` at `scope`.
    fn over<T: ResolutionTrace>(trace: &T, scope: &IndexSet) -> Self {
        let mut propagation = Propagation {
            working: (0..trace.size()).map(|_| None).collect(),
            ..Default::default()
        };

        for clause in trace.iter_indices(scope) {
            let literals = clause.literal_slice().to_vec();
            for literal in &literals {
                propagation
                    .occurrences
                    .entry(*literal)
                    .or_default()
                    .push(clause.index());
            }
            propagation.working[clause.index() - 1] = Some(WorkingClause {
                literals,
                status: Status::Kept,
                removed_by: Vec::default(),
            });
        }

        propagation
    }

    /// Notes `literal` as an assumption.
    fn assume(&mut self, literal: IntLiteral) {
        if self.known.contains_key(&literal.complement()) {
            self.contradiction = true;
        } else if self.known.insert(literal, None).is_none() {
            self.queue.push_back(literal);
        }
    }

    /// Notes `literal` as derived from the unit clause at `reason`.
    fn derive(&mut self, literal: IntLiteral, reason: usize) {
        // If the complement is known, the clause will be shrunk to the empty clause when the complement is propagated.
        if self.known.contains_key(&literal) || self.known.contains_key(&literal.complement()) {
            return;
        }
        log::trace!(target: targets::PROPAGATION, "Derived {literal} from {reason}");
        self.known.insert(literal, Some(reason));
        self.derived.push(literal);
        self.queue.push_back(literal);
    }

    /// Propagates known literals until there are none left to propagate, or a conflict is found (if `stop_on_conflict`).
    ///
    /// The literal being propagated when a conflict is found is propagated through every clause, so no clause is left containing a propagated literal.
    fn run(&mut self, stop_on_conflict: bool) {
        while let Some(literal) = self.queue.pop_front() {
            if stop_on_conflict && self.conflict.is_some() {
                break;
            }

            let complement = literal.complement();
            let reason = self.known.get(&literal).copied().flatten();

            let mut touched = Vec::default();
            for key in [literal, complement] {
                if let Some(indices) = self.occurrences.get(&key) {
                    touched.extend(indices.iter().copied());
                }
            }
            touched.sort_unstable();
            touched.dedup();

            for index in touched {
                if reason == Some(index) {
                    continue;
                }
                let Some(Some(clause)) = self.working.get_mut(index - 1) else {
                    continue;
                };
                if clause.status == Status::Satisfied {
                    continue;
                }

                match simplify(&clause.literals, &literal, &complement) {
                    Simplification::Satisfied => {
                        log::trace!(target: targets::PROPAGATION, "{index} satisfied by {literal}");
                        clause.status = Status::Satisfied;
                    }

                    Simplification::Reduced(remaining) => {
                        log::trace!(target: targets::PROPAGATION, "{index} reduced to {remaining:?} by {literal}");
                        clause.status = Status::Simplified;
                        clause.removed_by.push(literal);
                        clause.literals = remaining;

                        let unit = match clause.literals.as_slice() {
                            [] => {
                                log::debug!(target: targets::REDUCTION, "Conflict at {index}");
                                self.conflict.get_or_insert(index);
                                None
                            }
                            [unit] => Some(*unit),
                            _ => None,
                        };
                        if let Some(unit) = unit {
                            self.derive(unit, index);
                        }
                    }

                    Simplification::Unchanged => {}
                }
            }
        }
    }
}
