//! A library for explaining the unsatisfiability of boolean formulas through the resolution traces left behind by a SAT solver.
//!
//! sat_explain takes the trace of an unsatisfiable solve --- the axioms given to the solver, and the clauses the solver derived by resolution --- and answers questions about it.
//! Notably, which axioms were needed to derive the conflict (the core), and what remains of the trace once some literals are assumed to be true.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [trace].
//!
//! A trace is handed over by a SAT backend, built one clause at a time through a [TraceBuilder](crate::trace::TraceBuilder).
//! Once built, a trace is read through the [ResolutionTrace](crate::trace::ResolutionTrace) trait, which supports queries such as the [core](crate::trace::ResolutionTrace::core) of the trace, and forward or backward reachability between clauses.
//!
//! Useful starting points, then, may be:
//! - The [reduction procedure](crate::procedures::reduction), to shrink a trace given some assumptions.
//! - The [explanation procedure](crate::procedures::explanation), to see why a clause of a reduced trace holds.
//! - The [structures], to familiarise yourself with the representation of literals, clauses, and detached proof trees.
//! - The [configuration](crate::config) of a reduction.
//! - The [prover] traits, to see the shape expected of a SAT backend.
//!
//! # Examples
//!
//! + Reduce a trace given a literal, and find the core of the reduced trace.
//!
//! ```rust
//! # use sat_explain::procedures::reduction::TraceReducer;
//! # use sat_explain::trace::{IndexSet, Origin, ResolutionTrace, TraceBuilder};
//! let mut builder = TraceBuilder::default();
//! let p = builder.axiom([1, 2]).unwrap();
//! let q = builder.axiom([1, -2]).unwrap();
//! let r = builder.axiom([-1]).unwrap();
//! let s = builder.resolvent([1], [p, q]).unwrap();
//! builder.resolvent([], [s, r]).unwrap();
//! let trace = builder.build();
//! assert_eq!(trace.core(), IndexSet::from([p, q, r]));
//!
//! // Given 2, the first axiom is satisfied and the second shrinks to a unit.
//! let reduced = TraceReducer::default().reduce(&trace, [2]).unwrap();
//! assert_eq!(reduced.origin(1), Some(Origin::Simplified(q)));
//! assert!(reduced.found_conflict());
//! assert!(reduced.size() < trace.size());
//! ```
//!
//! + Propagate a literal through clause-shaped formulas.
//!
//! ```rust
//! # use sat_explain::procedures::propagation::propagate;
//! # use sat_explain::structures::formula::Formula;
//! let conjunctions = vec![
//!     Formula::some("r").or(Formula::atom("p")),
//!     Formula::no("r"),
//! ];
//! let simplified = propagate(conjunctions, &Formula::some("r"));
//! assert_eq!(simplified, vec![Formula::False]);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each step of propagation can be found with `RUST_LOG=propagation=trace …` or,
//! - A summary of each reduction can be found with `RUST_LOG=reduction=info …`

pub mod procedures;

pub mod config;
pub mod structures;
pub mod trace;
pub mod types;

pub mod prover;

pub mod misc;
