//! Procedures over clauses and traces.
//!
//! - [propagation] simplifies a conjunction of clause-shaped formulas given a literal is true.
//! - [reduction] shrinks a trace given some literals are true.
//! - [explanation] justifies the clauses of a reduced trace by the trace the reduced trace came from.

pub mod explanation;
pub mod propagation;
pub mod reduction;
