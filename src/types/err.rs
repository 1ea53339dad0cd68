//! Error types used in the library.
//!
//! - Structural errors in a trace are unexpected, and abort whatever operation noticed them.
//! - Prover errors are external --- a reduced prover returns an `Unsupported` error to highlight a request to solve which the prover has no means of answering.
//!
//! Conflicts found while reducing a trace are *not* errors.
//! A conflict is recorded as an empty clause in the reduced trace, as a conflict is the expected outcome of a reduction.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::IntLiteral;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Trace(TraceError),
    Prover(ProverError),
    ProofTree(ProofTreeError),
    Reduction(ReductionError),
}

/// Violations of the structure required of a resolution trace.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceError {
    /// An antecedent of the clause at `index` does not strictly precede the clause.
    AntecedentOrder { index: usize, antecedent: usize },

    /// A clause declared to be an axiom records some antecedent.
    AxiomWithAntecedents { index: usize },

    /// No clause exists at the given index.
    MissingClause { index: usize },

    /// The clause at `index` contains the literal `0`, which has no atom.
    ZeroLiteral { index: usize },

    /// The clause at `index` contains `IntLiteral::MIN`, which has no negation.
    LiteralOutOfRange { index: usize },

    /// The clause at `index` contains `literal` more than once.
    DuplicateLiteral { index: usize, literal: IntLiteral },
}

impl From<TraceError> for ErrorKind {
    fn from(e: TraceError) -> Self {
        ErrorKind::Trace(e)
    }
}

/// Errors when editing a detached proof tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProofTreeError {
    /// Some key does not identify a node of the tree.
    MissingNode,

    /// The edit would make a clause part of its own derivation.
    Cycle,
}

impl From<ProofTreeError> for ErrorKind {
    fn from(e: ProofTreeError) -> Self {
        ErrorKind::ProofTree(e)
    }
}

/// Errors in the input to a reduction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReductionError {
    /// The literal `0` was given as an assumption.
    ZeroAssumption,

    /// `IntLiteral::MIN` was given as an assumption.
    AssumptionOutOfRange,
}

impl From<ReductionError> for ErrorKind {
    fn from(e: ReductionError) -> Self {
        ErrorKind::Reduction(e)
    }
}

/// Noted errors when using a prover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProverError {
    /// The named operation is not supported by the prover.
    Unsupported(&'static str),

    /// The prover has been freed.
    Freed,
}

impl From<ProverError> for ErrorKind {
    fn from(e: ProverError) -> Self {
        ErrorKind::Prover(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Trace(TraceError::AntecedentOrder { index, antecedent }) => write!(
                f,
                "clause {index} has antecedent {antecedent}, which does not precede it"
            ),
            ErrorKind::Trace(TraceError::AxiomWithAntecedents { index }) => {
                write!(f, "axiom {index} records antecedents")
            }
            ErrorKind::Trace(TraceError::MissingClause { index }) => {
                write!(f, "no clause at index {index}")
            }
            ErrorKind::Trace(TraceError::ZeroLiteral { index }) => {
                write!(f, "clause {index} contains the literal 0")
            }
            ErrorKind::Trace(TraceError::LiteralOutOfRange { index }) => {
                write!(f, "clause {index} contains a literal with no negation")
            }
            ErrorKind::Trace(TraceError::DuplicateLiteral { index, literal }) => {
                write!(f, "clause {index} repeats the literal {literal}")
            }
            ErrorKind::Prover(ProverError::Unsupported(operation)) => {
                write!(f, "{operation} is not supported by this prover")
            }
            ErrorKind::Prover(ProverError::Freed) => write!(f, "the prover has been freed"),
            ErrorKind::ProofTree(ProofTreeError::MissingNode) => {
                write!(f, "no such node in the proof tree")
            }
            ErrorKind::ProofTree(ProofTreeError::Cycle) => {
                write!(f, "the clause would be part of its own derivation")
            }
            ErrorKind::Reduction(ReductionError::ZeroAssumption) => {
                write!(f, "0 is not a literal, and cannot be assumed")
            }
            ErrorKind::Reduction(ReductionError::AssumptionOutOfRange) => {
                write!(f, "{} has no negation, and cannot be assumed", IntLiteral::MIN)
            }
        }
    }
}

impl std::error::Error for ErrorKind {}
