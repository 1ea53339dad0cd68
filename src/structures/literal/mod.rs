//! Literals are atoms paired with a (boolean) polarity.
//!
//! Within a trace a literal is an integer, with the sign of the integer indicating the polarity of the literal and the magnitude of the integer the atom.
//! Neither `0` nor `IntLiteral::MIN` is a literal, as the first has no atom and the second no negation.
//!
//! ```rust
//! # use sat_explain::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), 79);
//! ```
//!
//! Not every literal is a boolean atom.
//! Some literals stand for structural constraints (e.g. that a relation has *some* member) and logical negation of these may not be the natural opposite of the constraint.
//! For this reason the [Complement] of a literal is a trait of its own, rather than a fixed use of negation.

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The representation of a literal as an integer.
pub type IntLiteral = i32;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// The complement of a literal, i.e. the literal which holds exactly when the literal does not.
///
/// For boolean literals this is negation, though for other kinds of literal some dedicated operation may be required.
pub trait Complement {
    fn complement(&self) -> Self;
}

impl Complement for IntLiteral {
    fn complement(&self) -> Self {
        self.negate()
    }
}

/// Orders literals by atom and then polarity, with negative literals first.
///
/// Clauses in a trace are stored with literals in this order, so the greatest atom of a clause is that of the last literal.
pub fn by_atom(a: &IntLiteral, b: &IntLiteral) -> std::cmp::Ordering {
    a.atom().cmp(&b.atom()).then(a.cmp(b))
}
