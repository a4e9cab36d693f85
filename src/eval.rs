//! Evaluation of expressions under variable assignments.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::{EvalError, EvalResult};
use crate::expr::{Expr, Term};

/// A value that may stand for a boolean.
///
/// Integers count as booleans only when they are exactly `0` or `1`.
pub trait BoolLike {
    fn as_bool(&self) -> Option<bool>;
}

impl BoolLike for bool {
    fn as_bool(&self) -> Option<bool> {
        Some(*self)
    }
}

macro_rules! impl_bool_like_for_int {
    ($($t:ty),*) => {
        $(
            impl BoolLike for $t {
                fn as_bool(&self) -> Option<bool> {
                    match *self {
                        0 => Some(false),
                        1 => Some(true),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_bool_like_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A mapping from variable names to values, consulted during evaluation.
pub trait Assignment {
    type Value: BoolLike;

    fn value(&self, name: char) -> Option<&Self::Value>;
}

impl<V: BoolLike, S: BuildHasher> Assignment for HashMap<char, V, S> {
    type Value = V;

    fn value(&self, name: char) -> Option<&V> {
        self.get(&name)
    }
}

impl<V: BoolLike> Assignment for BTreeMap<char, V> {
    type Value = V;

    fn value(&self, name: char) -> Option<&V> {
        self.get(&name)
    }
}

impl<V: BoolLike> Assignment for [(char, V)] {
    type Value = V;

    fn value(&self, name: char) -> Option<&V> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

impl<V: BoolLike, const N: usize> Assignment for [(char, V); N] {
    type Value = V;

    fn value(&self, name: char) -> Option<&V> {
        self.as_slice().value(name)
    }
}

impl Term {
    pub fn eval<A: Assignment + ?Sized>(&self, assignment: &A) -> EvalResult<bool> {
        match *self {
            Term::Const(value) => Ok(value),
            Term::Var(name) => assignment
                .value(name)
                .ok_or(EvalError::UndefinedVariable { name })?
                .as_bool()
                .ok_or(EvalError::NonBooleanVariable { name }),
        }
    }
}

impl Expr {
    /// Evaluates the expression under the given variable assignment.
    ///
    /// Both operands of a binary operator are always evaluated, so an undefined variable
    /// is reported even where its value could not change the result.
    pub fn eval<A: Assignment + ?Sized>(&self, assignment: &A) -> EvalResult<bool> {
        Ok(match self {
            Expr::Term(term) => term.eval(assignment)?,
            Expr::Wrap(a) => a.eval(assignment)?,
            Expr::Not(a) => !a.eval(assignment)?,
            Expr::Xor(a, b) => a.eval(assignment)? ^ b.eval(assignment)?,
            Expr::And(a, b) => {
                let lhs = a.eval(assignment)?;
                let rhs = b.eval(assignment)?;
                lhs && rhs
            }
            Expr::Or(a, b) => {
                let lhs = a.eval(assignment)?;
                let rhs = b.eval(assignment)?;
                lhs || rhs
            }
        })
    }
}
