//! Expression trees.
//!
//! Leaves are single-character [`Term`]s. Inner nodes own their operands, so a parsed tree
//! is a plain value that can be cloned, compared and hashed.

use std::collections::BTreeSet;
use std::fmt;

use crate::operator::Operator;

/// A single-character token: a variable name or a literal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Term {
    /// An ASCII letter.
    Var(char),
    /// The literal `0` or `1`.
    Const(bool),
}

impl Term {
    /// Reads a token from a source byte.
    pub fn from_symbol(c: u8) -> Option<Term> {
        match c {
            b'0' => Some(Term::Const(false)),
            b'1' => Some(Term::Const(true)),
            c if c.is_ascii_alphabetic() => Some(Term::Var(c as char)),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Term::Var(name) => name,
            Term::Const(false) => '0',
            Term::Const(true) => '1',
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression tree.
///
/// Every node owns its operands, and the number of operands always matches the
/// arity of the node's [`Operator`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Term(Term),
    /// A single operand with no operator applied, e.g. a bare variable or `(a)`.
    Wrap(Box<Expr>),
    Not(Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn term(term: Term) -> Self {
        Expr::Term(term)
    }

    /// Variable leaf.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII letter.
    pub fn var(name: char) -> Self {
        assert!(
            name.is_ascii_alphabetic(),
            "Variable names must be single ASCII letters"
        );
        Expr::Term(Term::Var(name))
    }

    pub fn constant(value: bool) -> Self {
        Expr::Term(Term::Const(value))
    }

    pub fn wrap(inner: Self) -> Self {
        Expr::Wrap(Box::new(inner))
    }

    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// The operator at the root of this node. Leaves report [`Operator::None`].
    pub fn operator(&self) -> Operator {
        match self {
            Expr::Term(_) | Expr::Wrap(_) => Operator::None,
            Expr::Not(_) => Operator::Not,
            Expr::Xor(_, _) => Operator::Xor,
            Expr::And(_, _) => Operator::And,
            Expr::Or(_, _) => Operator::Or,
        }
    }

    /// The direct operands, left to right. Empty for a leaf.
    pub fn operands(&self) -> Vec<&Expr> {
        match self {
            Expr::Term(_) => vec![],
            Expr::Wrap(a) | Expr::Not(a) => vec![a.as_ref()],
            Expr::Xor(a, b) | Expr::And(a, b) | Expr::Or(a, b) => {
                vec![a.as_ref(), b.as_ref()]
            }
        }
    }

    pub fn is_term(&self) -> bool {
        matches!(self, Expr::Term(_))
    }

    /// Names of all variables referenced by the expression.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expr::Term(Term::Var(name)) => {
                    vars.insert(*name);
                }
                Expr::Term(Term::Const(_)) => {}
                _ => stack.extend(node.operands()),
            }
        }
        vars
    }
}
