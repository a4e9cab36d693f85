//! Operators of the expression language and their precedence.
//!
//! Operators are totally ordered by their *rank*: the higher the rank, the looser the
//! operator binds. The scanner splits every operand at its highest-ranked top-level
//! operator, so that operator becomes the root of the operand subtree.
//!
//! | Operator | Rank | Arity | Source | Polish |
//! |----------|------|-------|--------|--------|
//! | `None`   | 0    | 1     |        |        |
//! | `Not`    | 1    | 1     | `'`    | `~`    |
//! | `Xor`    | 2    | 2     | `^`    | `^`    |
//! | `And`    | 3    | 2     | `*`    | `*`    |
//! | `Or`     | 4    | 2     | `+`    | `+`    |
use std::fmt;

/// A boolean operator.
///
/// Variants are declared in rank order, so the derived `Ord` compares by rank.
///
/// # Invariants
///
/// - `None` is the lowest rank and means "no operator applied".
/// - The arity of an operator equals the number of operands of any node built with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    None,
    Not,
    Xor,
    And,
    Or,
}

impl Operator {
    /// All operators, in rank order.
    pub const ALL: [Operator; 5] = [
        Operator::None,
        Operator::Not,
        Operator::Xor,
        Operator::And,
        Operator::Or,
    ];

    /// Returns the precedence rank of the operator.
    pub const fn rank(self) -> u8 {
        match self {
            Operator::None => 0,
            Operator::Not => 1,
            Operator::Xor => 2,
            Operator::And => 3,
            Operator::Or => 4,
        }
    }

    /// Returns the number of operands the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            Operator::None | Operator::Not => 1,
            Operator::Xor | Operator::And | Operator::Or => 2,
        }
    }

    /// Checks whether `self` binds strictly looser than `other`.
    ///
    /// An operand whose operator binds looser than its parent's must be bracketed.
    pub const fn binds_looser_than(self, other: Operator) -> bool {
        self.rank() > other.rank()
    }

    /// Maps a source character to the operator it denotes.
    pub const fn from_symbol(c: u8) -> Option<Operator> {
        match c {
            b'\'' => Some(Operator::Not),
            b'^' => Some(Operator::Xor),
            b'*' => Some(Operator::And),
            b'+' => Some(Operator::Or),
            _ => None,
        }
    }

    /// Symbol used by the infix (common) notation.
    pub const fn common_symbol(self) -> Option<char> {
        match self {
            Operator::None => None,
            Operator::Not => Some('\''),
            Operator::Xor => Some('^'),
            Operator::And => Some('*'),
            Operator::Or => Some('+'),
        }
    }

    /// Symbol used by the prefix (polish) notation.
    pub const fn polish_symbol(self) -> Option<char> {
        match self {
            Operator::None => None,
            Operator::Not => Some('~'),
            Operator::Xor => Some('^'),
            Operator::And => Some('*'),
            Operator::Or => Some('+'),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::None => "NONE",
            Operator::Not => "NOT",
            Operator::Xor => "XOR",
            Operator::And => "AND",
            Operator::Or => "OR",
        };
        write!(f, "{}", name)
    }
}
