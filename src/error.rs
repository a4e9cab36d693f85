//! Error types for parsing and evaluating expressions.

use thiserror::Error;

/// Why a window of text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `)` was found with no matching `(` before it.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,

    /// The window ended while a `(` was still open.
    #[error("end of sequence reached while expecting ')' for the bracket")]
    UnterminatedBracket,

    /// A character that is neither a token, an operator, a bracket nor a space.
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(char),

    /// The operand has no top-level operator and is not a single token.
    /// `end` is the offset of the last byte of the operand.
    #[error("missing main operator in operand ending at byte {end}")]
    MissingOperator { end: usize },

    /// Something follows the NOT operator chosen as the operand root.
    #[error("unexpected symbol after NOT operator")]
    UnexpectedAfterNot,

    /// The operand window holds nothing but spaces.
    #[error("expecting operand")]
    EmptyOperand,

    /// A specific symbol was required here.
    #[error("expected {0:?}")]
    Expected(char),

    /// The expression is complete but more input follows.
    #[error("unexpected input after the end of the expression")]
    TrailingInput,

    /// Brackets or operator chains are nested deeper than the parser allows.
    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// The requested window does not lie within the buffer.
    #[error("window of length {len} does not fit in a buffer of length {buffer_len}")]
    WindowOutOfBounds { len: usize, buffer_len: usize },
}

/// A parse failure, located by its byte offset in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub offset: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// Failures raised while evaluating a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The assignment has no value for a variable used by the expression.
    #[error("value not defined for variable {name}")]
    UndefinedVariable { name: char },

    /// The assignment binds a variable to something that is neither a boolean, `0` nor `1`.
    #[error("expected boolean value for variable {name}")]
    NonBooleanVariable { name: char },

    /// The truth table counter cannot enumerate this many variables.
    #[error("cannot enumerate assignments of {count} variables")]
    TooManyVariables { count: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type EvalResult<T> = Result<T, EvalError>;
