//! Reader for the prefix (polish) notation produced by [`Expr::polish_notation`].
//!
//! Both the plain form (`* a ~ b`) and the beautified form (`*( a, ~( b ) )`) are accepted.
//! An operator followed directly by `(` starts a bracketed operand list, separated by `,`;
//! otherwise its operands simply follow it, separated by spaces.
//! Operators nested deeper than [`MAX_DEPTH`] are rejected.

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::expr::{Expr, Term};
use crate::parser::MAX_DEPTH;

/// Parses an expression written in prefix notation.
pub fn parse_polish(text: &str) -> ParseResult<Expr> {
    let mut reader = Reader { text, pos: 0 };
    let expr = reader.read_expr(0)?;
    reader.skip_spaces();
    if reader.pos < text.len() {
        return Err(ParseError::new(reader.pos, ParseErrorKind::TrailingInput));
    }
    Ok(expr)
}

struct Reader<'a> {
    text: &'a str,
    pos: usize,
}

impl Reader<'_> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn expect(&mut self, symbol: u8) -> ParseResult<()> {
        self.skip_spaces();
        if self.peek() == Some(symbol) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ParseError::new(self.pos, ParseErrorKind::Expected(symbol as char)))
        }
    }

    fn read_expr(&mut self, depth: usize) -> ParseResult<Expr> {
        self.skip_spaces();
        let c = match self.peek() {
            Some(c) => c,
            None => return Err(ParseError::new(self.pos, ParseErrorKind::EmptyOperand)),
        };
        if let Some(term) = Term::from_symbol(c) {
            self.pos += 1;
            return Ok(Expr::Term(term));
        }
        if depth >= MAX_DEPTH {
            let kind = ParseErrorKind::TooDeep { limit: MAX_DEPTH };
            return Err(ParseError::new(self.pos, kind));
        }

        let start = self.pos;
        self.pos += 1;
        let bracketed = self.peek() == Some(b'(');
        if bracketed {
            self.pos += 1;
        }
        let expr = match c {
            b'~' => Expr::not(self.read_expr(depth + 1)?),
            b'^' => {
                let (lhs, rhs) = self.read_pair(bracketed, depth + 1)?;
                Expr::xor(lhs, rhs)
            }
            b'*' => {
                let (lhs, rhs) = self.read_pair(bracketed, depth + 1)?;
                Expr::and(lhs, rhs)
            }
            b'+' => {
                let (lhs, rhs) = self.read_pair(bracketed, depth + 1)?;
                Expr::or(lhs, rhs)
            }
            _ => {
                let symbol = self
                    .text
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::new(start, ParseErrorKind::UnknownSymbol(symbol)));
            }
        };
        if bracketed {
            self.expect(b')')?;
        }
        Ok(expr)
    }

    fn read_pair(&mut self, bracketed: bool, depth: usize) -> ParseResult<(Expr, Expr)> {
        let lhs = self.read_expr(depth)?;
        if bracketed {
            self.expect(b',')?;
        }
        let rhs = self.read_expr(depth)?;
        Ok((lhs, rhs))
    }
}
