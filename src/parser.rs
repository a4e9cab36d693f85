//! Single-pass recursive parser for boolean expressions.
//!
//! # Syntax
//!
//! - Tokens are single characters: an ASCII letter (variable) or `0`/`1` (literal).
//! - `'` is a postfix NOT, `^` is XOR, `*` is AND, `+` is OR. From tightest to loosest
//!   binding: NOT, XOR, AND, OR.
//! - Two tokens next to each other (possibly separated by spaces or with `'` after the
//!   first one) are an implicit AND: `ab'` is `a * b'`, `a'b` is `a' * b`.
//! - Brackets group as usual. Spaces are ignored.
//!
//! # Algorithm
//!
//! There is no tokenizer. Every operand is a *window* into the original buffer.
//! The window is scanned once, left to right, tracking the bracket nesting level. Among the
//! operators at level 0 the loosest-binding one becomes the root of the operand, and the
//! windows to its left and right are parsed recursively. Ties between equal binary
//! operators go to the leftmost occurrence (so chains nest to the right), while ties between
//! NOTs go to the rightmost one, since a postfix NOT applies to everything on its left.
//!
//! Every bracket level and every element of an operator chain costs one level of recursion.
//! Inputs nested deeper than [`MAX_DEPTH`] are rejected with [`ParseErrorKind::TooDeep`].
//!
//! ```
//! use bexpp::expr::Expr;
//! use bexpp::parser::parse;
//!
//! let e = parse("ab'").unwrap();
//! assert_eq!(e, Expr::and(Expr::var('a'), Expr::not(Expr::var('b'))));
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use log::trace;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::expr::{Expr, Term};
use crate::operator::Operator;

/// Maximum nesting depth accepted by the parsers.
pub const MAX_DEPTH: usize = 256;

/// Parses the whole `text` into an expression tree.
pub fn parse(text: &str) -> ParseResult<Expr> {
    parse_window(text, 0, text.len())
}

/// Parses the `len` bytes of `text` starting at byte `offset`.
///
/// Error offsets are always reported relative to the start of `text`.
pub fn parse_window(text: &str, offset: usize, len: usize) -> ParseResult<Expr> {
    match offset.checked_add(len) {
        Some(end) if end <= text.len() => {}
        _ => {
            return Err(ParseError::new(
                offset,
                ParseErrorKind::WindowOutOfBounds {
                    len,
                    buffer_len: text.len(),
                },
            ))
        }
    }
    Scanner::new(text).parse_expr(Window::new(offset, offset + len), 0)
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// A half-open byte range `[start, end)` of the buffer being parsed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Window {
    start: usize,
    end: usize,
}

impl Window {
    fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    fn is_empty(self) -> bool {
        self.start == self.end
    }

    fn last(self) -> usize {
        self.end - 1
    }
}

/// The root of a window: the NOT or binary operator it is split at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Root {
    Not(usize),
    Xor(usize),
    And(usize),
    Or(usize),
}

struct Scanner<'a> {
    text: &'a str,
    buf: &'a [u8],
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            buf: text.as_bytes(),
        }
    }

    fn show(&self, window: Window) -> Cow<'a, str> {
        String::from_utf8_lossy(&self.buf[window.start..window.end])
    }

    fn error(&self, offset: usize, kind: ParseErrorKind) -> ParseError {
        ParseError::new(offset, kind)
    }

    /// Strips the leading and trailing spaces of the window.
    fn trim(&self, window: Window) -> Window {
        let Window { mut start, mut end } = window;
        while start < end && self.buf[start] == b' ' {
            start += 1;
        }
        while end > start && self.buf[end - 1] == b' ' {
            end -= 1;
        }
        Window::new(start, end)
    }

    /// Returns the token if the window, ignoring spaces, is exactly one token.
    fn token(&self, window: Window) -> Option<Term> {
        let mut symbols = self.buf[window.start..window.end]
            .iter()
            .filter(|&&c| c != b' ');
        match (symbols.next(), symbols.next()) {
            (Some(&c), None) => Term::from_symbol(c),
            _ => None,
        }
    }

    /// Finds the root operator of the window, if there is one at nesting level 0.
    fn scan(&self, window: Window) -> ParseResult<Option<Root>> {
        let mut found = Operator::None;
        let mut index = window.start;
        let mut level = 0usize;
        let mut outermost_open = window.start;
        // Whether the last token-like symbol (ignoring NOTs and spaces) was a token.
        let mut last_was_token = false;

        for i in window.start..window.end {
            let c = self.buf[i];
            match c {
                b'(' => {
                    if level == 0 {
                        outermost_open = i;
                    }
                    level += 1;
                }
                b')' => {
                    if level == 0 {
                        return Err(self.error(i, ParseErrorKind::UnbalancedBrackets));
                    }
                    level -= 1;
                }
                b'\'' => {
                    // `<=`: the rightmost NOT wins.
                    if level == 0 && found <= Operator::Not {
                        found = Operator::Not;
                        index = i;
                    }
                    continue;
                }
                b' ' => continue,
                _ => {
                    if let Some(op) = Operator::from_symbol(c) {
                        if level == 0 && found < op {
                            found = op;
                            index = i;
                        }
                    } else if Term::from_symbol(c).is_some() {
                        if last_was_token {
                            // Implicit AND, as in `ab` or `a'b`.
                            if level == 0 && found < Operator::And {
                                found = Operator::And;
                                index = i;
                            }
                        } else {
                            last_was_token = true;
                        }
                        continue;
                    } else {
                        let symbol = self
                            .text
                            .get(i..)
                            .and_then(|rest| rest.chars().next())
                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                        return Err(self.error(i, ParseErrorKind::UnknownSymbol(symbol)));
                    }
                }
            }
            last_was_token = false;
        }

        if level > 0 {
            return Err(self.error(outermost_open, ParseErrorKind::UnterminatedBracket));
        }

        Ok(match found {
            Operator::None => None,
            Operator::Not => Some(Root::Not(index)),
            Operator::Xor => Some(Root::Xor(index)),
            Operator::And => Some(Root::And(index)),
            Operator::Or => Some(Root::Or(index)),
        })
    }

    /// Parses an operand: a bare token becomes a leaf, anything else a subtree.
    fn parse_operand(&self, window: Window, depth: usize) -> ParseResult<Expr> {
        let trimmed = self.trim(window);
        if trimmed.is_empty() {
            return Err(self.error(window.start, ParseErrorKind::EmptyOperand));
        }
        match self.token(trimmed) {
            Some(term) => Ok(Expr::Term(term)),
            None => self.parse_expr(trimmed, depth),
        }
    }

    fn parse_expr(&self, window: Window, depth: usize) -> ParseResult<Expr> {
        let trimmed = self.trim(window);
        if trimmed.is_empty() {
            return Err(self.error(window.start, ParseErrorKind::EmptyOperand));
        }
        let window = trimmed;
        if depth > MAX_DEPTH {
            let kind = ParseErrorKind::TooDeep { limit: MAX_DEPTH };
            return Err(self.error(window.start, kind));
        }

        let found = self.scan(window)?;
        trace!(
            "scan [{}..{}) {:?} -> {:?}",
            window.start,
            window.end,
            self.show(window),
            found
        );

        match found {
            None => {
                if self.buf[window.start] == b'(' && self.buf[window.last()] == b')' {
                    // The whole operand is bracketed, descend one level.
                    let inner = Window::new(window.start + 1, window.last());
                    return self.parse_expr(inner, depth + 1);
                }
                match self.token(window) {
                    Some(term) => Ok(Expr::wrap(Expr::Term(term))),
                    None => Err(self.error(
                        window.start,
                        ParseErrorKind::MissingOperator { end: window.last() },
                    )),
                }
            }
            Some(Root::Not(index)) => {
                if index != window.last() {
                    return Err(self.error(index + 1, ParseErrorKind::UnexpectedAfterNot));
                }
                let operand = self.parse_operand(Window::new(window.start, index), depth + 1)?;
                Ok(Expr::not(operand))
            }
            Some(Root::Xor(index)) => {
                let (lhs, rhs) = self.parse_binary(window, index, false, depth)?;
                Ok(Expr::xor(lhs, rhs))
            }
            Some(Root::And(index)) => {
                let implicit = self.buf[index] != b'*';
                let (lhs, rhs) = self.parse_binary(window, index, implicit, depth)?;
                Ok(Expr::and(lhs, rhs))
            }
            Some(Root::Or(index)) => {
                let (lhs, rhs) = self.parse_binary(window, index, false, depth)?;
                Ok(Expr::or(lhs, rhs))
            }
        }
    }

    /// Parses both sides of a binary operator found at `index`.
    ///
    /// An implicit operator occupies no character, so the right operand starts at `index`.
    fn parse_binary(
        &self,
        window: Window,
        index: usize,
        implicit: bool,
        depth: usize,
    ) -> ParseResult<(Expr, Expr)> {
        let rhs_start = if implicit { index } else { index + 1 };
        let lhs = self.parse_operand(Window::new(window.start, index), depth + 1)?;
        let rhs = self.parse_operand(Window::new(rhs_start, window.end), depth + 1)?;
        Ok((lhs, rhs))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn var(name: char) -> Expr {
        Expr::var(name)
    }

    fn parse_err(text: &str) -> ParseError {
        match parse(text) {
            Ok(e) => panic!("expected {:?} to fail, got {:?}", text, e),
            Err(err) => err,
        }
    }

    #[test]
    fn test_parse_bare_token() {
        assert_eq!(parse("a").unwrap(), Expr::wrap(var('a')));
        assert_eq!(parse("  a  ").unwrap(), Expr::wrap(var('a')));
        assert_eq!(parse("(a)").unwrap(), Expr::wrap(var('a')));
        assert_eq!(parse("((1))").unwrap(), Expr::wrap(Expr::constant(true)));
    }

    #[test]
    fn test_parse_precedence() {
        assert_eq!(
            parse("a+b*c").unwrap(),
            Expr::or(var('a'), Expr::and(var('b'), var('c')))
        );
        assert_eq!(
            parse("a*b^c").unwrap(),
            Expr::and(var('a'), Expr::xor(var('b'), var('c')))
        );
        assert_eq!(
            parse("a^b*c").unwrap(),
            Expr::and(Expr::xor(var('a'), var('b')), var('c'))
        );
        assert_eq!(
            parse("a'^b").unwrap(),
            Expr::xor(Expr::not(var('a')), var('b'))
        );
    }

    #[test]
    fn test_parse_chains_nest_right() {
        assert_eq!(
            parse("a^b^c").unwrap(),
            Expr::xor(var('a'), Expr::xor(var('b'), var('c')))
        );
        assert_eq!(
            parse("a + b + c").unwrap(),
            Expr::or(var('a'), Expr::or(var('b'), var('c')))
        );
        assert_eq!(
            parse("abc").unwrap(),
            Expr::and(var('a'), Expr::and(var('b'), var('c')))
        );
    }

    #[test]
    fn test_parse_implicit_and() {
        let expected = Expr::and(var('a'), var('b'));
        assert_eq!(parse("ab").unwrap(), expected);
        assert_eq!(parse("a b").unwrap(), expected);
        assert_eq!(parse("a*b").unwrap(), expected);
        assert_eq!(
            parse("a'b").unwrap(),
            Expr::and(Expr::not(var('a')), var('b'))
        );
        assert_eq!(
            parse("a'b'").unwrap(),
            Expr::and(Expr::not(var('a')), Expr::not(var('b')))
        );
        assert_eq!(
            parse("01").unwrap(),
            Expr::and(Expr::constant(false), Expr::constant(true))
        );
    }

    #[test]
    fn test_parse_postfix_not() {
        assert_eq!(
            parse("ab'").unwrap(),
            Expr::and(var('a'), Expr::not(var('b')))
        );
        assert_eq!(
            parse("(ab)'").unwrap(),
            Expr::not(Expr::and(var('a'), var('b')))
        );
        assert_eq!(parse("a''").unwrap(), Expr::not(Expr::not(var('a'))));
        assert_eq!(parse("(a)'").unwrap(), Expr::not(Expr::wrap(var('a'))));
    }

    #[test]
    fn test_parse_nested_brackets() {
        // Only one bracket level is stripped per step, so `(x)(y)` is torn apart.
        assert_eq!(
            parse_err("((a+b)(c))'"),
            ParseError::new(5, ParseErrorKind::UnbalancedBrackets)
        );
        assert_eq!(
            parse("((a+b)*(c))'").unwrap(),
            Expr::not(Expr::and(
                Expr::or(var('a'), var('b')),
                Expr::wrap(var('c'))
            ))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_err("a++b"),
            ParseError::new(2, ParseErrorKind::EmptyOperand)
        );
        assert_eq!(
            parse_err("(a"),
            ParseError::new(0, ParseErrorKind::UnterminatedBracket)
        );
        assert_eq!(
            parse_err("a*(b*(c)"),
            ParseError::new(2, ParseErrorKind::UnterminatedBracket)
        );
        assert_eq!(
            parse_err("a)"),
            ParseError::new(1, ParseErrorKind::UnbalancedBrackets)
        );
        assert_eq!(
            parse_err("a$b"),
            ParseError::new(1, ParseErrorKind::UnknownSymbol('$'))
        );
        assert_eq!(
            parse_err("a+é"),
            ParseError::new(2, ParseErrorKind::UnknownSymbol('é'))
        );
        assert_eq!(
            parse_err("a(b)"),
            ParseError::new(0, ParseErrorKind::MissingOperator { end: 3 })
        );
        assert_eq!(
            parse_err("a'(b)"),
            ParseError::new(2, ParseErrorKind::UnexpectedAfterNot)
        );
        assert_eq!(parse_err(""), ParseError::new(0, ParseErrorKind::EmptyOperand));
        assert_eq!(parse_err("   "), ParseError::new(0, ParseErrorKind::EmptyOperand));
        assert_eq!(parse_err("()"), ParseError::new(1, ParseErrorKind::EmptyOperand));
        assert_eq!(
            parse_err("a+ "),
            ParseError::new(2, ParseErrorKind::EmptyOperand)
        );
    }

    #[test]
    fn test_parse_rejects_long_names() {
        assert_eq!(
            parse_err("x2"),
            ParseError::new(1, ParseErrorKind::UnknownSymbol('2'))
        );
    }

    #[test]
    fn test_parse_window() {
        let text = "ignored a*b ignored";
        assert_eq!(
            parse_window(text, 8, 3).unwrap(),
            Expr::and(var('a'), var('b'))
        );
        assert_eq!(
            parse_window(text, 8, 2).unwrap_err(),
            ParseError::new(10, ParseErrorKind::EmptyOperand)
        );
        assert_eq!(
            parse_window(text, 10, 100).unwrap_err(),
            ParseError::new(
                10,
                ParseErrorKind::WindowOutOfBounds {
                    len: 100,
                    buffer_len: text.len()
                }
            )
        );
    }

    #[test]
    fn test_parse_depth_limit() {
        let n = 10_000;
        let text = format!("{}a{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(
            parse_err(&text),
            ParseError::new(MAX_DEPTH + 1, ParseErrorKind::TooDeep { limit: MAX_DEPTH })
        );

        let text = vec!["a"; n].join("+");
        assert_eq!(
            parse_err(&text),
            ParseError::new(2 * (MAX_DEPTH + 1), ParseErrorKind::TooDeep { limit: MAX_DEPTH })
        );

        let text = format!("a{}", "'".repeat(n));
        assert_eq!(
            parse_err(&text).kind,
            ParseErrorKind::TooDeep { limit: MAX_DEPTH }
        );
    }

    #[test]
    fn test_parse_at_depth_limit() {
        let text = format!("{}a{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&text).unwrap(), Expr::wrap(var('a')));

        let text = vec!["a"; MAX_DEPTH].join("+");
        let e = parse(&text).unwrap();
        assert_eq!(e.variables().len(), 1);
    }

    #[test]
    fn test_from_str() {
        let e: Expr = "a+b".parse().unwrap();
        assert_eq!(e, Expr::or(var('a'), var('b')));
        assert!("a+".parse::<Expr>().is_err());
    }
}
