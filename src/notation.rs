//! Rendering expression trees back to text.
//!
//! Two notations are supported:
//!
//! - **Polish** (prefix) notation: `* a ~ b`, or `*( a, ~( b ) )` in *beautify* mode.
//!   Always unambiguous, never drops an operator. It can be read back with
//!   [`parse_polish`](crate::polish::parse_polish).
//! - **Common** (infix) notation: the syntax accepted by [`parse`](crate::parser::parse),
//!   with as few brackets and `*` symbols as possible: `ab'`.
//!
//! ```
//! use bexpp::parser::parse;
//!
//! let e = parse("(a * (b'))").unwrap();
//! assert_eq!(e.polish_notation(false), "* a ~ b");
//! assert_eq!(e.polish_notation(true), "*( a, ~( b ) )");
//! assert_eq!(e.common_notation(), "ab'");
//! ```

use std::fmt;

use crate::expr::{Expr, Term};

impl Expr {
    /// Renders the expression in prefix notation.
    ///
    /// Operands are separated by a space, or bracketed and separated by `", "` when
    /// `beautify` is set.
    pub fn polish_notation(&self, beautify: bool) -> String {
        let mut out = String::new();
        self.write_polish(&mut out, beautify);
        out
    }

    fn write_polish(&self, out: &mut String, beautify: bool) {
        if let Expr::Term(term) = self {
            out.push(term.symbol());
            return;
        }

        let symbol = self.operator().polish_symbol();
        if let Some(symbol) = symbol {
            out.push(symbol);
            out.push_str(if beautify { "( " } else { " " });
        }
        for (i, operand) in self.operands().into_iter().enumerate() {
            if i > 0 {
                out.push_str(if beautify { ", " } else { " " });
            }
            operand.write_polish(out, beautify);
        }
        if beautify && symbol.is_some() {
            out.push_str(" )");
        }
    }

    /// Renders the expression in infix notation, re-readable by the parser.
    ///
    /// An operand is bracketed only when its operator binds looser than its parent's.
    /// The `*` symbol is dropped wherever the parser would infer it from two adjacent tokens.
    pub fn common_notation(&self) -> String {
        match self {
            Expr::Term(term) => term.symbol().to_string(),
            Expr::Wrap(a) => self.common_operand(a),
            Expr::Not(a) => format!("{}'", self.common_operand(a)),
            Expr::Xor(a, b) => format!("{}^{}", self.common_operand(a), self.common_operand(b)),
            Expr::And(a, b) => {
                let lhs = self.common_operand(a);
                let rhs = self.common_operand(b);
                if can_omit_and(&lhs, &rhs) {
                    lhs + &rhs
                } else {
                    format!("{}*{}", lhs, rhs)
                }
            }
            Expr::Or(a, b) => format!("{}+{}", self.common_operand(a), self.common_operand(b)),
        }
    }

    fn common_operand(&self, operand: &Expr) -> String {
        let s = operand.common_notation();
        if operand.operator().binds_looser_than(self.operator()) {
            format!("({})", s)
        } else {
            s
        }
    }
}

/// Checks whether `lhs` and `rhs` joined without `*` still read as their conjunction.
///
/// The parser infers AND only between a token (possibly followed by NOTs) and a token.
fn can_omit_and(lhs: &str, rhs: &str) -> bool {
    let is_token = |c: u8| Term::from_symbol(c).is_some();
    let lhs_ends_with_token = lhs
        .trim_end_matches('\'')
        .bytes()
        .last()
        .is_some_and(is_token);
    let rhs_starts_with_token = rhs.bytes().next().is_some_and(is_token);
    lhs_ends_with_token && rhs_starts_with_token
}

impl fmt::Display for Expr {
    /// Formats the expression in [common notation](Expr::common_notation).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.common_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse;

    fn common(text: &str) -> String {
        parse(text).unwrap().common_notation()
    }

    #[test]
    fn test_polish_plain() {
        assert_eq!(parse("ab'").unwrap().polish_notation(false), "* a ~ b");
        assert_eq!(parse("a").unwrap().polish_notation(false), "a");
        assert_eq!(parse("a+b*c").unwrap().polish_notation(false), "+ a * b c");
        assert_eq!(parse("(ab)'").unwrap().polish_notation(false), "~ * a b");
    }

    #[test]
    fn test_polish_beautify() {
        assert_eq!(parse("a+b*c").unwrap().polish_notation(true), "+( a, *( b, c ) )");
        assert_eq!(parse("a''").unwrap().polish_notation(true), "~( ~( a ) )");
        assert_eq!(parse("(1)").unwrap().polish_notation(true), "1");
    }

    #[test]
    fn test_polish_wrapper_inside_operator() {
        let e = Expr::not(Expr::wrap(Expr::var('a')));
        assert_eq!(e.polish_notation(false), "~ a");
        assert_eq!(e.polish_notation(true), "~( a )");
    }

    #[test]
    fn test_common_minimal_brackets() {
        assert_eq!(common("a+(b*c)"), "a+bc");
        assert_eq!(common("(a+b)*c"), "(a+b)*c");
        assert_eq!(common("(a^b)*c"), "a^bc");
        assert_eq!(common("a*(b^c)"), "ab^c");
        assert_eq!(common("(a+b)'"), "(a+b)'");
        assert_eq!(common("((a))"), "a");
    }

    #[test]
    fn test_common_and_omission() {
        assert_eq!(common("a*b"), "ab");
        assert_eq!(common("a'*b"), "a'b");
        assert_eq!(common("a*b'"), "ab'");
        assert_eq!(common("a*(b+c)"), "a*(b+c)");
        assert_eq!(common("(a+b)'*c"), "(a+b)'*c");
        assert_eq!(common("(a*b)'*c"), "(ab)'*c");
        assert_eq!(common("a*(b*c)'"), "a*(bc)'");
        assert_eq!(common("0*1"), "01");
    }

    #[test]
    fn test_common_constructed_trees() {
        let e = Expr::and(
            Expr::wrap(Expr::or(Expr::var('a'), Expr::var('b'))),
            Expr::var('c'),
        );
        assert_eq!(e.common_notation(), "(a+b)*c");

        let e = Expr::xor(
            Expr::or(Expr::var('a'), Expr::var('b')),
            Expr::and(Expr::var('c'), Expr::var('d')),
        );
        assert_eq!(e.common_notation(), "(a+b)^(cd)");
    }

    #[test]
    fn test_display() {
        let e = parse("a * b + c'").unwrap();
        assert_eq!(e.to_string(), "ab+c'");
        assert_eq!(format!("{}", e), e.common_notation());
    }

    #[test]
    fn test_can_omit_and() {
        assert!(can_omit_and("a", "b"));
        assert!(can_omit_and("a''", "b'"));
        assert!(!can_omit_and("(a+b)'", "c"));
        assert!(!can_omit_and("a", "(b+c)"));
        assert!(!can_omit_and("", "a"));
    }
}
