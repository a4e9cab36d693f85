//! # bexpp: Boolean expressions in Rust
//!
//! **`bexpp`** parses boolean algebra expressions written in a compact infix notation into an
//! expression tree, evaluates the tree under variable assignments, enumerates its satisfying
//! assignments, and renders it back to text.
//!
//! ## Notation
//!
//! - Variables are single ASCII letters, literals are `0` and `1`.
//! - `'` is a postfix NOT, `^` is XOR, `*` is AND, `+` is OR, listed from the tightest to
//!   the loosest binding.
//! - AND may be omitted between adjacent tokens: `ab'c` means `a * b' * c`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::collections::{BTreeSet, HashMap};
//!
//! use bexpp::parser::parse;
//!
//! // 1. Parse an expression
//! let e = parse("a'b + c")?;
//!
//! // 2. Evaluate it (a=false, b=true, c=false) -> true
//! let assignment = HashMap::from([('a', false), ('b', true), ('c', false)]);
//! assert!(e.eval(&assignment)?);
//!
//! // 3. Enumerate the satisfying assignments, first variable as the most significant bit
//! let set = e.truth_set(&['a', 'b', 'c'])?;
//! assert_eq!(set.len(), 5);
//! assert!(set.contains("010"));
//!
//! // 4. Render it back
//! assert_eq!(e.polish_notation(false), "+ * ~ a b c");
//! assert_eq!(e.common_notation(), "a'b+c");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: The single-pass infix parser, the heart of the library.
//! - **[`expr`]**: The expression tree.
//! - **[`eval`]** and **[`truth`]**: Evaluation and truth set enumeration.
//! - **[`notation`]** and **[`polish`]**: Printing in infix and prefix notation, and reading prefix notation back.

pub mod error;
pub mod eval;
pub mod expr;
pub mod notation;
pub mod operator;
pub mod parser;
pub mod polish;
pub mod truth;
