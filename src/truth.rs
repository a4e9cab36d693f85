//! Truth tables and truth sets.
//!
//! Both enumerate all `2^n` assignments of the given variables, so they are only practical
//! for a handful of variables.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::error::{EvalError, EvalResult};
use crate::expr::Expr;

/// One row of a truth table: the assignment as a bit string, and the value of the expression.
pub type TruthRow = (String, bool);

impl Expr {
    /// Evaluates the expression under every assignment of `variables`.
    ///
    /// Assignments are enumerated by counting from `0` to `2^n - 1`, the first variable
    /// being the most significant bit. Each row holds one `'0'`/`'1'` character per
    /// variable, in the order of `variables`.
    ///
    /// Be aware of the exponential number of rows!
    pub fn truth_table(&self, variables: &[char]) -> EvalResult<Vec<TruthRow>> {
        let mut rows = Vec::new();
        self.for_each_assignment(variables, |bits, value| rows.push((bits, value)))?;
        Ok(rows)
    }

    /// Returns the bit strings of all assignments of `variables` satisfying the expression.
    ///
    /// See [`Expr::truth_table`] for the layout of the bit strings. Every variable used by the
    /// expression must appear in `variables`, otherwise evaluation fails.
    pub fn truth_set(&self, variables: &[char]) -> EvalResult<BTreeSet<String>> {
        let mut set = BTreeSet::new();
        self.for_each_assignment(variables, |bits, value| {
            if value {
                set.insert(bits);
            }
        })?;
        debug!(
            "truth_set over {} variables: {} of {} assignments are true",
            variables.len(),
            set.len(),
            1u64 << variables.len()
        );
        Ok(set)
    }

    fn for_each_assignment<F>(&self, variables: &[char], mut f: F) -> EvalResult<()>
    where
        F: FnMut(String, bool),
    {
        let n = variables.len();
        if n >= u64::BITS as usize {
            return Err(EvalError::TooManyVariables { count: n });
        }

        let mut assignment: HashMap<char, bool> = HashMap::with_capacity(n);
        for i in 0..(1u64 << n) {
            for (j, &name) in variables.iter().enumerate() {
                let bit = (i >> (n - j - 1)) & 1;
                assignment.insert(name, bit == 1);
            }
            let value = self.eval(&assignment)?;
            // Read the bits back from the assignment, so repeated names agree with each other.
            let bits = variables
                .iter()
                .map(|name| if assignment[name] { '1' } else { '0' })
                .collect();
            f(bits, value);
        }
        Ok(())
    }
}
