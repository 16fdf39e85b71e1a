//! Positive integers built by addition.
//!
//! `1` is the only basic integer. `n` comes apart as `(k, n - k)` for every
//! `1 <= k <= n / 2`, and `x` lies below `y` when `x <= y`. Integers below 1
//! are outside the space.

use crate::error::{Error, Result};
use crate::object::{AssemblyObject, ComponentPair};

fn check(n: i64) -> Result<i64> {
    if n < 1 {
        return Err(Error::invalid(
            "integer",
            format!("integers less than 1 are not in the space (got {n})"),
        ));
    }
    Ok(n)
}

impl AssemblyObject for i64 {
    type Disassembly = Vec<ComponentPair<i64>>;

    fn is_basic(&self) -> Result<bool> {
        Ok(check(*self)? == 1)
    }

    fn is_below(&self, other: &Self) -> Result<bool> {
        Ok(check(*self)? <= check(*other)?)
    }

    fn disassemble(&self) -> Result<Self::Disassembly> {
        let n = check(*self)?;
        Ok((1..=n / 2).map(|left| (left, n - left)).collect())
    }
}
