// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    code::{BitCode, MAX_VARS},
    display::TableDisplay,
    errors::Error,
    essential, primes,
};
use std::collections::{BTreeMap, BTreeSet};

/// The result of minimizing one function: the deduplicated prime implicant
/// map and the essential subset of its codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minimization {
    prime_implicants: BTreeMap<BitCode, BTreeSet<u32>>,
    essential: BTreeSet<BitCode>,
}

impl Minimization {
    /// Every prime implicant, keyed by its wildcard code, mapped to the
    /// exact set of input minterms it subsumes.
    #[inline]
    pub fn prime_implicants(&self) -> &BTreeMap<BitCode, BTreeSet<u32>> {
        &self.prime_implicants
    }

    /// Codes of the prime implicants that are the sole cover of some
    /// minterm. May be empty even for a non-trivial function.
    #[inline]
    pub fn essential(&self) -> &BTreeSet<BitCode> {
        &self.essential
    }

    #[inline]
    pub fn table_display(&self) -> TableDisplay<'_> {
        TableDisplay::new(self)
    }
}

/// Computes the minimal two-level cover data for the function with `n`
/// variables that is true exactly on `minterms`.
///
/// `minterms` must be distinct values in `[0, 2^n)`; duplicates are an
/// error rather than being silently collapsed. The computation is pure and
/// deterministic: equal inputs always produce equal outputs, and no global
/// state is touched, so independent invocations may run concurrently.
pub fn minimize(n: usize, minterms: &[u32]) -> Result<Minimization, Error> {
    validate(n, minterms)?;
    let prime_implicants = primes::prime_implicants(minterms, n)?;
    let essential = essential::essential_primes(&prime_implicants, minterms, n)?;
    Ok(Minimization {
        prime_implicants,
        essential,
    })
}

fn validate(n: usize, minterms: &[u32]) -> Result<(), Error> {
    if n == 0 || n > MAX_VARS {
        return Err(Error::InvalidVariableCount { n });
    }
    let mut seen = BTreeSet::new();
    for &minterm in minterms {
        if (minterm as u64) >= 1u64 << n {
            return Err(Error::InvalidMinterm { minterm, n });
        }
        if !seen.insert(minterm) {
            return Err(Error::DuplicateMinterm { minterm });
        }
    }
    Ok(())
}
