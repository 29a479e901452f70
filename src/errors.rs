// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::code::{BitCode, MAX_VARS};
use thiserror::Error;

/// Failures surfaced by the minimization core.
///
/// All of these are detected close to their source and propagated to the
/// caller unchanged; none are recovered or retried internally. The last two
/// variants indicate internal inconsistencies rather than bad input: a
/// correct reduction always leaves every minterm covered, and colliding
/// wildcard codes always carry identical covered sets.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("variable count {n} outside 1..={max}", max = MAX_VARS)]
    InvalidVariableCount { n: usize },

    #[error("minterm {minterm} out of range for {n} variables")]
    InvalidMinterm { minterm: u32, n: usize },

    #[error("duplicate minterm {minterm} in input")]
    DuplicateMinterm { minterm: u32 },

    #[error("code width mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("invalid code symbol {symbol:?}, expected '0', '1' or '-'")]
    InvalidCodeSymbol { symbol: char },

    #[error("minterm {minterm} not covered by any prime implicant")]
    UncoveredMinterm { minterm: u32 },

    #[error("code {code} produced with conflicting covered minterm sets")]
    InconsistentDuplicateCode { code: BitCode },
}
