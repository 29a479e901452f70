// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-level Boolean minimization via the Quine-McCluskey procedure.
//!
//! Given a variable count `n` and the minterms of a single-output function,
//! [`minimize::minimize`] produces the complete set of prime implicants
//! (wildcard codes mapped to the minterms they subsume) and the subset of
//! essential prime implicants (those that are the sole cover for some
//! minterm). Selecting a final minimal cover when no essential implicant
//! exists for a minterm (Petrick's method) is out of scope.

pub mod code;
pub mod display;
pub mod errors;
pub mod essential;
pub mod implicant;
pub mod minimize;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
