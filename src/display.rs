// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::minimize::Minimization;
use itertools::Itertools;
use std::{borrow::Cow, fmt};

/// Renders a [`Minimization`] as a prime implicant table, one
/// `code: minterms` row per implicant. Rendering is presentation only and
/// sits outside the algorithmic core.
#[derive(Clone, Debug)]
pub struct TableDisplay<'a> {
    minimization: &'a Minimization,
    row_separator: Cow<'a, str>,
    essential_marker: Option<Cow<'a, str>>,
}

impl<'a> TableDisplay<'a> {
    pub fn new(minimization: &'a Minimization) -> Self {
        Self {
            minimization,
            row_separator: Cow::Borrowed("\n"),
            essential_marker: None,
        }
    }

    pub fn with_row_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Appends the given marker to rows whose implicant is essential.
    pub fn with_essential_marker(mut self, marker: impl Into<Cow<'a, str>>) -> Self {
        self.essential_marker = Some(marker.into());
        self
    }
}

impl<'a> fmt::Display for TableDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let primes = self.minimization.prime_implicants();
        for (row_ix, (code, minterms)) in primes.iter().enumerate() {
            write!(f, "{}: {}", code, minterms.iter().join(" "))?;
            if let Some(marker) = &self.essential_marker {
                if self.minimization.essential().contains(code) {
                    write!(f, "{}", marker)?;
                }
            }
            if row_ix < primes.len() - 1 {
                write!(f, "{}", self.row_separator)?;
            }
        }
        Ok(())
    }
}
