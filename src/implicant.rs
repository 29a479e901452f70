// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{code::BitCode, errors::Error};
use std::collections::BTreeSet;

/// A wildcard code together with the exact set of original minterms it
/// subsumes.
///
/// Implicants are never mutated in place: each combination builds a new
/// value whose code has exactly one more wildcard than its parents and
/// whose covered set is the union of the parents' sets.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Implicant {
    code: BitCode,
    minterms: BTreeSet<u32>,
}

impl Implicant {
    /// The degenerate implicant of a single minterm: all bits fixed,
    /// covering only itself.
    pub fn minterm(minterm: u32, n: usize) -> Result<Self, Error> {
        let code = BitCode::encode(minterm, n)?;
        let minterms = BTreeSet::from([minterm]);
        Ok(Self { code, minterms })
    }

    pub fn new(code: BitCode, minterms: BTreeSet<u32>) -> Self {
        Self { code, minterms }
    }

    /// Combines two implicants whose codes are at Hamming distance 1.
    /// Returns `Ok(None)` when the codes do not combine.
    pub fn combine(&self, other: &Self) -> Result<Option<Self>, Error> {
        let merged = match self.code.combine(&other.code)? {
            Some(merged) => merged,
            None => return Ok(None),
        };
        let minterms = self.minterms.union(&other.minterms).copied().collect();
        Ok(Some(Self {
            code: merged,
            minterms,
        }))
    }

    #[inline]
    pub fn code(&self) -> &BitCode {
        &self.code
    }

    #[inline]
    pub fn minterms(&self) -> &BTreeSet<u32> {
        &self.minterms
    }

    #[inline]
    pub fn into_parts(self) -> (BitCode, BTreeSet<u32>) {
        (self.code, self.minterms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm_implicant() {
        let imp = Implicant::minterm(5, 3).unwrap();
        assert_eq!(imp.code().to_string(), "101");
        assert_eq!(imp.minterms(), &BTreeSet::from([5]));
    }

    #[test]
    fn test_combine_unions_minterms() {
        let a = Implicant::minterm(0, 3).unwrap();
        let b = Implicant::minterm(1, 3).unwrap();
        let merged = a.combine(&b).unwrap().expect("0 and 1 are adjacent");
        assert_eq!(merged.code().to_string(), "00-");
        assert_eq!(merged.minterms(), &BTreeSet::from([0, 1]));
        assert_eq!(merged.code().wildcard_count(), 1);

        let c = Implicant::minterm(2, 3).unwrap();
        let d = Implicant::minterm(3, 3).unwrap();
        let other = c.combine(&d).unwrap().expect("2 and 3 are adjacent");
        let quad = merged.combine(&other).unwrap().expect("00- and 01- combine");
        assert_eq!(quad.code().to_string(), "0--");
        assert_eq!(quad.minterms(), &BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_combine_rejects_distant_codes() {
        let a = Implicant::minterm(0, 3).unwrap();
        let b = Implicant::minterm(7, 3).unwrap();
        assert_eq!(a.combine(&b).unwrap(), None);
    }

    #[test]
    fn test_combine_symmetry_on_code() {
        let a = Implicant::minterm(6, 3).unwrap();
        let b = Implicant::minterm(7, 3).unwrap();
        let ab = a.combine(&b).unwrap().unwrap();
        let ba = b.combine(&a).unwrap().unwrap();
        assert_eq!(ab, ba);
    }
}
