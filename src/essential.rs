// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{code::BitCode, errors::Error};
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// Selects the essential prime implicants: those that are the sole cover of
/// at least one original minterm.
///
/// A minterm covered by no prime implicant reports [`Error::UncoveredMinterm`]
/// (a correct reduction always carries every minterm's own code, possibly
/// unmerged, to the fixed point). A minterm covered by two or more prime
/// implicants contributes nothing; picking a minimal cover for such minterms
/// (Petrick's method) is deliberately not attempted.
pub fn essential_primes(
    primes: &BTreeMap<BitCode, BTreeSet<u32>>,
    minterms: &[u32],
    n: usize,
) -> Result<BTreeSet<BitCode>, Error> {
    let mut essential = BTreeSet::new();
    for &minterm in minterms {
        let encoded = BitCode::encode(minterm, n)?;
        let mut covers = 0usize;
        let mut sole = None;
        for pi in primes.keys() {
            if pi.covers(&encoded)? {
                covers += 1;
                sole = Some(pi);
            }
        }
        match covers {
            0 => return Err(Error::UncoveredMinterm { minterm }),
            1 => {
                let pi = sole.expect("covers == 1 implies a cover was recorded");
                essential.insert(pi.clone());
            }
            _ => {
                trace!("minterm {} covered by {} prime implicants", minterm, covers);
            }
        }
    }
    Ok(essential)
}
