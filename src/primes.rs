// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime implicant generation: popcount grouping, generation-by-generation
//! combination to a fixed point, and code-keyed deduplication.
//!
//! Each combination pass consumes the current generation and produces the
//! next one as a fresh value; generations are never aliased or cleared in
//! place. A pass only scans bucket pairs with identical wildcard positions
//! and ones counts differing by one: codes that disagree on wildcard
//! placement are never within Hamming distance 1 in any reachable
//! generation, because a code containing another's wildcards plus one more
//! can only have been created by consuming that very code. The test module
//! checks this strategy against an unrestricted all-pairs reduction.

use crate::{
    code::{popcount, BitCode, MAX_VARS},
    errors::Error,
    implicant::Implicant,
};
use bitvec::prelude::*;
use itertools::Itertools;
use log::debug;
use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

/// Partitions minterms into `n + 1` buckets keyed by popcount, preserving
/// input order within each bucket. Validates `n` and the minterm range.
pub fn group_by_popcount(minterms: &[u32], n: usize) -> Result<Vec<Vec<u32>>, Error> {
    if n == 0 || n > MAX_VARS {
        return Err(Error::InvalidVariableCount { n });
    }
    let mut buckets = vec![Vec::new(); n + 1];
    for &minterm in minterms {
        if (minterm as u64) >= 1u64 << n {
            return Err(Error::InvalidMinterm { minterm, n });
        }
        buckets[popcount(minterm) as usize].push(minterm);
    }
    Ok(buckets)
}

/// The initial generation: one degenerate implicant per minterm, ordered by
/// popcount bucket.
pub fn initial_generation(minterms: &[u32], n: usize) -> Result<Vec<Implicant>, Error> {
    let mut generation = Vec::with_capacity(minterms.len());
    for bucket in group_by_popcount(minterms, n)? {
        for minterm in bucket {
            generation.push(Implicant::minterm(minterm, n)?);
        }
    }
    Ok(generation)
}

/// Runs one combination pass. Returns the next generation, or `None` when
/// no pair combined (the fixed point: the current generation is the prime
/// implicant set). Implicants used in at least one combination are dropped;
/// the rest are carried forward unchanged.
fn combine_pass(current: &[Implicant]) -> Result<Option<Vec<Implicant>>, Error> {
    let mut buckets: BTreeMap<(u32, u32), Vec<usize>> = BTreeMap::new();
    for (ix, implicant) in current.iter().enumerate() {
        let key = (implicant.code().wildcard_mask(), implicant.code().ones());
        buckets.entry(key).or_default().push(ix);
    }

    let mut used = bitvec![0; current.len()];
    let mut next: Vec<Implicant> = Vec::new();
    let mut emitted: BTreeMap<BitCode, usize> = BTreeMap::new();

    for (&(mask, ones), lower) in &buckets {
        let upper = match buckets.get(&(mask, ones + 1)) {
            Some(upper) => upper,
            None => continue,
        };
        for (&i, &j) in lower.iter().cartesian_product(upper) {
            if let Some(merged) = current[i].combine(&current[j])? {
                used.set(i, true);
                used.set(j, true);
                push_merged(&mut next, &mut emitted, merged)?;
            }
        }
    }

    if next.is_empty() {
        return Ok(None);
    }
    for (ix, implicant) in current.iter().enumerate() {
        if !used[ix] {
            next.push(implicant.clone());
        }
    }
    Ok(Some(next))
}

/// Records a freshly combined implicant, collapsing duplicate codes that
/// arise from different merge orders within the same pass. Colliding codes
/// must carry identical covered sets.
fn push_merged(
    next: &mut Vec<Implicant>,
    emitted: &mut BTreeMap<BitCode, usize>,
    merged: Implicant,
) -> Result<(), Error> {
    match emitted.entry(merged.code().clone()) {
        Entry::Occupied(entry) => {
            if next[*entry.get()].minterms() != merged.minterms() {
                return Err(Error::InconsistentDuplicateCode {
                    code: merged.code().clone(),
                });
            }
        }
        Entry::Vacant(entry) => {
            entry.insert(next.len());
            next.push(merged);
        }
    }
    Ok(())
}

/// Iterates combination passes until a pass combines nothing, returning the
/// prime implicant generation and the number of passes run.
///
/// When the very first pass finds no combinable pair, the initial
/// per-minterm generation is returned untouched: every minterm is its own
/// prime implicant. Termination is guaranteed in at most `n` passes, since
/// each pass strictly increases the wildcard count of every code it emits.
pub(crate) fn reduce(initial: Vec<Implicant>) -> Result<(Vec<Implicant>, usize), Error> {
    let mut generation = initial;
    let mut passes = 0;
    loop {
        match combine_pass(&generation)? {
            Some(next) => {
                passes += 1;
                debug!(
                    "combination pass {}: {} -> {} implicants",
                    passes,
                    generation.len(),
                    next.len()
                );
                generation = next;
            }
            None => return Ok((generation, passes)),
        }
    }
}

/// Collapses a generation into a code-keyed map. Implicants that reduced to
/// the same wildcard code via different merge paths carry identical covered
/// sets by construction, so a colliding insert is an idempotent overwrite;
/// a collision with differing sets reports a defect in the combination
/// logic.
pub fn dedupe(
    generation: impl IntoIterator<Item = Implicant>,
) -> Result<BTreeMap<BitCode, BTreeSet<u32>>, Error> {
    let mut unique = BTreeMap::new();
    for implicant in generation {
        let (code, minterms) = implicant.into_parts();
        match unique.entry(code) {
            Entry::Occupied(entry) => {
                if entry.get() != &minterms {
                    return Err(Error::InconsistentDuplicateCode {
                        code: entry.key().clone(),
                    });
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(minterms);
            }
        }
    }
    Ok(unique)
}

/// The complete prime implicant computation: group, reduce to the fixed
/// point, deduplicate.
pub fn prime_implicants(
    minterms: &[u32],
    n: usize,
) -> Result<BTreeMap<BitCode, BTreeSet<u32>>, Error> {
    let initial = initial_generation(minterms, n)?;
    let (generation, passes) = reduce(initial)?;
    debug!(
        "fixed point after {} passes, {} prime implicant candidates",
        passes,
        generation.len()
    );
    dedupe(generation)
}
